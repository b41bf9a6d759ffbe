#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

mod attributes;
mod base_hsm;
mod curves;
mod error;
mod hsm_lib;
mod mechanism;
pub mod rv;
mod session;
mod slots;
mod templates;

pub mod test_helpers;
pub mod tests_shared;

pub use attributes::{
    Attribute, AttributeKind, AttributeTemplate, AttributeValue, EncodedTemplate, decode,
    expected_kind,
};
pub use base_hsm::{BaseHsm, Info};
pub use curves::Curve;
pub use error::{HError, HResult};
pub use mechanism::{Mechanism, MechanismParameter, mechanism_name};
pub use session::{AttributeMismatch, Session};
pub use slots::{ObjectHandlesCache, SlotManager};
pub use templates::{
    SYMMETRIC_KEY_GEN_MECHANISMS, dh_private_key_template, dh_public_key_template,
    dsa_private_key_template, dsa_public_key_template, ec_private_key_template,
    ec_public_key_template, rsa_private_key_template, rsa_public_key_template,
    symmetric_key_template,
};

/// Invoke a PKCS#11 entry point from the loaded function table and turn a
/// non-success return value into an `HError::Device` carrying the code
/// and its symbolic name. A macro is used to keep the unsafe call inline
/// with its mutable pointer arguments.
#[macro_export]
macro_rules! hsm_call {
    ($hsm:expr, $msg:expr, $func:ident $(, $arg:expr)* $(,)?) => {{
        #[allow(unsafe_code)]
        let rv = unsafe {
            $hsm.$func.ok_or_else(|| {
                $crate::HError::Default(
                    concat!(stringify!($func), " not available on library").to_owned(),
                )
            })?($($arg),*)
        };
        if !$crate::rv::is_success(rv) {
            return Err($crate::HError::Device {
                context: $msg.to_string(),
                rv,
                description: $crate::rv::rv_description(rv),
            });
        }
    }};
}
