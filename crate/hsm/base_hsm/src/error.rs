use std::num::TryFromIntError;

use pkcs11_sys::CK_RV;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HError {
    /// A template could not be serialized into its foreign representation.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A mechanism was built with a missing or extraneous parameter.
    /// Raised before any call crosses the foreign boundary.
    #[error("parameter error: {0}")]
    Parameter(String),

    /// The HSM returned a non-success status code.
    #[error("{context}: {description} (rv: {rv:#010x})")]
    Device {
        context: String,
        rv: CK_RV,
        description: &'static str,
    },

    /// The HSM reported success but the output violates the operation
    /// contract, e.g. a zero object handle.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    LibLoading(#[from] libloading::Error),

    #[error(transparent)]
    TryFromInt(#[from] TryFromIntError),

    #[error("{0}")]
    Default(String),
}

pub type HResult<T> = Result<T, HError>;
