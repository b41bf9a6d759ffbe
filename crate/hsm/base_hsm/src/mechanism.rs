//! Mechanism descriptors with owned parameter buffers.
//!
//! A `Mechanism` is validated at construction: a mechanism that needs a
//! parameter cannot be built without one and vice versa, so the mismatch
//! surfaces as `HError::Parameter` before anything reaches the device.
//! The descriptor owns the serialized parameter, so the pointer placed in
//! the `CK_MECHANISM` stays valid for as long as the descriptor lives.

use std::ptr;

use pkcs11_sys::*;

use crate::{HError, HResult};

/// Parameter payload for mechanisms that take one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanismParameter {
    /// A key handle passed as a native-width `CK_ULONG`, the form
    /// `CKM_CONCATENATE_BASE_AND_KEY` expects for its second key.
    ObjectHandle(CK_OBJECT_HANDLE),
}

impl MechanismParameter {
    fn serialize(self) -> Box<[u8]> {
        match self {
            Self::ObjectHandle(handle) => Box::from(handle.to_ne_bytes()),
        }
    }
}

/// Mechanisms whose parameter is a key handle, the only shape
/// [`MechanismParameter`] can marshal. The data-based derivation
/// mechanisms take byte-string parameter structs this crate does not
/// build, so a handle parameter on them is rejected at construction.
const fn requires_parameter(mechanism_type: CK_MECHANISM_TYPE) -> bool {
    matches!(mechanism_type, CKM_CONCATENATE_BASE_AND_KEY)
}

#[derive(Debug)]
pub struct Mechanism {
    mechanism_type: CK_MECHANISM_TYPE,
    parameter: Option<Box<[u8]>>,
}

impl Mechanism {
    /// Build a descriptor, checking the parameter against what the
    /// mechanism requires.
    pub fn new(
        mechanism_type: CK_MECHANISM_TYPE,
        parameter: Option<MechanismParameter>,
    ) -> HResult<Self> {
        match (requires_parameter(mechanism_type), &parameter) {
            (true, None) => {
                return Err(HError::Parameter(format!(
                    "mechanism {mechanism_type:#x} requires a parameter"
                )));
            }
            (false, Some(_)) => {
                return Err(HError::Parameter(format!(
                    "mechanism {mechanism_type:#x} does not take a parameter"
                )));
            }
            _ => {}
        }
        Ok(Self {
            mechanism_type,
            parameter: parameter.map(MechanismParameter::serialize),
        })
    }

    pub const fn mechanism_type(&self) -> CK_MECHANISM_TYPE {
        self.mechanism_type
    }

    /// Symbolic name for logging and error contexts.
    pub const fn name(&self) -> &'static str {
        mechanism_name(self.mechanism_type)
    }

    /// The foreign view of this descriptor. The embedded pointer targets
    /// the buffer owned by `self`; keep the descriptor alive until the
    /// call using the returned struct has completed.
    pub fn as_ck_mechanism(&mut self) -> HResult<CK_MECHANISM> {
        let (p_parameter, parameter_len) = match self.parameter.as_mut() {
            Some(buffer) => (
                buffer.as_mut_ptr().cast::<std::ffi::c_void>(),
                CK_ULONG::try_from(buffer.len())?,
            ),
            None => (ptr::null_mut(), 0),
        };
        Ok(CK_MECHANISM {
            mechanism: self.mechanism_type,
            pParameter: p_parameter,
            ulParameterLen: parameter_len,
        })
    }
}

pub const fn mechanism_name(mechanism_type: CK_MECHANISM_TYPE) -> &'static str {
    match mechanism_type {
        CKM_RSA_PKCS_KEY_PAIR_GEN => "CKM_RSA_PKCS_KEY_PAIR_GEN",
        CKM_RSA_X9_31_KEY_PAIR_GEN => "CKM_RSA_X9_31_KEY_PAIR_GEN",
        CKM_DSA_KEY_PAIR_GEN => "CKM_DSA_KEY_PAIR_GEN",
        CKM_DH_PKCS_KEY_PAIR_GEN => "CKM_DH_PKCS_KEY_PAIR_GEN",
        CKM_EC_KEY_PAIR_GEN => "CKM_EC_KEY_PAIR_GEN",
        CKM_RC2_KEY_GEN => "CKM_RC2_KEY_GEN",
        CKM_RC4_KEY_GEN => "CKM_RC4_KEY_GEN",
        CKM_RC5_KEY_GEN => "CKM_RC5_KEY_GEN",
        CKM_DES_KEY_GEN => "CKM_DES_KEY_GEN",
        CKM_DES2_KEY_GEN => "CKM_DES2_KEY_GEN",
        CKM_DES3_KEY_GEN => "CKM_DES3_KEY_GEN",
        CKM_CAST_KEY_GEN => "CKM_CAST_KEY_GEN",
        CKM_CAST3_KEY_GEN => "CKM_CAST3_KEY_GEN",
        CKM_CAST128_KEY_GEN => "CKM_CAST128_KEY_GEN",
        CKM_GENERIC_SECRET_KEY_GEN => "CKM_GENERIC_SECRET_KEY_GEN",
        CKM_AES_KEY_GEN => "CKM_AES_KEY_GEN",
        CKM_SEED_KEY_GEN => "CKM_SEED_KEY_GEN",
        CKM_ARIA_KEY_GEN => "CKM_ARIA_KEY_GEN",
        CKM_CONCATENATE_BASE_AND_KEY => "CKM_CONCATENATE_BASE_AND_KEY",
        CKM_CONCATENATE_BASE_AND_DATA => "CKM_CONCATENATE_BASE_AND_DATA",
        CKM_CONCATENATE_DATA_AND_BASE => "CKM_CONCATENATE_DATA_AND_BASE",
        CKM_XOR_BASE_AND_DATA => "CKM_XOR_BASE_AND_DATA",
        CKM_EXTRACT_KEY_FROM_KEY => "CKM_EXTRACT_KEY_FROM_KEY",
        _ => "CKM_UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_parameter_fails_before_ffi() {
        let err = Mechanism::new(CKM_CONCATENATE_BASE_AND_KEY, None).unwrap_err();
        assert!(matches!(err, HError::Parameter(_)));
    }

    #[test]
    fn extraneous_parameter_fails_before_ffi() {
        let err = Mechanism::new(
            CKM_AES_KEY_GEN,
            Some(MechanismParameter::ObjectHandle(42)),
        )
        .unwrap_err();
        assert!(matches!(err, HError::Parameter(_)));
    }

    #[test]
    fn handle_parameter_only_fits_key_concatenation() -> HResult<()> {
        let mechanism = Mechanism::new(
            CKM_CONCATENATE_BASE_AND_KEY,
            Some(MechanismParameter::ObjectHandle(7)),
        )?;
        assert_eq!(mechanism.mechanism_type(), CKM_CONCATENATE_BASE_AND_KEY);
        // data-based derivation wants a byte-string struct, not a handle
        for mechanism_type in [
            CKM_CONCATENATE_BASE_AND_DATA,
            CKM_CONCATENATE_DATA_AND_BASE,
            CKM_XOR_BASE_AND_DATA,
            CKM_EXTRACT_KEY_FROM_KEY,
        ] {
            let err = Mechanism::new(
                mechanism_type,
                Some(MechanismParameter::ObjectHandle(7)),
            )
            .unwrap_err();
            assert!(matches!(err, HError::Parameter(_)));
        }
        Ok(())
    }

    #[test]
    fn parameterless_mechanism_encodes_null() -> HResult<()> {
        let mut mechanism = Mechanism::new(CKM_DES3_KEY_GEN, None)?;
        let ck = mechanism.as_ck_mechanism()?;
        let mech = ck.mechanism;
        let len = ck.ulParameterLen;
        assert_eq!(mech, CKM_DES3_KEY_GEN);
        assert!(ck.pParameter.is_null());
        assert_eq!(len, 0);
        Ok(())
    }

    #[test]
    fn object_handle_parameter_has_native_ulong_width() -> HResult<()> {
        let mut mechanism = Mechanism::new(
            CKM_CONCATENATE_BASE_AND_KEY,
            Some(MechanismParameter::ObjectHandle(0x1234)),
        )?;
        let ck = mechanism.as_ck_mechanism()?;
        let len = ck.ulParameterLen;
        assert_eq!(len, CK_ULONG::try_from(size_of::<CK_ULONG>())?);
        assert!(!ck.pParameter.is_null());
        #[allow(unsafe_code)]
        let handle = unsafe {
            let bytes =
                std::slice::from_raw_parts(ck.pParameter.cast::<u8>(), size_of::<CK_ULONG>());
            CK_ULONG::from_ne_bytes(bytes.try_into().unwrap())
        };
        assert_eq!(handle, 0x1234);
        Ok(())
    }
}
