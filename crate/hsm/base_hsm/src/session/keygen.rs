//! Key generation and derivation commands.
//!
//! Each operation is a single blocking PKCS#11 call: encode the template,
//! borrow the mechanism's foreign view, call, and check the returned
//! handle. The mechanism is taken by value so its parameter buffer is
//! owned across the call; the encoded template is a local that outlives
//! it the same way. A success status with a zero handle is reported as
//! an invariant violation, never conflated with a device error.

use pkcs11_sys::{CK_INVALID_HANDLE, CK_OBJECT_HANDLE};
use tracing::debug;

use crate::{
    AttributeTemplate, HError, HResult, Mechanism, hsm_call, session::Session,
};

impl Session {
    /// Generate a symmetric key and return its object handle.
    pub fn generate_key(
        &self,
        mut mechanism: Mechanism,
        template: &AttributeTemplate,
    ) -> HResult<CK_OBJECT_HANDLE> {
        let mut encoded = template.encode()?;
        let mut ck_mechanism = mechanism.as_ck_mechanism()?;
        let mut key_handle: CK_OBJECT_HANDLE = CK_INVALID_HANDLE;
        hsm_call!(
            self.hsm(),
            format!("Failed to generate key with {}", mechanism.name()),
            C_GenerateKey,
            self.session_handle(),
            &raw mut ck_mechanism,
            encoded.as_mut_ptr(),
            encoded.count(),
            &raw mut key_handle
        );
        if key_handle == CK_INVALID_HANDLE {
            return Err(HError::InvariantViolation(format!(
                "{} reported success but returned a null key handle",
                mechanism.name()
            )));
        }
        debug!("Generated key with handle {key_handle}");
        Ok(key_handle)
    }

    /// Generate a public/private key pair; returns (public, private).
    pub fn generate_key_pair(
        &self,
        mut mechanism: Mechanism,
        public_template: &AttributeTemplate,
        private_template: &AttributeTemplate,
    ) -> HResult<(CK_OBJECT_HANDLE, CK_OBJECT_HANDLE)> {
        let mut encoded_public = public_template.encode()?;
        let mut encoded_private = private_template.encode()?;
        let mut ck_mechanism = mechanism.as_ck_mechanism()?;
        let mut public_handle: CK_OBJECT_HANDLE = CK_INVALID_HANDLE;
        let mut private_handle: CK_OBJECT_HANDLE = CK_INVALID_HANDLE;
        hsm_call!(
            self.hsm(),
            format!("Failed to generate key pair with {}", mechanism.name()),
            C_GenerateKeyPair,
            self.session_handle(),
            &raw mut ck_mechanism,
            encoded_public.as_mut_ptr(),
            encoded_public.count(),
            encoded_private.as_mut_ptr(),
            encoded_private.count(),
            &raw mut public_handle,
            &raw mut private_handle
        );
        if public_handle == CK_INVALID_HANDLE || private_handle == CK_INVALID_HANDLE {
            return Err(HError::InvariantViolation(format!(
                "{} reported success but returned a null handle (public: {public_handle}, \
                 private: {private_handle})",
                mechanism.name()
            )));
        }
        debug!("Generated key pair: public {public_handle}, private {private_handle}");
        Ok((public_handle, private_handle))
    }

    /// Derive a new key from `base_key_handle` and return its handle.
    pub fn derive_key(
        &self,
        base_key_handle: CK_OBJECT_HANDLE,
        mut mechanism: Mechanism,
        template: &AttributeTemplate,
    ) -> HResult<CK_OBJECT_HANDLE> {
        let mut encoded = template.encode()?;
        let mut ck_mechanism = mechanism.as_ck_mechanism()?;
        let mut derived_handle: CK_OBJECT_HANDLE = CK_INVALID_HANDLE;
        hsm_call!(
            self.hsm(),
            format!(
                "Failed to derive key from handle {base_key_handle} with {}",
                mechanism.name()
            ),
            C_DeriveKey,
            self.session_handle(),
            &raw mut ck_mechanism,
            base_key_handle,
            encoded.as_mut_ptr(),
            encoded.count(),
            &raw mut derived_handle
        );
        if derived_handle == CK_INVALID_HANDLE {
            return Err(HError::InvariantViolation(format!(
                "{} reported success but returned a null derived key handle",
                mechanism.name()
            )));
        }
        debug!("Derived key with handle {derived_handle}");
        Ok(derived_handle)
    }
}
