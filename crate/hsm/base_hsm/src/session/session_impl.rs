//! Session lifecycle and object management.
//!
//! A [`Session`] wraps an open PKCS#11 session handle and provides object
//! search, destruction and random generation. Key generation and
//! derivation live in `keygen`, attribute verification in `verify`.
//! Login state is tracked so closing a login session also logs out.

use std::sync::Arc;

use pkcs11_sys::{CK_ATTRIBUTE, CK_OBJECT_HANDLE, CK_SESSION_HANDLE, CK_ULONG, CKA_LABEL};
use tracing::{debug, trace};

use crate::{HError, HResult, ObjectHandlesCache, hsm_call, hsm_lib::HsmLib};

/// Objects fetched per C_FindObjects round trip.
const FIND_MAX_OBJECT_COUNT: CK_ULONG = 32;

pub struct Session {
    hsm: Arc<HsmLib>,
    handle: CK_SESSION_HANDLE,
    object_handles_cache: Arc<ObjectHandlesCache>,
    logging_in: bool,
}

impl Session {
    pub fn new(
        hsm: Arc<HsmLib>,
        session_handle: CK_SESSION_HANDLE,
        object_handles_cache: Arc<ObjectHandlesCache>,
        logging_in: bool,
    ) -> Self {
        debug!("Creating new session: {session_handle}. Logging in? {logging_in}");
        Self {
            hsm,
            handle: session_handle,
            object_handles_cache,
            logging_in,
        }
    }

    pub(crate) fn hsm(&self) -> &Arc<HsmLib> {
        &self.hsm
    }

    pub(crate) const fn session_handle(&self) -> CK_SESSION_HANDLE {
        self.handle
    }

    /// Close the session and log out if necessary
    pub fn close(&self) -> HResult<()> {
        if self.logging_in {
            hsm_call!(self.hsm, "Failed logging out", C_Logout, self.handle);
        }
        hsm_call!(
            self.hsm,
            "Failed closing a session",
            C_CloseSession,
            self.handle
        );
        Ok(())
    }

    /// Retrieve all object handles matching the raw attribute template.
    /// An empty template matches every object in the slot.
    pub(crate) fn find_object_handles(
        &self,
        mut template: Vec<CK_ATTRIBUTE>,
    ) -> HResult<Vec<CK_OBJECT_HANDLE>> {
        let mut object_handles: Vec<CK_OBJECT_HANDLE> = Vec::new();
        hsm_call!(
            self.hsm,
            "Failed to initialize object search",
            C_FindObjectsInit,
            self.handle,
            template.as_mut_ptr(),
            CK_ULONG::try_from(template.len())?
        );

        let max_object_count = usize::try_from(FIND_MAX_OBJECT_COUNT)?;
        let mut handles_buf = vec![CK_OBJECT_HANDLE::default(); max_object_count];
        let mut object_count: CK_ULONG = 0;
        loop {
            hsm_call!(
                self.hsm,
                "Failed to find objects",
                C_FindObjects,
                self.handle,
                handles_buf.as_mut_ptr(),
                FIND_MAX_OBJECT_COUNT,
                &raw mut object_count
            );
            if object_count == 0 {
                break;
            }
            trace!("Found {object_count} objects");
            if object_count > FIND_MAX_OBJECT_COUNT {
                return Err(HError::InvariantViolation(
                    "more objects returned than requested".to_owned(),
                ));
            }
            object_handles.extend_from_slice(
                handles_buf
                    .get(..usize::try_from(object_count)?)
                    .ok_or_else(|| {
                        HError::InvariantViolation(
                            "invalid object count returned from HSM".to_owned(),
                        )
                    })?,
            );
        }
        hsm_call!(
            self.hsm,
            "Failed to finalize object search",
            C_FindObjectsFinal,
            self.handle
        );
        Ok(object_handles)
    }

    /// Retrieve the handle of the object labeled `object_id`, consulting
    /// the slot's LRU cache first.
    pub fn get_object_handle(&self, object_id: &[u8]) -> HResult<CK_OBJECT_HANDLE> {
        if let Some(handle) = self.object_handles_cache.get(object_id)? {
            return Ok(handle);
        }

        let template = [CK_ATTRIBUTE {
            type_: CKA_LABEL,
            pValue: object_id.as_ptr().cast::<std::ffi::c_void>().cast_mut(),
            ulValueLen: CK_ULONG::try_from(object_id.len())?,
        }];
        let object_handles = self.find_object_handles(template.to_vec())?;
        let object_handle = *object_handles
            .first()
            .ok_or_else(|| HError::Default("Object not found".to_owned()))?;

        self.object_handles_cache
            .insert(object_id.to_vec(), object_handle)?;
        Ok(object_handle)
    }

    /// Remove an object handle from the cache.
    pub fn delete_object_handle(&self, id: &[u8]) -> HResult<()> {
        self.object_handles_cache.remove(id)?;
        Ok(())
    }

    pub fn clear_object_handles(&self) -> HResult<()> {
        self.object_handles_cache.clear()?;
        Ok(())
    }

    /// Destroy an object in the HSM
    pub fn destroy_object(&self, object_handle: CK_OBJECT_HANDLE) -> HResult<()> {
        hsm_call!(
            self.hsm,
            "Failed to destroy object",
            C_DestroyObject,
            self.handle,
            object_handle
        );
        Ok(())
    }

    pub fn generate_random(&self, len: usize) -> HResult<Vec<u8>> {
        let mut values = vec![0_u8; len];
        hsm_call!(
            self.hsm,
            "Failed generating random data",
            C_GenerateRandom,
            self.handle,
            values.as_mut_ptr(),
            CK_ULONG::try_from(len)?
        );
        Ok(values)
    }
}
