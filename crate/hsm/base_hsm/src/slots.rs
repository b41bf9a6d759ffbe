use std::{
    num::NonZeroUsize,
    ptr,
    sync::{Arc, Mutex},
};

use lru::LruCache;
use pkcs11_sys::{
    CK_FLAGS, CK_OBJECT_HANDLE, CK_SESSION_HANDLE, CK_SLOT_ID, CK_ULONG, CK_UTF8CHAR_PTR,
    CKF_RW_SESSION, CKF_SERIAL_SESSION, CKR_OK, CKR_USER_ALREADY_LOGGED_IN, CKU_USER,
};
use tracing::warn;

use crate::{HError, HResult, Session, hsm_lib::HsmLib, rv::rv_description};

/// LRU cache mapping object labels to their PKCS#11 object handles, so
/// repeated lookups of the same object skip the find-objects round trip.
pub struct ObjectHandlesCache(Mutex<LruCache<Vec<u8>, CK_OBJECT_HANDLE>>);

impl Default for ObjectHandlesCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectHandlesCache {
    pub fn new() -> Self {
        #[allow(unsafe_code)]
        let max = unsafe { NonZeroUsize::new_unchecked(100) };
        ObjectHandlesCache(Mutex::new(LruCache::new(max)))
    }

    pub fn get(&self, key: &[u8]) -> HResult<Option<CK_OBJECT_HANDLE>> {
        Ok(self
            .0
            .lock()
            .map_err(|_| HError::Default("failed to lock the handles cache".to_owned()))?
            .get(key)
            .copied())
    }

    pub fn insert(&self, key: Vec<u8>, value: CK_OBJECT_HANDLE) -> HResult<()> {
        self.0
            .lock()
            .map_err(|_| HError::Default("failed to lock the handles cache".to_owned()))?
            .put(key, value);
        Ok(())
    }

    pub fn remove(&self, key: &[u8]) -> HResult<()> {
        self.0
            .lock()
            .map_err(|_| HError::Default("failed to lock the handles cache".to_owned()))?
            .pop(key);
        Ok(())
    }

    pub fn clear(&self) -> HResult<()> {
        self.0
            .lock()
            .map_err(|_| HError::Default("failed to lock the handles cache".to_owned()))?
            .clear();
        Ok(())
    }
}

/// Manager for one PKCS#11 slot.
///
/// Holds the function table, the slot's handle cache, and, when a
/// password was supplied, a long-lived login session that keeps the slot
/// authenticated for the manager's lifetime.
pub struct SlotManager {
    hsm_lib: Arc<HsmLib>,
    slot_id: usize,
    object_handles_cache: Arc<ObjectHandlesCache>,
    _login_session: Option<Session>,
}

impl SlotManager {
    /// Create a manager for `slot_id`, logging in as `CKU_USER` when a
    /// password is provided.
    pub fn instantiate(
        hsm_lib: Arc<HsmLib>,
        slot_id: usize,
        login_password: Option<String>,
    ) -> HResult<Self> {
        let object_handles_cache = Arc::new(ObjectHandlesCache::new());
        if let Some(password) = login_password {
            let login_session = Self::open_session_(
                &hsm_lib,
                slot_id,
                false,
                object_handles_cache.clone(),
                Some(password),
            )?;
            Ok(SlotManager {
                hsm_lib,
                slot_id,
                object_handles_cache,
                _login_session: Some(login_session),
            })
        } else {
            Ok(SlotManager {
                hsm_lib,
                slot_id,
                object_handles_cache,
                _login_session: None,
            })
        }
    }

    /// Open a new session on this slot.
    /// The session is closed when [`Session::close`] is called.
    pub fn open_session(&self, read_write: bool) -> HResult<Session> {
        Self::open_session_(
            &self.hsm_lib,
            self.slot_id,
            read_write,
            self.object_handles_cache.clone(),
            None,
        )
    }

    fn open_session_(
        hsm_lib: &Arc<HsmLib>,
        slot_id: usize,
        read_write: bool,
        object_handles_cache: Arc<ObjectHandlesCache>,
        login_password: Option<String>,
    ) -> HResult<Session> {
        let slot_id = CK_SLOT_ID::try_from(slot_id)?;
        let flags: CK_FLAGS = if read_write {
            CKF_RW_SESSION | CKF_SERIAL_SESSION
        } else {
            CKF_SERIAL_SESSION
        };
        let mut session_handle: CK_SESSION_HANDLE = 0;

        unsafe {
            let rv = hsm_lib.C_OpenSession.ok_or_else(|| {
                HError::Default("C_OpenSession not available on library".to_owned())
            })?(slot_id, flags, ptr::null_mut(), None, &raw mut session_handle);
            if rv != CKR_OK {
                return Err(HError::Device {
                    context: "Failed opening a session".to_owned(),
                    rv,
                    description: rv_description(rv),
                });
            }
            if let Some(password) = login_password.as_ref() {
                let mut pwd_bytes = password.as_bytes().to_vec();
                let rv = hsm_lib.C_Login.ok_or_else(|| {
                    HError::Default("C_Login not available on library".to_owned())
                })?(
                    session_handle,
                    CKU_USER,
                    pwd_bytes.as_mut_ptr() as CK_UTF8CHAR_PTR,
                    CK_ULONG::try_from(pwd_bytes.len())?,
                );
                if rv == CKR_USER_ALREADY_LOGGED_IN {
                    warn!("user already logged in, ignoring login");
                } else if rv != CKR_OK {
                    return Err(HError::Device {
                        context: "Failed logging in".to_owned(),
                        rv,
                        description: rv_description(rv),
                    });
                }
            }
            Ok(Session::new(
                hsm_lib.clone(),
                session_handle,
                object_handles_cache,
                login_password.is_some(),
            ))
        }
    }
}
