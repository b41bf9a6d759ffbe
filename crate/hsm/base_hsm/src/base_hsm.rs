use std::{
    collections::HashMap,
    ffi::CStr,
    fmt,
    fmt::{Display, Formatter},
    ptr,
    sync::{Arc, Mutex},
};

use pkcs11_sys::{CK_INFO, CK_SLOT_ID, CK_TRUE, CK_ULONG, CKR_OK};
use tracing::debug;

use crate::{HError, HResult, SlotManager, hsm_call, hsm_lib::HsmLib, rv::rv_description};

struct SlotState {
    password: Option<String>,
    slot: Option<Arc<SlotManager>>,
}

/// Entry point over a vendor PKCS#11 library: loads it, tracks which
/// slots may be used and with which password, and hands out one
/// [`SlotManager`] per opened slot.
pub struct BaseHsm {
    hsm_lib: Arc<HsmLib>,
    slots: Mutex<HashMap<usize, SlotState>>,
}

impl BaseHsm {
    pub fn instantiate<P: AsRef<std::ffi::OsStr>>(
        path: P,
        passwords: HashMap<usize, Option<String>>,
    ) -> HResult<Self> {
        let hsm_lib = Arc::new(HsmLib::instantiate(path)?);
        let mut slots = HashMap::with_capacity(passwords.len());
        for (k, v) in &passwords {
            slots.insert(
                *k,
                SlotState {
                    password: v.clone(),
                    slot: None,
                },
            );
        }
        Ok(BaseHsm {
            hsm_lib,
            slots: Mutex::new(slots),
        })
    }

    /// Get a slot
    /// If a slot has already been opened, returns the opened slot.
    /// To close a slot before re-opening it with another password, call `close_slot()` first
    pub fn get_slot(&self, slot_id: usize) -> HResult<Arc<SlotManager>> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| HError::Default("Failed to acquire lock on slots".to_owned()))?;
        if let Some(slot_state) = slots.get_mut(&slot_id) {
            if let Some(s) = &slot_state.slot {
                Ok(s.clone())
            } else {
                let manager = Arc::new(SlotManager::instantiate(
                    self.hsm_lib.clone(),
                    slot_id,
                    slot_state.password.clone(),
                )?);
                slot_state.slot = Some(manager.clone());
                Ok(manager)
            }
        } else {
            Err(HError::Default(format!("slot {slot_id} is not accessible")))
        }
    }

    pub fn close_slot(&self, slot_id: usize) -> HResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| HError::Default("Failed to acquire lock on slots".to_owned()))?;
        slots.remove(&slot_id);
        Ok(())
    }

    pub fn get_info(&self) -> HResult<Info> {
        unsafe {
            let mut info = CK_INFO::default();
            let rv = self.hsm_lib.C_GetInfo.ok_or_else(|| {
                HError::Default("C_GetInfo not available on library".to_owned())
            })?(&raw mut info);
            if rv != CKR_OK {
                return Err(HError::Device {
                    context: "Failed getting HSM info".to_owned(),
                    rv,
                    description: rv_description(rv),
                });
            }
            Ok(info.into())
        }
    }

    /// Slot ids with a token present.
    pub fn get_available_slot_list(&self) -> HResult<Vec<usize>> {
        let mut count: CK_ULONG = 0;
        hsm_call!(
            self.hsm_lib,
            "Failed getting the slot count",
            C_GetSlotList,
            CK_TRUE,
            ptr::null_mut(),
            &raw mut count
        );
        let mut slot_ids = vec![CK_SLOT_ID::default(); usize::try_from(count)?];
        hsm_call!(
            self.hsm_lib,
            "Failed getting the slot list",
            C_GetSlotList,
            CK_TRUE,
            slot_ids.as_mut_ptr(),
            &raw mut count
        );
        slot_ids.truncate(usize::try_from(count)?);
        debug!("Found {count} slot(s) with a token present");
        slot_ids
            .into_iter()
            .map(|id| usize::try_from(id).map_err(HError::from))
            .collect()
    }
}

pub struct Info {
    pub cryptokiVersion: (u8, u8),
    pub manufacturerID: String,
    pub flags: u64,
    pub libraryDescription: String,
    pub libraryVersion: (u8, u8),
}

impl From<CK_INFO> for Info {
    fn from(info: CK_INFO) -> Self {
        #[cfg(target_os = "windows")]
        let flags = u64::from(info.flags);
        #[cfg(not(target_os = "windows"))]
        let flags = info.flags;
        Info {
            cryptokiVersion: (info.cryptokiVersion.major, info.cryptokiVersion.minor),
            manufacturerID: CStr::from_bytes_until_nul(&info.manufacturerID)
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            flags,
            libraryDescription: CStr::from_bytes_until_nul(&info.libraryDescription)
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            libraryVersion: (info.libraryVersion.major, info.libraryVersion.minor),
        }
    }
}

impl Display for Info {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cryptoki Version: {}.{}\nManufacturer ID: {}\nFlags: {}\nLibrary Description: \
             {}\nLibrary Version: {}.{}",
            self.cryptokiVersion.0,
            self.cryptokiVersion.1,
            self.manufacturerID,
            self.flags,
            self.libraryDescription,
            self.libraryVersion.0,
            self.libraryVersion.1
        )
    }
}
