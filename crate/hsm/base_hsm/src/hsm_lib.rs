use std::ptr;

use libloading::Library;
use pkcs11_sys::*;

use crate::{HError, HResult, rv::rv_description};

/// Function table over a vendor PKCS#11 library, loaded at runtime.
///
/// All fields are function pointers resolved from the shared library.
/// `C_Initialize` is called with OS locking enabled when the table is
/// built; `C_Finalize` runs on drop.
#[allow(dead_code)]
pub struct HsmLib {
    _library: Library,
    pub(crate) C_Initialize: CK_C_Initialize,
    pub(crate) C_Finalize: CK_C_Finalize,

    pub(crate) C_GetInfo: CK_C_GetInfo,
    pub(crate) C_GetSlotList: CK_C_GetSlotList,

    pub(crate) C_OpenSession: CK_C_OpenSession,
    pub(crate) C_CloseSession: CK_C_CloseSession,
    pub(crate) C_Login: CK_C_Login,
    pub(crate) C_Logout: CK_C_Logout,

    pub(crate) C_GenerateKey: CK_C_GenerateKey,
    pub(crate) C_GenerateKeyPair: CK_C_GenerateKeyPair,
    pub(crate) C_DeriveKey: CK_C_DeriveKey,
    pub(crate) C_GenerateRandom: CK_C_GenerateRandom,

    pub(crate) C_GetAttributeValue: CK_C_GetAttributeValue,
    pub(crate) C_DestroyObject: CK_C_DestroyObject,

    pub(crate) C_FindObjectsInit: CK_C_FindObjectsInit,
    pub(crate) C_FindObjects: CK_C_FindObjects,
    pub(crate) C_FindObjectsFinal: CK_C_FindObjectsFinal,
}

impl HsmLib {
    pub(crate) fn instantiate<P>(path: P) -> HResult<Self>
    where
        P: AsRef<std::ffi::OsStr>,
    {
        unsafe {
            let library = Library::new(path)?;
            let hsm_lib = HsmLib {
                C_Initialize: Some(*library.get(b"C_Initialize")?),
                C_Finalize: Some(*library.get(b"C_Finalize")?),
                C_GetInfo: Some(*library.get(b"C_GetInfo")?),
                C_GetSlotList: Some(*library.get(b"C_GetSlotList")?),
                C_OpenSession: Some(*library.get(b"C_OpenSession")?),
                C_CloseSession: Some(*library.get(b"C_CloseSession")?),
                C_Login: Some(*library.get(b"C_Login")?),
                C_Logout: Some(*library.get(b"C_Logout")?),
                C_GenerateKey: Some(*library.get(b"C_GenerateKey")?),
                C_GenerateKeyPair: Some(*library.get(b"C_GenerateKeyPair")?),
                C_DeriveKey: Some(*library.get(b"C_DeriveKey")?),
                C_GenerateRandom: Some(*library.get(b"C_GenerateRandom")?),
                C_GetAttributeValue: Some(*library.get(b"C_GetAttributeValue")?),
                C_DestroyObject: Some(*library.get(b"C_DestroyObject")?),
                C_FindObjectsInit: Some(*library.get(b"C_FindObjectsInit")?),
                C_FindObjects: Some(*library.get(b"C_FindObjects")?),
                C_FindObjectsFinal: Some(*library.get(b"C_FindObjectsFinal")?),
                // we need to keep the library alive
                _library: library,
            };
            Self::initialize(&hsm_lib)?;
            Ok(hsm_lib)
        }
    }

    fn initialize(hsm_lib: &HsmLib) -> HResult<()> {
        let pInitArgs = CK_C_INITIALIZE_ARGS {
            CreateMutex: None,
            DestroyMutex: None,
            LockMutex: None,
            UnlockMutex: None,
            flags: CKF_OS_LOCKING_OK,
            pReserved: ptr::null_mut(),
        };
        unsafe {
            let rv = hsm_lib.C_Initialize.ok_or_else(|| {
                HError::Default("C_Initialize not available on library".to_owned())
            })?(ptr::from_ref(&pInitArgs)
                .cast::<std::ffi::c_void>()
                .cast_mut());
            if rv != CKR_OK {
                return Err(HError::Device {
                    context: "Failed initializing the HSM".to_owned(),
                    rv,
                    description: rv_description(rv),
                });
            }
            Ok(())
        }
    }

    fn finalize(&self) -> HResult<()> {
        unsafe {
            let rv = self.C_Finalize.ok_or_else(|| {
                HError::Default("C_Finalize not available on library".to_owned())
            })?(ptr::null_mut());
            if rv != CKR_OK {
                return Err(HError::Device {
                    context: "Failed to finalize the HSM".to_owned(),
                    rv,
                    description: rv_description(rv),
                });
            }
            Ok(())
        }
    }
}

impl Drop for HsmLib {
    fn drop(&mut self) {
        let _ = self.finalize();
    }
}
