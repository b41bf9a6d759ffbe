//! Hand-maintained Cryptoki (PKCS#11 v2.40) declarations.
//!
//! Only the surface used by the HSM key management crates is declared here:
//! the CK scalar types, the structures that cross the foreign-call boundary,
//! the function-pointer types resolved from a vendor library at runtime, and
//! the constant tables for object classes, key types, attributes, mechanisms
//! and return values.
//!
//! Layout rules follow pkcs11.h: structures are packed on Windows only, and
//! `CK_ULONG` is 32 bits wide there.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::c_void;

// Cryptoki mandates packed structs on Windows only.
macro_rules! cryptoki_aligned {
    ($decl:item) => {
        #[cfg(windows)]
        #[repr(C, packed)]
        $decl
        #[cfg(not(windows))]
        #[repr(C)]
        $decl
    };
}

pub type CK_BYTE = u8;
pub type CK_BYTE_PTR = *mut CK_BYTE;
pub type CK_CHAR = CK_BYTE;
pub type CK_UTF8CHAR = CK_BYTE;
pub type CK_UTF8CHAR_PTR = *mut CK_UTF8CHAR;
pub type CK_BBOOL = CK_BYTE;

#[cfg(windows)]
pub type CK_ULONG = u32;
#[cfg(not(windows))]
pub type CK_ULONG = std::os::raw::c_ulong;
pub type CK_ULONG_PTR = *mut CK_ULONG;

pub type CK_FLAGS = CK_ULONG;
pub type CK_VOID_PTR = *mut c_void;
pub type CK_VOID_PTR_PTR = *mut CK_VOID_PTR;

pub type CK_RV = CK_ULONG;
pub type CK_SLOT_ID = CK_ULONG;
pub type CK_SLOT_ID_PTR = *mut CK_SLOT_ID;
pub type CK_SESSION_HANDLE = CK_ULONG;
pub type CK_SESSION_HANDLE_PTR = *mut CK_SESSION_HANDLE;
pub type CK_OBJECT_HANDLE = CK_ULONG;
pub type CK_OBJECT_HANDLE_PTR = *mut CK_OBJECT_HANDLE;
pub type CK_OBJECT_CLASS = CK_ULONG;
pub type CK_KEY_TYPE = CK_ULONG;
pub type CK_ATTRIBUTE_TYPE = CK_ULONG;
pub type CK_MECHANISM_TYPE = CK_ULONG;
pub type CK_MECHANISM_TYPE_PTR = *mut CK_MECHANISM_TYPE;
pub type CK_USER_TYPE = CK_ULONG;
pub type CK_NOTIFICATION = CK_ULONG;

pub const CK_TRUE: CK_BBOOL = 1;
pub const CK_FALSE: CK_BBOOL = 0;

/// Always invalid as a session or object handle.
pub const CK_INVALID_HANDLE: CK_ULONG = 0;
pub const CK_UNAVAILABLE_INFORMATION: CK_ULONG = !0;

cryptoki_aligned! {
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CK_VERSION {
        pub major: CK_BYTE,
        pub minor: CK_BYTE,
    }
}

cryptoki_aligned! {
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CK_INFO {
        pub cryptokiVersion: CK_VERSION,
        pub manufacturerID: [CK_UTF8CHAR; 32],
        pub flags: CK_FLAGS,
        pub libraryDescription: [CK_UTF8CHAR; 32],
        pub libraryVersion: CK_VERSION,
    }
}
pub type CK_INFO_PTR = *mut CK_INFO;

cryptoki_aligned! {
    #[derive(Debug, Clone, Copy)]
    pub struct CK_ATTRIBUTE {
        pub type_: CK_ATTRIBUTE_TYPE,
        pub pValue: CK_VOID_PTR,
        pub ulValueLen: CK_ULONG,
    }
}
pub type CK_ATTRIBUTE_PTR = *mut CK_ATTRIBUTE;

cryptoki_aligned! {
    #[derive(Debug, Clone, Copy)]
    pub struct CK_MECHANISM {
        pub mechanism: CK_MECHANISM_TYPE,
        pub pParameter: CK_VOID_PTR,
        pub ulParameterLen: CK_ULONG,
    }
}
pub type CK_MECHANISM_PTR = *mut CK_MECHANISM;

pub type CK_CREATEMUTEX = Option<unsafe extern "C" fn(ppMutex: CK_VOID_PTR_PTR) -> CK_RV>;
pub type CK_DESTROYMUTEX = Option<unsafe extern "C" fn(pMutex: CK_VOID_PTR) -> CK_RV>;
pub type CK_LOCKMUTEX = Option<unsafe extern "C" fn(pMutex: CK_VOID_PTR) -> CK_RV>;
pub type CK_UNLOCKMUTEX = Option<unsafe extern "C" fn(pMutex: CK_VOID_PTR) -> CK_RV>;

cryptoki_aligned! {
    #[derive(Debug, Clone, Copy)]
    pub struct CK_C_INITIALIZE_ARGS {
        pub CreateMutex: CK_CREATEMUTEX,
        pub DestroyMutex: CK_DESTROYMUTEX,
        pub LockMutex: CK_LOCKMUTEX,
        pub UnlockMutex: CK_UNLOCKMUTEX,
        pub flags: CK_FLAGS,
        pub pReserved: CK_VOID_PTR,
    }
}

pub type CK_NOTIFY = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        event: CK_NOTIFICATION,
        pApplication: CK_VOID_PTR,
    ) -> CK_RV,
>;

/* Function-pointer types for the entry points resolved from the library */

pub type CK_C_Initialize = Option<unsafe extern "C" fn(pInitArgs: CK_VOID_PTR) -> CK_RV>;
pub type CK_C_Finalize = Option<unsafe extern "C" fn(pReserved: CK_VOID_PTR) -> CK_RV>;
pub type CK_C_GetInfo = Option<unsafe extern "C" fn(pInfo: CK_INFO_PTR) -> CK_RV>;
pub type CK_C_GetSlotList = Option<
    unsafe extern "C" fn(
        tokenPresent: CK_BBOOL,
        pSlotList: CK_SLOT_ID_PTR,
        pulCount: CK_ULONG_PTR,
    ) -> CK_RV,
>;
pub type CK_C_OpenSession = Option<
    unsafe extern "C" fn(
        slotID: CK_SLOT_ID,
        flags: CK_FLAGS,
        pApplication: CK_VOID_PTR,
        Notify: CK_NOTIFY,
        phSession: CK_SESSION_HANDLE_PTR,
    ) -> CK_RV,
>;
pub type CK_C_CloseSession = Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>;
pub type CK_C_Login = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        userType: CK_USER_TYPE,
        pPin: CK_UTF8CHAR_PTR,
        ulPinLen: CK_ULONG,
    ) -> CK_RV,
>;
pub type CK_C_Logout = Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>;
pub type CK_C_GenerateKey = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        pMechanism: CK_MECHANISM_PTR,
        pTemplate: CK_ATTRIBUTE_PTR,
        ulCount: CK_ULONG,
        phKey: CK_OBJECT_HANDLE_PTR,
    ) -> CK_RV,
>;
pub type CK_C_GenerateKeyPair = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        pMechanism: CK_MECHANISM_PTR,
        pPublicKeyTemplate: CK_ATTRIBUTE_PTR,
        ulPublicKeyAttributeCount: CK_ULONG,
        pPrivateKeyTemplate: CK_ATTRIBUTE_PTR,
        ulPrivateKeyAttributeCount: CK_ULONG,
        phPublicKey: CK_OBJECT_HANDLE_PTR,
        phPrivateKey: CK_OBJECT_HANDLE_PTR,
    ) -> CK_RV,
>;
pub type CK_C_DeriveKey = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        pMechanism: CK_MECHANISM_PTR,
        hBaseKey: CK_OBJECT_HANDLE,
        pTemplate: CK_ATTRIBUTE_PTR,
        ulAttributeCount: CK_ULONG,
        phKey: CK_OBJECT_HANDLE_PTR,
    ) -> CK_RV,
>;
pub type CK_C_GetAttributeValue = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        hObject: CK_OBJECT_HANDLE,
        pTemplate: CK_ATTRIBUTE_PTR,
        ulCount: CK_ULONG,
    ) -> CK_RV,
>;
pub type CK_C_DestroyObject = Option<
    unsafe extern "C" fn(hSession: CK_SESSION_HANDLE, hObject: CK_OBJECT_HANDLE) -> CK_RV,
>;
pub type CK_C_FindObjectsInit = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        pTemplate: CK_ATTRIBUTE_PTR,
        ulCount: CK_ULONG,
    ) -> CK_RV,
>;
pub type CK_C_FindObjects = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        phObject: CK_OBJECT_HANDLE_PTR,
        ulMaxObjectCount: CK_ULONG,
        pulObjectCount: CK_ULONG_PTR,
    ) -> CK_RV,
>;
pub type CK_C_FindObjectsFinal = Option<unsafe extern "C" fn(hSession: CK_SESSION_HANDLE) -> CK_RV>;
pub type CK_C_GenerateRandom = Option<
    unsafe extern "C" fn(
        hSession: CK_SESSION_HANDLE,
        RandomData: CK_BYTE_PTR,
        ulRandomLen: CK_ULONG,
    ) -> CK_RV,
>;

/* Session and initialization flags */

pub const CKF_TOKEN_PRESENT: CK_FLAGS = 0x0000_0001;
pub const CKF_RW_SESSION: CK_FLAGS = 0x0000_0002;
pub const CKF_SERIAL_SESSION: CK_FLAGS = 0x0000_0004;
pub const CKF_OS_LOCKING_OK: CK_FLAGS = 0x0000_0002;

/* User types */

pub const CKU_SO: CK_USER_TYPE = 0;
pub const CKU_USER: CK_USER_TYPE = 1;
pub const CKU_CONTEXT_SPECIFIC: CK_USER_TYPE = 2;

/* Object classes */

pub const CKO_DATA: CK_OBJECT_CLASS = 0x0000_0000;
pub const CKO_CERTIFICATE: CK_OBJECT_CLASS = 0x0000_0001;
pub const CKO_PUBLIC_KEY: CK_OBJECT_CLASS = 0x0000_0002;
pub const CKO_PRIVATE_KEY: CK_OBJECT_CLASS = 0x0000_0003;
pub const CKO_SECRET_KEY: CK_OBJECT_CLASS = 0x0000_0004;
pub const CKO_HW_FEATURE: CK_OBJECT_CLASS = 0x0000_0005;
pub const CKO_DOMAIN_PARAMETERS: CK_OBJECT_CLASS = 0x0000_0006;
pub const CKO_MECHANISM: CK_OBJECT_CLASS = 0x0000_0007;
pub const CKO_VENDOR_DEFINED: CK_OBJECT_CLASS = 0x8000_0000;

/* Key types */

pub const CKK_RSA: CK_KEY_TYPE = 0x0000_0000;
pub const CKK_DSA: CK_KEY_TYPE = 0x0000_0001;
pub const CKK_DH: CK_KEY_TYPE = 0x0000_0002;
pub const CKK_EC: CK_KEY_TYPE = 0x0000_0003;
pub const CKK_ECDSA: CK_KEY_TYPE = CKK_EC;
pub const CKK_GENERIC_SECRET: CK_KEY_TYPE = 0x0000_0010;
pub const CKK_RC2: CK_KEY_TYPE = 0x0000_0011;
pub const CKK_RC4: CK_KEY_TYPE = 0x0000_0012;
pub const CKK_DES: CK_KEY_TYPE = 0x0000_0013;
pub const CKK_DES2: CK_KEY_TYPE = 0x0000_0014;
pub const CKK_DES3: CK_KEY_TYPE = 0x0000_0015;
pub const CKK_CAST: CK_KEY_TYPE = 0x0000_0016;
pub const CKK_CAST3: CK_KEY_TYPE = 0x0000_0017;
pub const CKK_CAST128: CK_KEY_TYPE = 0x0000_0018;
pub const CKK_CAST5: CK_KEY_TYPE = CKK_CAST128;
pub const CKK_RC5: CK_KEY_TYPE = 0x0000_0019;
pub const CKK_AES: CK_KEY_TYPE = 0x0000_001F;
pub const CKK_ARIA: CK_KEY_TYPE = 0x0000_0026;
pub const CKK_SEED: CK_KEY_TYPE = 0x0000_002F;
pub const CKK_VENDOR_DEFINED: CK_KEY_TYPE = 0x8000_0000;

/* Attribute types */

pub const CKA_CLASS: CK_ATTRIBUTE_TYPE = 0x0000_0000;
pub const CKA_TOKEN: CK_ATTRIBUTE_TYPE = 0x0000_0001;
pub const CKA_PRIVATE: CK_ATTRIBUTE_TYPE = 0x0000_0002;
pub const CKA_LABEL: CK_ATTRIBUTE_TYPE = 0x0000_0003;
pub const CKA_VALUE: CK_ATTRIBUTE_TYPE = 0x0000_0011;
pub const CKA_KEY_TYPE: CK_ATTRIBUTE_TYPE = 0x0000_0100;
pub const CKA_ID: CK_ATTRIBUTE_TYPE = 0x0000_0102;
pub const CKA_SENSITIVE: CK_ATTRIBUTE_TYPE = 0x0000_0103;
pub const CKA_ENCRYPT: CK_ATTRIBUTE_TYPE = 0x0000_0104;
pub const CKA_DECRYPT: CK_ATTRIBUTE_TYPE = 0x0000_0105;
pub const CKA_WRAP: CK_ATTRIBUTE_TYPE = 0x0000_0106;
pub const CKA_UNWRAP: CK_ATTRIBUTE_TYPE = 0x0000_0107;
pub const CKA_SIGN: CK_ATTRIBUTE_TYPE = 0x0000_0108;
pub const CKA_VERIFY: CK_ATTRIBUTE_TYPE = 0x0000_010A;
pub const CKA_DERIVE: CK_ATTRIBUTE_TYPE = 0x0000_010C;
pub const CKA_MODULUS: CK_ATTRIBUTE_TYPE = 0x0000_0120;
pub const CKA_MODULUS_BITS: CK_ATTRIBUTE_TYPE = 0x0000_0121;
pub const CKA_PUBLIC_EXPONENT: CK_ATTRIBUTE_TYPE = 0x0000_0122;
pub const CKA_PRIVATE_EXPONENT: CK_ATTRIBUTE_TYPE = 0x0000_0123;
pub const CKA_PRIME: CK_ATTRIBUTE_TYPE = 0x0000_0130;
pub const CKA_SUBPRIME: CK_ATTRIBUTE_TYPE = 0x0000_0131;
pub const CKA_BASE: CK_ATTRIBUTE_TYPE = 0x0000_0132;
pub const CKA_VALUE_BITS: CK_ATTRIBUTE_TYPE = 0x0000_0160;
pub const CKA_VALUE_LEN: CK_ATTRIBUTE_TYPE = 0x0000_0161;
pub const CKA_EXTRACTABLE: CK_ATTRIBUTE_TYPE = 0x0000_0162;
pub const CKA_LOCAL: CK_ATTRIBUTE_TYPE = 0x0000_0163;
pub const CKA_NEVER_EXTRACTABLE: CK_ATTRIBUTE_TYPE = 0x0000_0164;
pub const CKA_ALWAYS_SENSITIVE: CK_ATTRIBUTE_TYPE = 0x0000_0165;
pub const CKA_MODIFIABLE: CK_ATTRIBUTE_TYPE = 0x0000_0170;
pub const CKA_EC_PARAMS: CK_ATTRIBUTE_TYPE = 0x0000_0180;
pub const CKA_ECDSA_PARAMS: CK_ATTRIBUTE_TYPE = CKA_EC_PARAMS;
pub const CKA_EC_POINT: CK_ATTRIBUTE_TYPE = 0x0000_0181;
pub const CKA_VENDOR_DEFINED: CK_ATTRIBUTE_TYPE = 0x8000_0000;

/* Mechanism types */

pub const CKM_RSA_PKCS_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0000;
pub const CKM_RSA_X9_31_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_000A;
pub const CKM_DSA_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0010;
pub const CKM_DH_PKCS_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_0020;
pub const CKM_RC2_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0100;
pub const CKM_RC4_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0110;
pub const CKM_DES_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0120;
pub const CKM_DES2_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0130;
pub const CKM_DES3_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0131;
pub const CKM_CAST_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0300;
pub const CKM_CAST3_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0310;
pub const CKM_CAST128_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0320;
pub const CKM_CAST5_KEY_GEN: CK_MECHANISM_TYPE = CKM_CAST128_KEY_GEN;
pub const CKM_RC5_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0330;
pub const CKM_GENERIC_SECRET_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0350;
pub const CKM_CONCATENATE_BASE_AND_KEY: CK_MECHANISM_TYPE = 0x0000_0360;
pub const CKM_CONCATENATE_BASE_AND_DATA: CK_MECHANISM_TYPE = 0x0000_0362;
pub const CKM_CONCATENATE_DATA_AND_BASE: CK_MECHANISM_TYPE = 0x0000_0363;
pub const CKM_XOR_BASE_AND_DATA: CK_MECHANISM_TYPE = 0x0000_0364;
pub const CKM_EXTRACT_KEY_FROM_KEY: CK_MECHANISM_TYPE = 0x0000_0365;
pub const CKM_ARIA_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0560;
pub const CKM_SEED_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_0650;
pub const CKM_EC_KEY_PAIR_GEN: CK_MECHANISM_TYPE = 0x0000_1040;
pub const CKM_ECDSA_KEY_PAIR_GEN: CK_MECHANISM_TYPE = CKM_EC_KEY_PAIR_GEN;
pub const CKM_AES_KEY_GEN: CK_MECHANISM_TYPE = 0x0000_1080;
pub const CKM_VENDOR_DEFINED: CK_MECHANISM_TYPE = 0x8000_0000;

/* Return values */

pub const CKR_OK: CK_RV = 0x0000_0000;
pub const CKR_CANCEL: CK_RV = 0x0000_0001;
pub const CKR_HOST_MEMORY: CK_RV = 0x0000_0002;
pub const CKR_SLOT_ID_INVALID: CK_RV = 0x0000_0003;
pub const CKR_GENERAL_ERROR: CK_RV = 0x0000_0005;
pub const CKR_FUNCTION_FAILED: CK_RV = 0x0000_0006;
pub const CKR_ARGUMENTS_BAD: CK_RV = 0x0000_0007;
pub const CKR_NO_EVENT: CK_RV = 0x0000_0008;
pub const CKR_NEED_TO_CREATE_THREADS: CK_RV = 0x0000_0009;
pub const CKR_CANT_LOCK: CK_RV = 0x0000_000A;
pub const CKR_ATTRIBUTE_READ_ONLY: CK_RV = 0x0000_0010;
pub const CKR_ATTRIBUTE_SENSITIVE: CK_RV = 0x0000_0011;
pub const CKR_ATTRIBUTE_TYPE_INVALID: CK_RV = 0x0000_0012;
pub const CKR_ATTRIBUTE_VALUE_INVALID: CK_RV = 0x0000_0013;
pub const CKR_ACTION_PROHIBITED: CK_RV = 0x0000_001B;
pub const CKR_DATA_INVALID: CK_RV = 0x0000_0020;
pub const CKR_DATA_LEN_RANGE: CK_RV = 0x0000_0021;
pub const CKR_DEVICE_ERROR: CK_RV = 0x0000_0030;
pub const CKR_DEVICE_MEMORY: CK_RV = 0x0000_0031;
pub const CKR_DEVICE_REMOVED: CK_RV = 0x0000_0032;
pub const CKR_ENCRYPTED_DATA_INVALID: CK_RV = 0x0000_0040;
pub const CKR_ENCRYPTED_DATA_LEN_RANGE: CK_RV = 0x0000_0041;
pub const CKR_FUNCTION_CANCELED: CK_RV = 0x0000_0050;
pub const CKR_FUNCTION_NOT_PARALLEL: CK_RV = 0x0000_0051;
pub const CKR_FUNCTION_NOT_SUPPORTED: CK_RV = 0x0000_0054;
pub const CKR_KEY_HANDLE_INVALID: CK_RV = 0x0000_0060;
pub const CKR_KEY_SIZE_RANGE: CK_RV = 0x0000_0062;
pub const CKR_KEY_TYPE_INCONSISTENT: CK_RV = 0x0000_0063;
pub const CKR_KEY_NOT_NEEDED: CK_RV = 0x0000_0064;
pub const CKR_KEY_CHANGED: CK_RV = 0x0000_0065;
pub const CKR_KEY_NEEDED: CK_RV = 0x0000_0066;
pub const CKR_KEY_INDIGESTIBLE: CK_RV = 0x0000_0067;
pub const CKR_KEY_FUNCTION_NOT_PERMITTED: CK_RV = 0x0000_0068;
pub const CKR_KEY_NOT_WRAPPABLE: CK_RV = 0x0000_0069;
pub const CKR_KEY_UNEXTRACTABLE: CK_RV = 0x0000_006A;
pub const CKR_MECHANISM_INVALID: CK_RV = 0x0000_0070;
pub const CKR_MECHANISM_PARAM_INVALID: CK_RV = 0x0000_0071;
pub const CKR_OBJECT_HANDLE_INVALID: CK_RV = 0x0000_0082;
pub const CKR_OPERATION_ACTIVE: CK_RV = 0x0000_0090;
pub const CKR_OPERATION_NOT_INITIALIZED: CK_RV = 0x0000_0091;
pub const CKR_PIN_INCORRECT: CK_RV = 0x0000_00A0;
pub const CKR_PIN_INVALID: CK_RV = 0x0000_00A1;
pub const CKR_PIN_LEN_RANGE: CK_RV = 0x0000_00A2;
pub const CKR_PIN_EXPIRED: CK_RV = 0x0000_00A3;
pub const CKR_PIN_LOCKED: CK_RV = 0x0000_00A4;
pub const CKR_SESSION_CLOSED: CK_RV = 0x0000_00B0;
pub const CKR_SESSION_COUNT: CK_RV = 0x0000_00B1;
pub const CKR_SESSION_HANDLE_INVALID: CK_RV = 0x0000_00B3;
pub const CKR_SESSION_PARALLEL_NOT_SUPPORTED: CK_RV = 0x0000_00B4;
pub const CKR_SESSION_READ_ONLY: CK_RV = 0x0000_00B5;
pub const CKR_SESSION_EXISTS: CK_RV = 0x0000_00B6;
pub const CKR_SESSION_READ_ONLY_EXISTS: CK_RV = 0x0000_00B7;
pub const CKR_SESSION_READ_WRITE_SO_EXISTS: CK_RV = 0x0000_00B8;
pub const CKR_SIGNATURE_INVALID: CK_RV = 0x0000_00C0;
pub const CKR_SIGNATURE_LEN_RANGE: CK_RV = 0x0000_00C1;
pub const CKR_TEMPLATE_INCOMPLETE: CK_RV = 0x0000_00D0;
pub const CKR_TEMPLATE_INCONSISTENT: CK_RV = 0x0000_00D1;
pub const CKR_TOKEN_NOT_PRESENT: CK_RV = 0x0000_00E0;
pub const CKR_TOKEN_NOT_RECOGNIZED: CK_RV = 0x0000_00E1;
pub const CKR_TOKEN_WRITE_PROTECTED: CK_RV = 0x0000_00E2;
pub const CKR_UNWRAPPING_KEY_HANDLE_INVALID: CK_RV = 0x0000_00F0;
pub const CKR_UNWRAPPING_KEY_SIZE_RANGE: CK_RV = 0x0000_00F1;
pub const CKR_UNWRAPPING_KEY_TYPE_INCONSISTENT: CK_RV = 0x0000_00F2;
pub const CKR_USER_ALREADY_LOGGED_IN: CK_RV = 0x0000_0100;
pub const CKR_USER_NOT_LOGGED_IN: CK_RV = 0x0000_0101;
pub const CKR_USER_PIN_NOT_INITIALIZED: CK_RV = 0x0000_0102;
pub const CKR_USER_TYPE_INVALID: CK_RV = 0x0000_0103;
pub const CKR_USER_ANOTHER_ALREADY_LOGGED_IN: CK_RV = 0x0000_0104;
pub const CKR_USER_TOO_MANY_TYPES: CK_RV = 0x0000_0105;
pub const CKR_WRAPPED_KEY_INVALID: CK_RV = 0x0000_0110;
pub const CKR_WRAPPED_KEY_LEN_RANGE: CK_RV = 0x0000_0112;
pub const CKR_WRAPPING_KEY_HANDLE_INVALID: CK_RV = 0x0000_0113;
pub const CKR_WRAPPING_KEY_SIZE_RANGE: CK_RV = 0x0000_0114;
pub const CKR_WRAPPING_KEY_TYPE_INCONSISTENT: CK_RV = 0x0000_0115;
pub const CKR_RANDOM_SEED_NOT_SUPPORTED: CK_RV = 0x0000_0120;
pub const CKR_RANDOM_NO_RNG: CK_RV = 0x0000_0121;
pub const CKR_DOMAIN_PARAMS_INVALID: CK_RV = 0x0000_0130;
pub const CKR_CURVE_NOT_SUPPORTED: CK_RV = 0x0000_0140;
pub const CKR_BUFFER_TOO_SMALL: CK_RV = 0x0000_0150;
pub const CKR_SAVED_STATE_INVALID: CK_RV = 0x0000_0160;
pub const CKR_INFORMATION_SENSITIVE: CK_RV = 0x0000_0170;
pub const CKR_STATE_UNSAVEABLE: CK_RV = 0x0000_0180;
pub const CKR_CRYPTOKI_NOT_INITIALIZED: CK_RV = 0x0000_0190;
pub const CKR_CRYPTOKI_ALREADY_INITIALIZED: CK_RV = 0x0000_0191;
pub const CKR_MUTEX_BAD: CK_RV = 0x0000_01A0;
pub const CKR_MUTEX_NOT_LOCKED: CK_RV = 0x0000_01A1;
pub const CKR_EXCEEDED_MAX_ITERATIONS: CK_RV = 0x0000_01B5;
pub const CKR_FIPS_SELF_TEST_FAILED: CK_RV = 0x0000_01B6;
pub const CKR_LIBRARY_LOAD_FAILED: CK_RV = 0x0000_01B7;
pub const CKR_PIN_TOO_WEAK: CK_RV = 0x0000_01B8;
pub const CKR_PUBLIC_KEY_INVALID: CK_RV = 0x0000_01B9;
pub const CKR_FUNCTION_REJECTED: CK_RV = 0x0000_0200;
pub const CKR_VENDOR_DEFINED: CK_RV = 0x8000_0000;
