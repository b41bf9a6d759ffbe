//! Shared HSM test suite used by vendor crates to avoid duplication.
//! Each vendor crate provides a small config and delegates to these helpers.
#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::missing_panics_doc)]

use std::{collections::HashMap, ptr, sync::Arc};

use libloading::Library;
use pkcs11_sys::{
    CK_C_INITIALIZE_ARGS, CK_RV, CK_VOID_PTR, CKA_EC_PARAMS, CKA_VALUE_LEN,
    CKF_OS_LOCKING_OK, CKM_AES_KEY_GEN, CKM_CONCATENATE_BASE_AND_KEY,
    CKM_DH_PKCS_KEY_PAIR_GEN, CKM_EC_KEY_PAIR_GEN, CKM_RSA_PKCS_KEY_PAIR_GEN,
    CKM_RSA_X9_31_KEY_PAIR_GEN, CKR_OK,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    AttributeValue, BaseHsm, Curve, HError, HResult, Mechanism, MechanismParameter, SlotManager,
    mechanism_name,
    templates::{
        SYMMETRIC_KEY_GEN_MECHANISMS, dh_private_key_template, dh_public_key_template,
        ec_private_key_template, ec_public_key_template, rsa_private_key_template,
        rsa_public_key_template, symmetric_key_template,
    },
    test_helpers::log_init,
};

/// Per-HSM configuration for shared tests
#[derive(Debug)]
pub struct HsmTestConfig {
    pub lib_path: String,
    pub slot_ids_and_passwords: HashMap<usize, Option<String>>, // for BaseHsm::instantiate
    pub slot_id_for_tests: usize,                               // slot to use
}

/// Resolve the vendor library path, honoring an environment override.
pub fn lib_path(env_var: &str, default: &str) -> String {
    std::env::var(env_var).unwrap_or_else(|_| default.to_owned())
}

#[allow(unsafe_code)]
pub fn low_level_init_test(cfg: &HsmTestConfig) -> HResult<()> {
    let library = unsafe { Library::new(&cfg.lib_path) }?;
    let init = unsafe { library.get::<fn(p_init_args: CK_VOID_PTR) -> CK_RV>(b"C_Initialize") }?;

    let p_init_args = CK_C_INITIALIZE_ARGS {
        CreateMutex: None,
        DestroyMutex: None,
        LockMutex: None,
        UnlockMutex: None,
        flags: CKF_OS_LOCKING_OK,
        pReserved: ptr::null_mut(),
    };
    let rv = init(
        ptr::from_ref(&p_init_args)
            .cast::<std::ffi::c_void>()
            .cast_mut(),
    );

    assert_eq!(rv, CKR_OK);

    Ok(())
}

pub fn instantiate(cfg: &HsmTestConfig) -> HResult<BaseHsm> {
    info!("instantiating hsm");
    BaseHsm::instantiate(&cfg.lib_path, cfg.slot_ids_and_passwords.clone())
}

pub fn get_slot(hsm: &BaseHsm, cfg: &HsmTestConfig) -> HResult<Arc<SlotManager>> {
    let slots = hsm.get_available_slot_list()?;
    info!("Available slots: {:?}", slots);
    if !slots.contains(&cfg.slot_id_for_tests) {
        return Err(HError::Default(format!(
            "Configured slot {} is not available in {:?}",
            cfg.slot_id_for_tests, slots
        )));
    }
    hsm.get_slot(cfg.slot_id_for_tests)
}

/// Instantiate the HSM and return a slot manager for the configured slot id.
pub fn instantiate_and_get_slot(cfg: &HsmTestConfig) -> HResult<Arc<SlotManager>> {
    let hsm = instantiate(cfg)?;
    get_slot(&hsm, cfg)
}

pub fn get_info(cfg: &HsmTestConfig) -> HResult<()> {
    log_init(None);
    let hsm = BaseHsm::instantiate(&cfg.lib_path, HashMap::new())?;
    let info = hsm.get_info()?;
    info!("Connected to the HSM: {info}");
    Ok(())
}

pub fn destroy_all(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;
    let objects = session.find_object_handles(Vec::new())?;
    for object in &objects {
        session.destroy_object(*object)?;
    }
    let objects = session.find_object_handles(Vec::new())?;
    assert_eq!(objects.len(), 0);
    info!("Destroyed all objects");
    session.close()
}

/// Generate one key per symmetric mechanism with its default template.
pub fn generate_symmetric_keys(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;
    for &mechanism_type in SYMMETRIC_KEY_GEN_MECHANISMS {
        let key_id = Uuid::new_v4().to_string();
        let template = symmetric_key_template(mechanism_type, key_id.as_bytes())?;
        let mechanism = Mechanism::new(mechanism_type, None)?;
        let key_handle = session.generate_key(mechanism, &template)?;
        assert_ne!(key_handle, 0);
        info!(
            "Generated key {key_handle} with {}",
            mechanism_name(mechanism_type)
        );
        assert_eq!(key_handle, session.get_object_handle(key_id.as_bytes())?);
        session.destroy_object(key_handle)?;
        session.delete_object_handle(key_id.as_bytes())?;
    }
    session.close()
}

/// Two generations with identical inputs must yield distinct handles.
pub fn generate_distinct_handles(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;
    let key_id = Uuid::new_v4().to_string();
    let template = symmetric_key_template(CKM_AES_KEY_GEN, key_id.as_bytes())?;
    let first = session.generate_key(Mechanism::new(CKM_AES_KEY_GEN, None)?, &template)?;
    let second = session.generate_key(Mechanism::new(CKM_AES_KEY_GEN, None)?, &template)?;
    assert_ne!(first, 0);
    assert_ne!(second, 0);
    assert_ne!(first, second);
    session.destroy_object(first)?;
    session.destroy_object(second)?;
    session.close()
}

/// Generate RSA (PKCS #1 and X9.31), DH and EC key pairs with the
/// default pair templates.
pub fn generate_key_pairs(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;

    let sk_id = Uuid::new_v4().to_string();
    let pk_id = sk_id.clone() + "_pk";
    let (pk, sk) = session.generate_key_pair(
        Mechanism::new(CKM_RSA_PKCS_KEY_PAIR_GEN, None)?,
        &rsa_public_key_template(pk_id.as_bytes())?,
        &rsa_private_key_template(sk_id.as_bytes())?,
    )?;
    assert_ne!(pk, 0);
    assert_ne!(sk, 0);
    assert_ne!(pk, sk);
    info!("Generated RSA key pair: public {pk}, private {sk}");
    session.destroy_object(pk)?;
    session.destroy_object(sk)?;

    // X9.31 generation takes the same self-contained RSA templates
    let sk_id = Uuid::new_v4().to_string();
    let pk_id = sk_id.clone() + "_pk";
    let (pk, sk) = session.generate_key_pair(
        Mechanism::new(CKM_RSA_X9_31_KEY_PAIR_GEN, None)?,
        &rsa_public_key_template(pk_id.as_bytes())?,
        &rsa_private_key_template(sk_id.as_bytes())?,
    )?;
    assert_ne!(pk, 0);
    assert_ne!(sk, 0);
    assert_ne!(pk, sk);
    info!("Generated X9.31 RSA key pair: public {pk}, private {sk}");
    session.destroy_object(pk)?;
    session.destroy_object(sk)?;

    let sk_id = Uuid::new_v4().to_string();
    let pk_id = sk_id.clone() + "_pk";
    let (pk, sk) = session.generate_key_pair(
        Mechanism::new(CKM_DH_PKCS_KEY_PAIR_GEN, None)?,
        &dh_public_key_template(pk_id.as_bytes())?,
        &dh_private_key_template(sk_id.as_bytes())?,
    )?;
    assert_ne!(pk, 0);
    assert_ne!(sk, 0);
    assert_ne!(pk, sk);
    info!("Generated DH key pair: public {pk}, private {sk}");
    session.destroy_object(pk)?;
    session.destroy_object(sk)?;

    let sk_id = Uuid::new_v4().to_string();
    let pk_id = sk_id.clone() + "_pk";
    let (pk, sk) = session.generate_key_pair(
        Mechanism::new(CKM_EC_KEY_PAIR_GEN, None)?,
        &ec_public_key_template(pk_id.as_bytes(), Curve::Secp256r1)?,
        &ec_private_key_template(sk_id.as_bytes())?,
    )?;
    assert_ne!(pk, 0);
    assert_ne!(sk, 0);
    assert_ne!(pk, sk);
    info!("Generated EC key pair: public {pk}, private {sk}");
    session.destroy_object(pk)?;
    session.destroy_object(sk)?;

    session.close()
}

/// Per-curve EC generation: each case injects its parameter bytes into a
/// fresh clone of the public template and reads them back afterwards.
pub fn generate_ec_key_pairs_all_curves(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;
    for &curve in Curve::ALL {
        let sk_id = Uuid::new_v4().to_string();
        let pk_id = sk_id.clone() + "_pk";
        let mut public_template = ec_public_key_template(pk_id.as_bytes(), Curve::Secp256r1)?;
        public_template.set(
            CKA_EC_PARAMS,
            AttributeValue::Bytes(curve.ec_params().to_vec()),
        )?;
        let (pk, sk) = session.generate_key_pair(
            Mechanism::new(CKM_EC_KEY_PAIR_GEN, None)?,
            &public_template,
            &ec_private_key_template(sk_id.as_bytes())?,
        )?;
        info!("Generated EC key pair on {}: public {pk}", curve.name());
        let stored = session.get_attribute_value(pk, CKA_EC_PARAMS)?;
        assert_eq!(
            stored,
            AttributeValue::Bytes(curve.ec_params().to_vec()),
            "stored EC parameters differ on {}",
            curve.name()
        );
        session.destroy_object(pk)?;
        session.destroy_object(sk)?;
    }
    session.close()
}

/// Derive a key by concatenating two generated AES keys, then verify the
/// derived object against the derivation template.
pub fn derive_concatenated_key(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;

    let base_id = Uuid::new_v4().to_string();
    let mut base_template = symmetric_key_template(CKM_AES_KEY_GEN, base_id.as_bytes())?;
    base_template.set(CKA_VALUE_LEN, AttributeValue::Ulong(16))?;
    let base = session.generate_key(Mechanism::new(CKM_AES_KEY_GEN, None)?, &base_template)?;

    let second_id = Uuid::new_v4().to_string();
    let mut second_template = symmetric_key_template(CKM_AES_KEY_GEN, second_id.as_bytes())?;
    second_template.set(CKA_VALUE_LEN, AttributeValue::Ulong(16))?;
    let second = session.generate_key(Mechanism::new(CKM_AES_KEY_GEN, None)?, &second_template)?;

    let derived_id = Uuid::new_v4().to_string();
    let mut derived_template = symmetric_key_template(CKM_AES_KEY_GEN, derived_id.as_bytes())?;
    derived_template.set(CKA_VALUE_LEN, AttributeValue::Ulong(32))?;

    let mechanism = Mechanism::new(
        CKM_CONCATENATE_BASE_AND_KEY,
        Some(MechanismParameter::ObjectHandle(second)),
    )?;
    let derived = session.derive_key(base, mechanism, &derived_template)?;
    assert_ne!(derived, 0);
    info!("Derived key {derived} from {base} and {second}");

    let mismatches = session.verify_object_attributes(derived, &derived_template)?;
    assert!(
        mismatches.is_empty(),
        "derived key attributes differ: {:?}",
        mismatches
    );

    session.destroy_object(base)?;
    session.destroy_object(second)?;
    session.destroy_object(derived)?;
    session.close()
}

/// 32-byte AES key: generate with an explicit length and verify the
/// stored `CKA_VALUE_LEN` reads back as 32.
pub fn aes_value_len_round_trip(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;
    let key_id = Uuid::new_v4().to_string();
    let template = symmetric_key_template(CKM_AES_KEY_GEN, key_id.as_bytes())?;
    let key_handle = session.generate_key(Mechanism::new(CKM_AES_KEY_GEN, None)?, &template)?;
    let stored = session.get_attribute_value(key_handle, CKA_VALUE_LEN)?;
    assert_eq!(stored, AttributeValue::Ulong(32));
    session.destroy_object(key_handle)?;
    session.close()
}

/// Random generation sanity check over an open session.
pub fn generate_random(slot: &Arc<SlotManager>) -> HResult<()> {
    log_init(None);
    let session = slot.open_session(true)?;
    let data = session.generate_random(32)?;
    assert_eq!(data.len(), 32);
    assert_ne!(data, vec![0_u8; 32]);
    session.close()
}
