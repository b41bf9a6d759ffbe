//! These tests require a working SoftHSM2 token and are `#[ignore]`d by
//! default. To run them (replace `XXX` with the actual user PIN):
//! ```sh
//! HSM_USER_PASSWORD=XXX HSM_SLOT_ID=0 cargo test -p softhsm2_pkcs11_loader -- --ignored
//! ```
use std::collections::HashMap;

use base_hsm::{
    HResult,
    test_helpers::{get_hsm_password, get_hsm_slot_id},
    tests_shared as shared,
};

use crate::SOFTHSM2_PKCS11_LIB;

const SLOT_ID: usize = 0x01; // SoftHSM2 fallback slot if HSM_SLOT_ID is not set

fn cfg() -> HResult<shared::HsmTestConfig> {
    let user_password = get_hsm_password()?;
    let slot = get_hsm_slot_id().unwrap_or(SLOT_ID);
    Ok(shared::HsmTestConfig {
        lib_path: shared::lib_path("SOFTHSM2_PKCS11_LIB", SOFTHSM2_PKCS11_LIB),
        slot_ids_and_passwords: HashMap::from([(slot, Some(user_password))]),
        slot_id_for_tests: slot,
    })
}

/// To run all the tests:
/// ```sh
/// RUST_LOG=info \
/// HSM_USER_PASSWORD="12345678" \
/// HSM_SLOT_ID=0 \
/// cargo test -p softhsm2_pkcs11_loader test_hsm_softhsm2_all -- --ignored
/// ```
/// WARNING: initialized tokens are reassigned to another slot based on
/// the token serial number, so list the available slots first to
/// determine which slot ID to use
#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_all() -> HResult<()> {
    test_hsm_softhsm2_get_info()?;
    test_hsm_softhsm2_destroy_all()?;
    test_hsm_softhsm2_generate_symmetric_keys()?;
    test_hsm_softhsm2_generate_distinct_handles()?;
    test_hsm_softhsm2_generate_key_pairs()?;
    test_hsm_softhsm2_generate_ec_key_pairs_all_curves()?;
    test_hsm_softhsm2_derive_concatenated_key()?;
    test_hsm_softhsm2_aes_value_len_round_trip()?;
    test_hsm_softhsm2_generate_random()?;
    test_hsm_softhsm2_destroy_all()?;
    Ok(())
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_low_level_test() -> HResult<()> {
    shared::low_level_init_test(&cfg()?)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_get_info() -> HResult<()> {
    shared::get_info(&cfg()?)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_generate_symmetric_keys() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_symmetric_keys(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_generate_distinct_handles() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_distinct_handles(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_generate_key_pairs() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_key_pairs(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_generate_ec_key_pairs_all_curves() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_ec_key_pairs_all_curves(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_derive_concatenated_key() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::derive_concatenated_key(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_aes_value_len_round_trip() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::aes_value_len_round_trip(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_generate_random() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_random(&slot)
}

#[test]
#[ignore = "Requires Linux, SoftHSM2 library, and HSM environment"]
fn test_hsm_softhsm2_destroy_all() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::destroy_all(&slot)
}
