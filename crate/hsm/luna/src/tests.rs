//! These tests require a reachable Luna partition and are `#[ignore]`d
//! by default. To run them:
//! ```sh
//! HSM_USER_PASSWORD=XXX HSM_SLOT_ID=0 cargo test -p luna_pkcs11_loader -- --ignored
//! ```
use std::collections::HashMap;

use base_hsm::{
    HResult,
    test_helpers::{get_hsm_password, get_hsm_slot_id},
    tests_shared as shared,
};

use crate::LUNA_PKCS11_LIB;

const SLOT_ID: usize = 0; // fallback slot if HSM_SLOT_ID is not set

fn cfg() -> HResult<shared::HsmTestConfig> {
    let user_password = get_hsm_password()?;
    let slot = get_hsm_slot_id().unwrap_or(SLOT_ID);
    Ok(shared::HsmTestConfig {
        lib_path: shared::lib_path("LUNA_PKCS11_LIB", LUNA_PKCS11_LIB),
        slot_ids_and_passwords: HashMap::from([(slot, Some(user_password))]),
        slot_id_for_tests: slot,
    })
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_all() -> HResult<()> {
    test_hsm_luna_get_info()?;
    test_hsm_luna_generate_symmetric_keys()?;
    test_hsm_luna_generate_distinct_handles()?;
    test_hsm_luna_generate_key_pairs()?;
    test_hsm_luna_generate_ec_key_pairs_all_curves()?;
    test_hsm_luna_derive_concatenated_key()?;
    test_hsm_luna_aes_value_len_round_trip()?;
    Ok(())
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_low_level_test() -> HResult<()> {
    shared::low_level_init_test(&cfg()?)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_get_info() -> HResult<()> {
    shared::get_info(&cfg()?)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_generate_symmetric_keys() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_symmetric_keys(&slot)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_generate_distinct_handles() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_distinct_handles(&slot)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_generate_key_pairs() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_key_pairs(&slot)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_generate_ec_key_pairs_all_curves() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::generate_ec_key_pairs_all_curves(&slot)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_derive_concatenated_key() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::derive_concatenated_key(&slot)
}

#[test]
#[ignore = "Requires a Luna client installation and a reachable partition"]
fn test_hsm_luna_aes_value_len_round_trip() -> HResult<()> {
    let slot = shared::instantiate_and_get_slot(&cfg()?)?;
    shared::aes_value_len_round_trip(&slot)
}
