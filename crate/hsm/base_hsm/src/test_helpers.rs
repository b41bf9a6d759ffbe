//! Environment helpers shared by the vendor test crates.

use tracing_subscriber::EnvFilter;

use crate::{HError, HResult};

pub fn get_hsm_password() -> HResult<String> {
    let user_password = std::env::var("HSM_USER_PASSWORD").map_err(|_| {
        HError::Default(
            "The user password for the HSM is not set. Please set the HSM_USER_PASSWORD \
             environment variable"
                .to_owned(),
        )
    })?;
    Ok(user_password)
}

pub fn get_hsm_slot_id() -> Option<usize> {
    std::env::var("HSM_SLOT_ID").ok()?.parse().ok()
}

/// Initialize tracing for tests. Safe to call repeatedly; only the first
/// call installs the subscriber. The filter falls back to `RUST_LOG`.
pub fn log_init(filter: Option<&str>) {
    let env_filter = filter.map_or_else(EnvFilter::from_default_env, EnvFilter::new);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
