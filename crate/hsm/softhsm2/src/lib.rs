#[cfg(test)]
mod tests;

/// Default library location on Debian/Ubuntu; override with the
/// `SOFTHSM2_PKCS11_LIB` environment variable.
pub const SOFTHSM2_PKCS11_LIB: &str = "/usr/lib/softhsm/libsofthsm2.so";

/// SoftHSM2 is fully supported by the BaseHsm implementation
pub type Softhsm2 = base_hsm::BaseHsm;
