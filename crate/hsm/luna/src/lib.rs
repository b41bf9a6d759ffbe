#[cfg(test)]
mod tests;

/// Default Luna client library location; override with the
/// `LUNA_PKCS11_LIB` environment variable.
pub const LUNA_PKCS11_LIB: &str = "/usr/safenet/lunaclient/lib/libCryptoki2_64.so";

/// The Luna client is fully supported by the BaseHsm implementation
pub type Luna = base_hsm::BaseHsm;
