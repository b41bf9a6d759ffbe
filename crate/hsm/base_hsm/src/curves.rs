//! Named elliptic curves and their DER-encoded `CKA_EC_PARAMS` values.

/// Curves accepted for EC key pair generation. The parameter bytes are
/// the DER encoding of the curve OID, which is what `CKA_EC_PARAMS`
/// carries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    Secp256k1,
    BrainpoolP192r1,
    BrainpoolP224r1,
    BrainpoolP256r1,
    BrainpoolP320r1,
    BrainpoolP384r1,
    BrainpoolP512r1,
}

impl Curve {
    pub const ALL: &'static [Self] = &[
        Self::Secp192r1,
        Self::Secp224r1,
        Self::Secp256r1,
        Self::Secp384r1,
        Self::Secp521r1,
        Self::Secp256k1,
        Self::BrainpoolP192r1,
        Self::BrainpoolP224r1,
        Self::BrainpoolP256r1,
        Self::BrainpoolP320r1,
        Self::BrainpoolP384r1,
        Self::BrainpoolP512r1,
    ];

    /// DER-encoded OID for this curve.
    pub const fn ec_params(self) -> &'static [u8] {
        match self {
            Self::Secp192r1 => &[0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x01],
            Self::Secp224r1 => &[0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x21],
            Self::Secp256r1 => &[0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07],
            Self::Secp384r1 => &[0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x22],
            Self::Secp521r1 => &[0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x23],
            Self::Secp256k1 => &[0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x0A],
            Self::BrainpoolP192r1 => {
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x03]
            }
            Self::BrainpoolP224r1 => {
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x05]
            }
            Self::BrainpoolP256r1 => {
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x07]
            }
            Self::BrainpoolP320r1 => {
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x09]
            }
            Self::BrainpoolP384r1 => {
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x0B]
            }
            Self::BrainpoolP512r1 => {
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x0D]
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Secp192r1 => "secp192r1",
            Self::Secp224r1 => "secp224r1",
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
            Self::Secp256k1 => "secp256k1",
            Self::BrainpoolP192r1 => "brainpoolP192r1",
            Self::BrainpoolP224r1 => "brainpoolP224r1",
            Self::BrainpoolP256r1 => "brainpoolP256r1",
            Self::BrainpoolP320r1 => "brainpoolP320r1",
            Self::BrainpoolP384r1 => "brainpoolP384r1",
            Self::BrainpoolP512r1 => "brainpoolP512r1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nist_curve_oids() {
        assert_eq!(
            Curve::Secp256r1.ec_params(),
            &[0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07]
        );
        assert_eq!(
            Curve::Secp521r1.ec_params(),
            &[0x06, 0x05, 0x2B, 0x81, 0x04, 0x00, 0x23]
        );
    }

    #[test]
    fn brainpool_oids_share_the_arc() {
        for curve in [
            Curve::BrainpoolP192r1,
            Curve::BrainpoolP256r1,
            Curve::BrainpoolP512r1,
        ] {
            let params = curve.ec_params();
            assert_eq!(
                &params[..10],
                &[0x06, 0x09, 0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01]
            );
        }
    }

    #[test]
    fn all_curves_have_distinct_parameters() {
        for (i, a) in Curve::ALL.iter().enumerate() {
            for b in &Curve::ALL[i + 1..] {
                assert_ne!(a.ec_params(), b.ec_params(), "{} vs {}", a.name(), b.name());
            }
        }
    }
}
