//! Default generation templates.
//!
//! Every function returns a freshly built [`AttributeTemplate`] value.
//! Callers mutate their own copy; there is no shared state to leak
//! between two generations or between test cases.

use pkcs11_sys::*;

use crate::{
    AttributeTemplate, AttributeValue, Curve, HError, HResult,
};

/// 1024-bit MODP group from RFC 2409 (Oakley group 2), the standard
/// self-contained domain for DH key pair generation.
const DH_OAKLEY_GROUP_2_PRIME: [u8; 128] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC9, 0x0F, 0xDA, 0xA2, 0x21, 0x68, 0xC2,
    0x34, 0xC4, 0xC6, 0x62, 0x8B, 0x80, 0xDC, 0x1C, 0xD1, 0x29, 0x02, 0x4E, 0x08, 0x8A, 0x67,
    0xCC, 0x74, 0x02, 0x0B, 0xBE, 0xA6, 0x3B, 0x13, 0x9B, 0x22, 0x51, 0x4A, 0x08, 0x79, 0x8E,
    0x34, 0x04, 0xDD, 0xEF, 0x95, 0x19, 0xB3, 0xCD, 0x3A, 0x43, 0x1B, 0x30, 0x2B, 0x0A, 0x6D,
    0xF2, 0x5F, 0x14, 0x37, 0x4F, 0xE1, 0x35, 0x6D, 0x6D, 0x51, 0xC2, 0x45, 0xE4, 0x85, 0xB5,
    0x76, 0x62, 0x5E, 0x7E, 0xC6, 0xF4, 0x4C, 0x42, 0xE9, 0xA6, 0x37, 0xED, 0x6B, 0x0B, 0xFF,
    0x5C, 0xB6, 0xF4, 0x06, 0xB7, 0xED, 0xEE, 0x38, 0x6B, 0xFB, 0x5A, 0x89, 0x9F, 0xA5, 0xAE,
    0x9F, 0x24, 0x11, 0x7C, 0x4B, 0x1F, 0xE6, 0x49, 0x28, 0x66, 0x51, 0xEC, 0xE6, 0x53, 0x81,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Symmetric key generation mechanisms with self-contained defaults.
pub const SYMMETRIC_KEY_GEN_MECHANISMS: &[CK_MECHANISM_TYPE] = &[
    CKM_DES_KEY_GEN,
    CKM_DES2_KEY_GEN,
    CKM_DES3_KEY_GEN,
    CKM_CAST3_KEY_GEN,
    CKM_CAST128_KEY_GEN,
    CKM_RC2_KEY_GEN,
    CKM_RC4_KEY_GEN,
    CKM_RC5_KEY_GEN,
    CKM_GENERIC_SECRET_KEY_GEN,
    CKM_AES_KEY_GEN,
    CKM_SEED_KEY_GEN,
    CKM_ARIA_KEY_GEN,
];

/// Key type produced by a symmetric generation mechanism, plus the
/// `CKA_VALUE_LEN` to request for ciphers with a variable key length.
/// Fixed-length ciphers (the DES family, SEED) take no length attribute.
const fn symmetric_key_layout(
    mechanism_type: CK_MECHANISM_TYPE,
) -> Option<(CK_KEY_TYPE, Option<CK_ULONG>)> {
    match mechanism_type {
        CKM_DES_KEY_GEN => Some((CKK_DES, None)),
        CKM_DES2_KEY_GEN => Some((CKK_DES2, None)),
        CKM_DES3_KEY_GEN => Some((CKK_DES3, None)),
        CKM_CAST3_KEY_GEN => Some((CKK_CAST3, Some(8))),
        CKM_CAST128_KEY_GEN => Some((CKK_CAST128, Some(16))),
        CKM_RC2_KEY_GEN => Some((CKK_RC2, Some(16))),
        CKM_RC4_KEY_GEN => Some((CKK_RC4, Some(16))),
        CKM_RC5_KEY_GEN => Some((CKK_RC5, Some(16))),
        CKM_GENERIC_SECRET_KEY_GEN => Some((CKK_GENERIC_SECRET, Some(16))),
        CKM_AES_KEY_GEN => Some((CKK_AES, Some(32))),
        CKM_SEED_KEY_GEN => Some((CKK_SEED, None)),
        CKM_ARIA_KEY_GEN => Some((CKK_ARIA, Some(32))),
        _ => None,
    }
}

/// Default template for a symmetric key produced by `mechanism_type`.
pub fn symmetric_key_template(
    mechanism_type: CK_MECHANISM_TYPE,
    label: &[u8],
) -> HResult<AttributeTemplate> {
    let Some((key_type, value_len)) = symmetric_key_layout(mechanism_type) else {
        return Err(HError::Parameter(format!(
            "no symmetric key defaults for mechanism {mechanism_type:#x}"
        )));
    };
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_SECRET_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(key_type))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_SENSITIVE, AttributeValue::Bool(false))?;
    template.push(CKA_ENCRYPT, AttributeValue::Bool(true))?;
    template.push(CKA_DECRYPT, AttributeValue::Bool(true))?;
    template.push(CKA_DERIVE, AttributeValue::Bool(true))?;
    template.push(CKA_EXTRACTABLE, AttributeValue::Bool(true))?;
    if let Some(len) = value_len {
        template.push(CKA_VALUE_LEN, AttributeValue::Ulong(len))?;
    }
    Ok(template)
}

/// Default RSA public key template: 2048-bit modulus, F4 exponent.
pub fn rsa_public_key_template(label: &[u8]) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PUBLIC_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_RSA))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_ENCRYPT, AttributeValue::Bool(true))?;
    template.push(CKA_VERIFY, AttributeValue::Bool(true))?;
    template.push(CKA_WRAP, AttributeValue::Bool(true))?;
    template.push(CKA_MODULUS_BITS, AttributeValue::Ulong(2048))?;
    template.push(
        CKA_PUBLIC_EXPONENT,
        AttributeValue::Bytes(vec![0x01, 0x00, 0x01]),
    )?;
    Ok(template)
}

/// Default RSA private key template.
pub fn rsa_private_key_template(label: &[u8]) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PRIVATE_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_RSA))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_SENSITIVE, AttributeValue::Bool(true))?;
    template.push(CKA_DECRYPT, AttributeValue::Bool(true))?;
    template.push(CKA_SIGN, AttributeValue::Bool(true))?;
    template.push(CKA_UNWRAP, AttributeValue::Bool(true))?;
    template.push(CKA_EXTRACTABLE, AttributeValue::Bool(true))?;
    Ok(template)
}

/// Default DH public key template over the Oakley group 2 domain.
pub fn dh_public_key_template(label: &[u8]) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PUBLIC_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_DH))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(
        CKA_PRIME,
        AttributeValue::Bytes(DH_OAKLEY_GROUP_2_PRIME.to_vec()),
    )?;
    template.push(CKA_BASE, AttributeValue::Bytes(vec![0x02]))?;
    Ok(template)
}

/// Default DH private key template.
pub fn dh_private_key_template(label: &[u8]) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PRIVATE_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_DH))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_SENSITIVE, AttributeValue::Bool(true))?;
    template.push(CKA_DERIVE, AttributeValue::Bool(true))?;
    template.push(CKA_EXTRACTABLE, AttributeValue::Bool(true))?;
    template.push(CKA_VALUE_BITS, AttributeValue::Ulong(256))?;
    Ok(template)
}

/// DSA public key template over caller-supplied domain parameters
/// (there is no standard default domain worth baking in).
pub fn dsa_public_key_template(
    label: &[u8],
    prime: &[u8],
    subprime: &[u8],
    base: &[u8],
) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PUBLIC_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_DSA))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_VERIFY, AttributeValue::Bool(true))?;
    template.push(CKA_PRIME, AttributeValue::Bytes(prime.to_vec()))?;
    template.push(CKA_SUBPRIME, AttributeValue::Bytes(subprime.to_vec()))?;
    template.push(CKA_BASE, AttributeValue::Bytes(base.to_vec()))?;
    Ok(template)
}

/// DSA private key template.
pub fn dsa_private_key_template(label: &[u8]) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PRIVATE_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_DSA))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_SENSITIVE, AttributeValue::Bool(true))?;
    template.push(CKA_SIGN, AttributeValue::Bool(true))?;
    template.push(CKA_EXTRACTABLE, AttributeValue::Bool(true))?;
    Ok(template)
}

/// Default EC public key template on the given curve.
pub fn ec_public_key_template(label: &[u8], curve: Curve) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PUBLIC_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_EC))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_VERIFY, AttributeValue::Bool(true))?;
    template.push(CKA_DERIVE, AttributeValue::Bool(true))?;
    template.push(
        CKA_EC_PARAMS,
        AttributeValue::Bytes(curve.ec_params().to_vec()),
    )?;
    Ok(template)
}

/// Default EC private key template.
pub fn ec_private_key_template(label: &[u8]) -> HResult<AttributeTemplate> {
    let mut template = AttributeTemplate::new();
    template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_PRIVATE_KEY))?;
    template.push(CKA_KEY_TYPE, AttributeValue::Ulong(CKK_EC))?;
    template.push(CKA_LABEL, AttributeValue::Bytes(label.to_vec()))?;
    template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
    template.push(CKA_PRIVATE, AttributeValue::Bool(true))?;
    template.push(CKA_SENSITIVE, AttributeValue::Bool(true))?;
    template.push(CKA_SIGN, AttributeValue::Bool(true))?;
    template.push(CKA_DERIVE, AttributeValue::Bool(true))?;
    template.push(CKA_EXTRACTABLE, AttributeValue::Bool(true))?;
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_mechanism_has_defaults() -> HResult<()> {
        for &mechanism in SYMMETRIC_KEY_GEN_MECHANISMS {
            let template = symmetric_key_template(mechanism, b"t")?;
            assert_eq!(
                template.get(CKA_CLASS),
                Some(&AttributeValue::ObjectClass(CKO_SECRET_KEY))
            );
            assert!(template.get(CKA_KEY_TYPE).is_some());
        }
        Ok(())
    }

    #[test]
    fn fixed_length_ciphers_take_no_value_len() -> HResult<()> {
        for mechanism in [CKM_DES_KEY_GEN, CKM_DES2_KEY_GEN, CKM_DES3_KEY_GEN, CKM_SEED_KEY_GEN] {
            let template = symmetric_key_template(mechanism, b"t")?;
            assert!(template.get(CKA_VALUE_LEN).is_none());
        }
        let aes = symmetric_key_template(CKM_AES_KEY_GEN, b"t")?;
        assert_eq!(aes.get(CKA_VALUE_LEN), Some(&AttributeValue::Ulong(32)));
        Ok(())
    }

    #[test]
    fn unknown_mechanism_has_no_defaults() {
        let err = symmetric_key_template(CKM_RSA_PKCS_KEY_PAIR_GEN, b"t").unwrap_err();
        assert!(matches!(err, HError::Parameter(_)));
    }

    #[test]
    fn each_call_returns_an_independent_value() -> HResult<()> {
        let mut first = ec_public_key_template(b"a", Curve::Secp256r1)?;
        first.set(
            CKA_EC_PARAMS,
            AttributeValue::Bytes(Curve::BrainpoolP512r1.ec_params().to_vec()),
        )?;
        let second = ec_public_key_template(b"a", Curve::Secp256r1)?;
        assert_eq!(
            second.get(CKA_EC_PARAMS),
            Some(&AttributeValue::Bytes(
                Curve::Secp256r1.ec_params().to_vec()
            ))
        );
        assert_ne!(first.get(CKA_EC_PARAMS), second.get(CKA_EC_PARAMS));
        Ok(())
    }

    #[test]
    fn dsa_templates_carry_the_supplied_domain() -> HResult<()> {
        let prime = vec![0xAB; 128];
        let subprime = vec![0xCD; 20];
        let base = vec![0x02; 128];
        let public = dsa_public_key_template(b"dsa", &prime, &subprime, &base)?;
        assert_eq!(
            public.get(CKA_CLASS),
            Some(&AttributeValue::ObjectClass(CKO_PUBLIC_KEY))
        );
        assert_eq!(
            public.get(CKA_KEY_TYPE),
            Some(&AttributeValue::Ulong(CKK_DSA))
        );
        assert_eq!(public.get(CKA_PRIME), Some(&AttributeValue::Bytes(prime)));
        assert_eq!(
            public.get(CKA_SUBPRIME),
            Some(&AttributeValue::Bytes(subprime))
        );
        assert_eq!(public.get(CKA_BASE), Some(&AttributeValue::Bytes(base)));

        let private = dsa_private_key_template(b"dsa")?;
        assert_eq!(
            private.get(CKA_CLASS),
            Some(&AttributeValue::ObjectClass(CKO_PRIVATE_KEY))
        );
        assert_eq!(
            private.get(CKA_KEY_TYPE),
            Some(&AttributeValue::Ulong(CKK_DSA))
        );
        assert_eq!(private.get(CKA_SIGN), Some(&AttributeValue::Bool(true)));
        Ok(())
    }

    #[test]
    fn dh_defaults_carry_the_oakley_domain() -> HResult<()> {
        let template = dh_public_key_template(b"dh")?;
        let Some(AttributeValue::Bytes(prime)) = template.get(CKA_PRIME) else {
            panic!("expected a prime");
        };
        assert_eq!(prime.len(), 128);
        assert_eq!(
            template.get(CKA_BASE),
            Some(&AttributeValue::Bytes(vec![0x02]))
        );
        Ok(())
    }
}
