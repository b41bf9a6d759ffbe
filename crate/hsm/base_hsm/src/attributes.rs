//! Typed attribute templates and their conversion to `CK_ATTRIBUTE` arrays.
//!
//! Templates are plain value types: clone them freely, mutate the clone,
//! and nothing leaks back into the original. The encoded form owns one
//! heap buffer per value so the raw pointers handed to the HSM stay valid
//! for as long as the `EncodedTemplate` is held.

use pkcs11_sys::*;

use crate::{HError, HResult};

/// The value carried by a single template attribute.
///
/// Each variant has a fixed wire representation:
/// * `Bool` - one `CK_BBOOL` byte
/// * `Ulong` - a native-width, native-endian `CK_ULONG`
/// * `Bytes` - the bytes verbatim
/// * `ObjectClass` - a native-width `CK_OBJECT_CLASS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Bool(bool),
    Ulong(CK_ULONG),
    Bytes(Vec<u8>),
    ObjectClass(CK_OBJECT_CLASS),
}

impl AttributeValue {
    fn to_bytes(&self) -> Box<[u8]> {
        match self {
            Self::Bool(b) => Box::new([if *b { CK_TRUE } else { CK_FALSE }]),
            Self::Ulong(u) => Box::from(u.to_ne_bytes()),
            Self::Bytes(v) => v.clone().into_boxed_slice(),
            Self::ObjectClass(c) => Box::from(c.to_ne_bytes()),
        }
    }

    const fn kind(&self) -> AttributeKind {
        match self {
            Self::Bool(_) => AttributeKind::Bool,
            Self::Ulong(_) => AttributeKind::Ulong,
            Self::Bytes(_) => AttributeKind::Bytes,
            Self::ObjectClass(_) => AttributeKind::ObjectClass,
        }
    }
}

/// The wire shape an attribute id is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Bool,
    Ulong,
    Bytes,
    ObjectClass,
}

/// Expected value shape for the attribute ids this crate works with.
/// Ids not in this table (vendor attributes among them) return `None`:
/// the codec passes them through with whatever variant the caller chose
/// and leaves their semantics to the device.
pub const fn expected_kind(attribute_type: CK_ATTRIBUTE_TYPE) -> Option<AttributeKind> {
    match attribute_type {
        CKA_CLASS => Some(AttributeKind::ObjectClass),
        CKA_TOKEN | CKA_PRIVATE | CKA_SENSITIVE | CKA_ENCRYPT | CKA_DECRYPT | CKA_WRAP
        | CKA_UNWRAP | CKA_SIGN | CKA_VERIFY | CKA_DERIVE | CKA_EXTRACTABLE | CKA_MODIFIABLE
        | CKA_LOCAL | CKA_NEVER_EXTRACTABLE | CKA_ALWAYS_SENSITIVE => Some(AttributeKind::Bool),
        CKA_KEY_TYPE | CKA_VALUE_LEN | CKA_VALUE_BITS | CKA_MODULUS_BITS => {
            Some(AttributeKind::Ulong)
        }
        CKA_LABEL | CKA_ID | CKA_VALUE | CKA_MODULUS | CKA_PUBLIC_EXPONENT
        | CKA_PRIVATE_EXPONENT | CKA_PRIME | CKA_SUBPRIME | CKA_BASE | CKA_EC_PARAMS
        | CKA_EC_POINT => Some(AttributeKind::Bytes),
        _ => None,
    }
}

/// Decode bytes read back from the device into the typed value for the
/// given attribute id. Unknown ids decode as raw bytes.
pub fn decode(attribute_type: CK_ATTRIBUTE_TYPE, bytes: &[u8]) -> HResult<AttributeValue> {
    match expected_kind(attribute_type) {
        Some(AttributeKind::Bool) => match bytes {
            [b] => Ok(AttributeValue::Bool(*b != CK_FALSE)),
            _ => Err(HError::Encoding(format!(
                "attribute {attribute_type:#x}: expected 1 boolean byte, got {}",
                bytes.len()
            ))),
        },
        Some(AttributeKind::Ulong) => Ok(AttributeValue::Ulong(decode_ulong(
            attribute_type,
            bytes,
        )?)),
        Some(AttributeKind::ObjectClass) => Ok(AttributeValue::ObjectClass(decode_ulong(
            attribute_type,
            bytes,
        )?)),
        Some(AttributeKind::Bytes) | None => Ok(AttributeValue::Bytes(bytes.to_vec())),
    }
}

fn decode_ulong(attribute_type: CK_ATTRIBUTE_TYPE, bytes: &[u8]) -> HResult<CK_ULONG> {
    let arr: [u8; size_of::<CK_ULONG>()] = bytes.try_into().map_err(|_| {
        HError::Encoding(format!(
            "attribute {attribute_type:#x}: expected {} bytes for CK_ULONG, got {}",
            size_of::<CK_ULONG>(),
            bytes.len()
        ))
    })?;
    Ok(CK_ULONG::from_ne_bytes(arr))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attribute_type: CK_ATTRIBUTE_TYPE,
    pub value: AttributeValue,
}

/// An ordered collection of attributes. Insertion order is preserved all
/// the way into the encoded `CK_ATTRIBUTE` array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeTemplate {
    attributes: Vec<Attribute>,
}

impl AttributeTemplate {
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Append an attribute. Fails if the id is already present or if the
    /// value variant contradicts the expected shape for a known id, so a
    /// bad template never reaches the device.
    pub fn push(
        &mut self,
        attribute_type: CK_ATTRIBUTE_TYPE,
        value: AttributeValue,
    ) -> HResult<()> {
        if self.get(attribute_type).is_some() {
            return Err(HError::Encoding(format!(
                "duplicate attribute {attribute_type:#x} in template"
            )));
        }
        if let Some(expected) = expected_kind(attribute_type) {
            if expected != value.kind() {
                return Err(HError::Encoding(format!(
                    "attribute {attribute_type:#x}: expected {expected:?} value, got {:?}",
                    value.kind()
                )));
            }
        }
        self.attributes.push(Attribute {
            attribute_type,
            value,
        });
        Ok(())
    }

    /// Replace the value of an existing attribute, or append it.
    /// Same shape validation as [`Self::push`].
    pub fn set(&mut self, attribute_type: CK_ATTRIBUTE_TYPE, value: AttributeValue) -> HResult<()> {
        match self
            .attributes
            .iter_mut()
            .find(|a| a.attribute_type == attribute_type)
        {
            Some(existing) => {
                if let Some(expected) = expected_kind(attribute_type) {
                    if expected != value.kind() {
                        return Err(HError::Encoding(format!(
                            "attribute {attribute_type:#x}: expected {expected:?} value, got {:?}",
                            value.kind()
                        )));
                    }
                }
                existing.value = value;
                Ok(())
            }
            None => self.push(attribute_type, value),
        }
    }

    pub fn get(&self, attribute_type: CK_ATTRIBUTE_TYPE) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|a| a.attribute_type == attribute_type)
            .map(|a| &a.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Serialize into the foreign representation. The returned value owns
    /// every buffer the `CK_ATTRIBUTE` entries point into; keep it alive
    /// until the foreign call it feeds has returned.
    pub fn encode(&self) -> HResult<EncodedTemplate> {
        let mut buffers: Vec<Box<[u8]>> = Vec::with_capacity(self.attributes.len());
        let mut entries: Vec<CK_ATTRIBUTE> = Vec::with_capacity(self.attributes.len());
        for attribute in &self.attributes {
            let mut buffer = attribute.value.to_bytes();
            entries.push(CK_ATTRIBUTE {
                type_: attribute.attribute_type,
                pValue: buffer.as_mut_ptr().cast::<std::ffi::c_void>(),
                ulValueLen: CK_ULONG::try_from(buffer.len())?,
            });
            // Boxed slices never reallocate, so the pointer stays put.
            buffers.push(buffer);
        }
        let count = CK_ULONG::try_from(entries.len())?;
        Ok(EncodedTemplate {
            _buffers: buffers,
            entries,
            count,
        })
    }
}

/// The foreign form of a template: a `CK_ATTRIBUTE` array plus the value
/// buffers it points into, bundled so their lifetimes cannot diverge.
pub struct EncodedTemplate {
    _buffers: Vec<Box<[u8]>>,
    entries: Vec<CK_ATTRIBUTE>,
    count: CK_ULONG,
}

impl EncodedTemplate {
    pub fn as_mut_ptr(&mut self) -> CK_ATTRIBUTE_PTR {
        self.entries.as_mut_ptr()
    }

    pub const fn count(&self) -> CK_ULONG {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() -> HResult<()> {
        let mut template = AttributeTemplate::new();
        template.push(CKA_CLASS, AttributeValue::ObjectClass(CKO_SECRET_KEY))?;
        template.push(CKA_VALUE_LEN, AttributeValue::Ulong(32))?;
        template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
        template.push(CKA_LABEL, AttributeValue::Bytes(b"a-key".to_vec()))?;

        let types: Vec<CK_ATTRIBUTE_TYPE> =
            template.iter().map(|a| a.attribute_type).collect();
        assert_eq!(types, vec![CKA_CLASS, CKA_VALUE_LEN, CKA_TOKEN, CKA_LABEL]);

        let mut encoded = template.encode()?;
        assert_eq!(encoded.count(), 4);
        #[allow(unsafe_code)]
        let first = unsafe { *encoded.as_mut_ptr() };
        let first_type = first.type_;
        assert_eq!(first_type, CKA_CLASS);
        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut template = AttributeTemplate::new();
        template
            .push(CKA_TOKEN, AttributeValue::Bool(true))
            .unwrap();
        let err = template
            .push(CKA_TOKEN, AttributeValue::Bool(false))
            .unwrap_err();
        assert!(matches!(err, HError::Encoding(_)));
        // the original entry is untouched
        assert_eq!(template.get(CKA_TOKEN), Some(&AttributeValue::Bool(true)));
    }

    #[test]
    fn kind_mismatch_is_rejected_before_encoding() {
        let mut template = AttributeTemplate::new();
        let err = template
            .push(CKA_TOKEN, AttributeValue::Ulong(1))
            .unwrap_err();
        assert!(matches!(err, HError::Encoding(_)));
        let err = template
            .push(CKA_VALUE_LEN, AttributeValue::Bytes(vec![32]))
            .unwrap_err();
        assert!(matches!(err, HError::Encoding(_)));
    }

    #[test]
    fn unknown_ids_pass_through_untyped() -> HResult<()> {
        let vendor_attr = CKA_VENDOR_DEFINED | 0x0001;
        let mut template = AttributeTemplate::new();
        template.push(vendor_attr, AttributeValue::Bytes(vec![0xDE, 0xAD]))?;
        assert_eq!(
            decode(vendor_attr, &[0xDE, 0xAD])?,
            AttributeValue::Bytes(vec![0xDE, 0xAD])
        );
        Ok(())
    }

    #[test]
    fn set_replaces_in_place() -> HResult<()> {
        let mut template = AttributeTemplate::new();
        template.push(CKA_EC_PARAMS, AttributeValue::Bytes(vec![0x06]))?;
        template.push(CKA_TOKEN, AttributeValue::Bool(true))?;
        template.set(CKA_EC_PARAMS, AttributeValue::Bytes(vec![0x06, 0x05]))?;
        assert_eq!(
            template.get(CKA_EC_PARAMS),
            Some(&AttributeValue::Bytes(vec![0x06, 0x05]))
        );
        // position unchanged
        assert_eq!(
            template.iter().next().map(|a| a.attribute_type),
            Some(CKA_EC_PARAMS)
        );
        Ok(())
    }

    #[test]
    fn encode_decode_round_trips_each_variant() -> HResult<()> {
        assert_eq!(
            decode(CKA_TOKEN, &AttributeValue::Bool(true).to_bytes())?,
            AttributeValue::Bool(true)
        );
        assert_eq!(
            decode(CKA_VALUE_LEN, &AttributeValue::Ulong(32).to_bytes())?,
            AttributeValue::Ulong(32)
        );
        assert_eq!(
            decode(
                CKA_CLASS,
                &AttributeValue::ObjectClass(CKO_PRIVATE_KEY).to_bytes()
            )?,
            AttributeValue::ObjectClass(CKO_PRIVATE_KEY)
        );
        assert_eq!(
            decode(CKA_LABEL, &AttributeValue::Bytes(b"label".to_vec()).to_bytes())?,
            AttributeValue::Bytes(b"label".to_vec())
        );
        Ok(())
    }

    #[test]
    fn decode_rejects_wrong_widths() {
        assert!(matches!(
            decode(CKA_TOKEN, &[1, 0]),
            Err(HError::Encoding(_))
        ));
        assert!(matches!(
            decode(CKA_VALUE_LEN, &[1, 2, 3]),
            Err(HError::Encoding(_))
        ));
    }

    #[test]
    fn encoded_pointers_match_the_owned_buffers() -> HResult<()> {
        let mut template = AttributeTemplate::new();
        template.push(CKA_LABEL, AttributeValue::Bytes(b"stable".to_vec()))?;
        template.push(CKA_VALUE_LEN, AttributeValue::Ulong(16))?;
        let mut encoded = template.encode()?;
        let ptr = encoded.as_mut_ptr();
        #[allow(unsafe_code)]
        unsafe {
            let label = *ptr;
            let label_len = label.ulValueLen;
            assert_eq!(label_len, 6);
            let bytes = std::slice::from_raw_parts(label.pValue.cast::<u8>(), 6);
            assert_eq!(bytes, b"stable");
            let value_len = *ptr.add(1);
            let value_len_len = value_len.ulValueLen;
            assert_eq!(value_len_len, CK_ULONG::try_from(size_of::<CK_ULONG>())?);
        }
        Ok(())
    }
}
