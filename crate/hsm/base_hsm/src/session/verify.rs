//! Read-back verification of object attributes.

use std::{
    fmt,
    fmt::{Display, Formatter},
    ptr,
};

use pkcs11_sys::{CK_ATTRIBUTE, CK_ATTRIBUTE_TYPE, CK_OBJECT_HANDLE, CK_UNAVAILABLE_INFORMATION};
use tracing::trace;

use crate::{
    AttributeTemplate, AttributeValue, HError, HResult, attributes, hsm_call, session::Session,
};

/// One attribute whose device value differs from the requested one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMismatch {
    pub attribute_type: CK_ATTRIBUTE_TYPE,
    pub expected: AttributeValue,
    pub actual: AttributeValue,
}

impl Display for AttributeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attribute {:#x}: expected {}, got {}",
            self.attribute_type,
            format_value(&self.expected),
            format_value(&self.actual)
        )
    }
}

fn format_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Ulong(u) => u.to_string(),
        AttributeValue::Bytes(v) => format!("0x{}", hex::encode(v)),
        AttributeValue::ObjectClass(c) => format!("class {c:#x}"),
    }
}

impl Session {
    /// Read one attribute of an object, two-phase: probe the length,
    /// then fetch into a sized buffer and decode.
    pub fn get_attribute_value(
        &self,
        object_handle: CK_OBJECT_HANDLE,
        attribute_type: CK_ATTRIBUTE_TYPE,
    ) -> HResult<AttributeValue> {
        let mut attribute = CK_ATTRIBUTE {
            type_: attribute_type,
            pValue: ptr::null_mut(),
            ulValueLen: 0,
        };
        hsm_call!(
            self.hsm(),
            format!("Failed to get length of attribute {attribute_type:#x}"),
            C_GetAttributeValue,
            self.session_handle(),
            object_handle,
            &raw mut attribute,
            1
        );
        let value_len = attribute.ulValueLen;
        if value_len == CK_UNAVAILABLE_INFORMATION {
            return Err(HError::Default(format!(
                "attribute {attribute_type:#x} is not available on object {object_handle}"
            )));
        }
        let mut buffer = vec![0_u8; usize::try_from(value_len)?];
        attribute.pValue = buffer.as_mut_ptr().cast::<std::ffi::c_void>();
        hsm_call!(
            self.hsm(),
            format!("Failed to get value of attribute {attribute_type:#x}"),
            C_GetAttributeValue,
            self.session_handle(),
            object_handle,
            &raw mut attribute,
            1
        );
        let final_len = attribute.ulValueLen;
        buffer.truncate(usize::try_from(final_len)?);
        attributes::decode(attribute_type, &buffer)
    }

    /// Compare every attribute in `template` against the object's stored
    /// values. All mismatches are collected, not just the first: a
    /// failing verification should name everything that differs.
    /// Byte values compare byte-exact, numeric values numerically.
    pub fn verify_object_attributes(
        &self,
        object_handle: CK_OBJECT_HANDLE,
        template: &AttributeTemplate,
    ) -> HResult<Vec<AttributeMismatch>> {
        let mut mismatches = Vec::new();
        for attribute in template.iter() {
            let actual = self.get_attribute_value(object_handle, attribute.attribute_type)?;
            if actual != attribute.value {
                trace!(
                    "attribute {:#x} differs on object {object_handle}",
                    attribute.attribute_type
                );
                mismatches.push(AttributeMismatch {
                    attribute_type: attribute.attribute_type,
                    expected: attribute.value.clone(),
                    actual,
                });
            }
        }
        Ok(mismatches)
    }
}

#[cfg(test)]
mod tests {
    use pkcs11_sys::CKA_EC_PARAMS;

    use super::*;

    #[test]
    fn mismatch_display_hex_encodes_bytes() {
        let mismatch = AttributeMismatch {
            attribute_type: CKA_EC_PARAMS,
            expected: AttributeValue::Bytes(vec![0x06, 0x05]),
            actual: AttributeValue::Bytes(vec![0x06, 0x08]),
        };
        let rendered = mismatch.to_string();
        assert!(rendered.contains("0x0605"));
        assert!(rendered.contains("0x0608"));
    }
}
