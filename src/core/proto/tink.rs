/*!
Key template and key data envelopes.

Field numbers match the established Tink wire layout, so serialized
templates and key records interoperate with other implementations.
*/

use prost::Message;

/// How ciphertexts or signatures made with a key are prefixed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum OutputPrefixType {
    UnknownPrefix = 0,
    Tink = 1,
    Legacy = 2,
    Raw = 3,
    Crunchy = 4,
}

/// What kind of secret the `value` of a `KeyData` holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum KeyMaterialType {
    UnknownKeymaterial = 0,
    Symmetric = 1,
    AsymmetricPrivate = 2,
    AsymmetricPublic = 3,
    Remote = 4,
}

/// Instructions for generating a new key
#[derive(Clone, PartialEq, Message)]
pub struct KeyTemplate {
    /// Identifier of the key type this template is for
    #[prost(string, tag = "1")]
    pub type_url: String,
    /// Serialized key format, meaningful only to the matching key factory
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
    #[prost(enumeration = "OutputPrefixType", tag = "3")]
    pub output_prefix_type: i32,
}

impl KeyTemplate {
    /// Create a template from its parts
    pub fn new(type_url: impl Into<String>, value: Vec<u8>, prefix: OutputPrefixType) -> Self {
        Self {
            type_url: type_url.into(),
            value,
            output_prefix_type: prefix as i32,
        }
    }
}

/// One concrete key: its type, serialized material and metadata
#[derive(Clone, PartialEq, Message)]
pub struct KeyData {
    /// Identifier of the key type that produced this key
    #[prost(string, tag = "1")]
    pub type_url: String,
    /// Serialized algorithm-specific key message
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
    #[prost(enumeration = "KeyMaterialType", tag = "3")]
    pub key_material_type: i32,
}

impl KeyData {
    /// Create a key record from its parts
    pub fn new(type_url: impl Into<String>, value: Vec<u8>, material: KeyMaterialType) -> Self {
        Self {
            type_url: type_url.into(),
            value,
            key_material_type: material as i32,
        }
    }

    /// The first envelope field that is unset, if any
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.type_url.is_empty() {
            return Some("type_url");
        }
        match KeyMaterialType::try_from(self.key_material_type) {
            Ok(KeyMaterialType::UnknownKeymaterial) | Err(_) => Some("key_material_type"),
            Ok(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_data_accessors() {
        let data = KeyData::new("type.test/Key", vec![1, 2, 3], KeyMaterialType::Symmetric);
        assert_eq!(data.key_material_type(), KeyMaterialType::Symmetric);

        let decoded = KeyData::decode(data.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_missing_envelope_fields() {
        assert_eq!(
            KeyData::new("type.test/Key", vec![], KeyMaterialType::Remote).missing_field(),
            None
        );
        assert_eq!(
            KeyData::new("", vec![1], KeyMaterialType::Symmetric).missing_field(),
            Some("type_url")
        );
        let mut data = KeyData::new("type.test/Key", vec![1], KeyMaterialType::Symmetric);
        data.key_material_type = 0;
        assert_eq!(data.missing_field(), Some("key_material_type"));
        data.key_material_type = 99;
        assert_eq!(data.missing_field(), Some("key_material_type"));
    }

    #[test]
    fn test_unknown_enum_value_reads_as_default() {
        let template = KeyTemplate {
            type_url: "type.test/Key".into(),
            value: vec![],
            output_prefix_type: 42,
        };
        assert_eq!(template.output_prefix_type(), OutputPrefixType::UnknownPrefix);
    }

    #[test]
    fn test_truncated_encoding_rejected() {
        let data = KeyData::new("type.test/Key", vec![0u8; 64], KeyMaterialType::Symmetric);
        let bytes = data.encode_to_vec();
        assert!(KeyData::decode(&bytes[..bytes.len() - 10]).is_err());
    }
}
