/*!
AES-GCM key manager.

The key size comes from the `AesGcmKeyFormat` in the template: 16 bytes for
AES-128-GCM, 32 bytes for AES-256-GCM. Anything else is rejected.
*/

use prost::Message;

use crate::core::constants::{KEY_VERSION, type_urls};
use crate::core::crypto::algorithms::symmetric::AesGcmAead;
use crate::core::crypto::random::random_vec;
use crate::core::crypto::traits::Aead;
use crate::core::crypto::types::constants::aes;
use crate::core::crypto::types::errors::{CryptoError, Result, validate_version};
use crate::core::keys::manager::{KeyFactory, KeyManager, KeyTypeManager, decode_key};
use crate::core::keys::type_url::KeyTypeUrl;
use crate::core::proto::keys::{AesGcmKey, AesGcmKeyFormat};
use crate::core::proto::{KeyData, KeyMaterialType};

/// Manages `AesGcmKey` keys and builds `Aead` primitives
pub struct AesGcmKeyManager {
    key_type: KeyTypeUrl,
    factory: AesGcmKeyFactory,
}

impl AesGcmKeyManager {
    pub fn new() -> Self {
        Self {
            key_type: KeyTypeUrl::from_static(type_urls::AES_GCM),
            factory: AesGcmKeyFactory,
        }
    }
}

impl Default for AesGcmKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTypeManager for AesGcmKeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

impl KeyManager<dyn Aead> for AesGcmKeyManager {
    fn primitive(&self, key_data: &KeyData) -> Result<Box<dyn Aead>> {
        let key: AesGcmKey = decode_key(&key_data.value)?;
        validate_version(key.version, KEY_VERSION)?;
        Ok(Box::new(AesGcmAead::new(&key.key_value)?))
    }
}

fn validate_key_size(key_size: u32) -> Result<usize> {
    match key_size as usize {
        size @ (aes::KEY_SIZE_128 | aes::KEY_SIZE_256) => Ok(size),
        other => Err(CryptoError::invalid_parameters(format!(
            "AES-GCM key size must be 16 or 32 bytes, got {other}"
        ))),
    }
}

struct AesGcmKeyFactory;

impl KeyFactory for AesGcmKeyFactory {
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData> {
        let format: AesGcmKeyFormat = decode_key(serialized_key_format)?;
        validate_version(format.version, KEY_VERSION)?;
        let key_size = validate_key_size(format.key_size)?;

        let key = AesGcmKey {
            version: KEY_VERSION,
            key_value: random_vec(key_size)?,
        };

        Ok(KeyData::new(
            type_urls::AES_GCM,
            key.encode_to_vec(),
            KeyMaterialType::Symmetric,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::types::algorithms::SymmetricAlgorithm;

    fn format(key_size: u32) -> Vec<u8> {
        AesGcmKeyFormat { key_size, version: 0 }.encode_to_vec()
    }

    #[test]
    fn test_key_sizes() {
        let manager = AesGcmKeyManager::new();
        for (size, algorithm) in [
            (16, SymmetricAlgorithm::Aes128Gcm),
            (32, SymmetricAlgorithm::Aes256Gcm),
        ] {
            let key_data = manager.key_factory().new_key_data(&format(size)).unwrap();
            let key = AesGcmKey::decode(key_data.value.as_slice()).unwrap();
            assert_eq!(key.key_value.len(), size as usize);
            assert_eq!(manager.primitive(&key_data).unwrap().algorithm(), algorithm);
        }
    }

    #[test]
    fn test_invalid_key_size_rejected() {
        let manager = AesGcmKeyManager::new();
        assert!(matches!(
            manager.key_factory().new_key_data(&format(24)),
            Err(CryptoError::InvalidParameters(_))
        ));
        assert!(manager.key_factory().new_key_data(&format(0)).is_err());
    }
}
