/*!
ChaCha20-Poly1305 key manager.
*/

use prost::Message;

use crate::core::constants::{KEY_VERSION, type_urls};
use crate::core::crypto::algorithms::symmetric::ChaCha20Poly1305Aead;
use crate::core::crypto::random::random_vec;
use crate::core::crypto::traits::Aead;
use crate::core::crypto::types::constants::chacha;
use crate::core::crypto::types::errors::{Result, validate_version};
use crate::core::keys::manager::{KeyFactory, KeyManager, KeyTypeManager, decode_key};
use crate::core::keys::type_url::KeyTypeUrl;
use crate::core::proto::keys::{ChaCha20Poly1305Key, ChaCha20Poly1305KeyFormat};
use crate::core::proto::{KeyData, KeyMaterialType};

/// Manages `ChaCha20Poly1305Key` keys and builds `Aead` primitives
pub struct ChaCha20Poly1305KeyManager {
    key_type: KeyTypeUrl,
    factory: ChaCha20Poly1305KeyFactory,
}

impl ChaCha20Poly1305KeyManager {
    pub fn new() -> Self {
        Self {
            key_type: KeyTypeUrl::from_static(type_urls::CHACHA20_POLY1305),
            factory: ChaCha20Poly1305KeyFactory,
        }
    }
}

impl Default for ChaCha20Poly1305KeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTypeManager for ChaCha20Poly1305KeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

impl KeyManager<dyn Aead> for ChaCha20Poly1305KeyManager {
    fn primitive(&self, key_data: &KeyData) -> Result<Box<dyn Aead>> {
        let key: ChaCha20Poly1305Key = decode_key(&key_data.value)?;
        validate_version(key.version, KEY_VERSION)?;
        Ok(Box::new(ChaCha20Poly1305Aead::new(&key.key_value)?))
    }
}

struct ChaCha20Poly1305KeyFactory;

impl KeyFactory for ChaCha20Poly1305KeyFactory {
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData> {
        // The format has no fields, but it still has to be a valid message.
        let _format: ChaCha20Poly1305KeyFormat = decode_key(serialized_key_format)?;

        let key = ChaCha20Poly1305Key {
            version: KEY_VERSION,
            key_value: random_vec(chacha::KEY_SIZE)?,
        };

        Ok(KeyData::new(
            type_urls::CHACHA20_POLY1305,
            key.encode_to_vec(),
            KeyMaterialType::Symmetric,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::types::errors::CryptoError;

    #[test]
    fn test_generate_and_use() {
        let manager = ChaCha20Poly1305KeyManager::new();
        let key_data = manager.key_factory().new_key_data(&[]).unwrap();
        assert_eq!(key_data.type_url, type_urls::CHACHA20_POLY1305);
        assert_eq!(key_data.key_material_type(), KeyMaterialType::Symmetric);

        let aead = manager.primitive(&key_data).unwrap();
        let ct = aead.encrypt(b"data", b"ad").unwrap();
        assert_eq!(aead.decrypt(&ct, b"ad").unwrap(), b"data");
    }

    #[test]
    fn test_no_private_capability() {
        let manager = ChaCha20Poly1305KeyManager::new();
        assert!(manager.key_factory().as_private().is_none());
    }

    #[test]
    fn test_rejects_future_version() {
        let manager = ChaCha20Poly1305KeyManager::new();
        let key = ChaCha20Poly1305Key { version: 1, key_value: vec![0u8; 32] };
        let key_data = KeyData::new(
            type_urls::CHACHA20_POLY1305,
            key.encode_to_vec(),
            KeyMaterialType::Symmetric,
        );
        assert!(matches!(
            manager.primitive(&key_data),
            Err(CryptoError::UnsupportedVersion(1))
        ));
    }

    #[test]
    fn test_rejects_short_key() {
        let manager = ChaCha20Poly1305KeyManager::new();
        let key = ChaCha20Poly1305Key { version: 0, key_value: vec![0u8; 31] };
        let key_data = KeyData::new(
            type_urls::CHACHA20_POLY1305,
            key.encode_to_vec(),
            KeyMaterialType::Symmetric,
        );
        assert!(matches!(
            manager.primitive(&key_data),
            Err(CryptoError::InvalidKeySize(31))
        ));
    }
}
