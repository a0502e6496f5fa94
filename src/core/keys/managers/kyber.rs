/*!
Kyber768 key managers.
*/

use prost::Message;

use crate::core::constants::{KEY_VERSION, type_urls};
use crate::core::crypto::algorithms::kem::kyber::{self, KyberDecapsulator, KyberEncapsulator};
use crate::core::crypto::traits::{KemDecapsulate, KemEncapsulate};
use crate::core::crypto::types::errors::{CryptoError, Result, validate_version};
use crate::core::keys::manager::{
    KeyFactory, KeyManager, KeyTypeManager, PrivateKeyFactory, decode_key,
};
use crate::core::keys::managers::UnsupportedKeyFactory;
use crate::core::keys::type_url::KeyTypeUrl;
use crate::core::proto::keys::{KyberKeyFormat, KyberPrivateKey, KyberPublicKey};
use crate::core::proto::{KeyData, KeyMaterialType};

/// Manages `Kyber768PrivateKey` keys and builds `KemDecapsulate` primitives
pub struct KyberPrivateKeyManager {
    key_type: KeyTypeUrl,
    factory: KyberPrivateKeyFactory,
}

impl KyberPrivateKeyManager {
    pub fn new() -> Self {
        Self {
            key_type: KeyTypeUrl::from_static(type_urls::KYBER768_PRIVATE),
            factory: KyberPrivateKeyFactory,
        }
    }
}

impl Default for KyberPrivateKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTypeManager for KyberPrivateKeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

impl KeyManager<dyn KemDecapsulate> for KyberPrivateKeyManager {
    fn primitive(&self, key_data: &KeyData) -> Result<Box<dyn KemDecapsulate>> {
        let key = decode_private_key(&key_data.value)?;
        Ok(Box::new(KyberDecapsulator::new(&key.key_value)?))
    }
}

fn decode_private_key(bytes: &[u8]) -> Result<KyberPrivateKey> {
    let key: KyberPrivateKey = decode_key(bytes)?;
    validate_version(key.version, KEY_VERSION)?;
    let public_key = key.public_key.as_ref().ok_or(CryptoError::InvalidKeyFormat)?;
    validate_version(public_key.version, KEY_VERSION)?;
    Ok(key)
}

struct KyberPrivateKeyFactory;

impl KeyFactory for KyberPrivateKeyFactory {
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData> {
        let _format: KyberKeyFormat = decode_key(serialized_key_format)?;

        let (public_key, secret_key) = kyber::generate_keypair();
        let key = KyberPrivateKey {
            version: KEY_VERSION,
            public_key: Some(KyberPublicKey {
                version: KEY_VERSION,
                key_value: public_key,
            }),
            key_value: secret_key,
        };

        Ok(KeyData::new(
            type_urls::KYBER768_PRIVATE,
            key.encode_to_vec(),
            KeyMaterialType::AsymmetricPrivate,
        ))
    }

    fn as_private(&self) -> Option<&dyn PrivateKeyFactory> {
        Some(self)
    }
}

impl PrivateKeyFactory for KyberPrivateKeyFactory {
    fn public_key_data(&self, serialized_private_key: &[u8]) -> Result<KeyData> {
        let key = decode_private_key(serialized_private_key)?;
        let public_key = key.public_key.ok_or(CryptoError::InvalidKeyFormat)?;
        kyber::validate_public_key(&public_key.key_value)?;

        Ok(KeyData::new(
            type_urls::KYBER768_PUBLIC,
            public_key.encode_to_vec(),
            KeyMaterialType::AsymmetricPublic,
        ))
    }
}

/// Manages `Kyber768PublicKey` keys and builds `KemEncapsulate` primitives
pub struct KyberPublicKeyManager {
    key_type: KeyTypeUrl,
    factory: UnsupportedKeyFactory,
}

impl KyberPublicKeyManager {
    pub fn new() -> Self {
        Self {
            key_type: KeyTypeUrl::from_static(type_urls::KYBER768_PUBLIC),
            factory: UnsupportedKeyFactory::new(type_urls::KYBER768_PUBLIC),
        }
    }
}

impl Default for KyberPublicKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTypeManager for KyberPublicKeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

impl KeyManager<dyn KemEncapsulate> for KyberPublicKeyManager {
    fn primitive(&self, key_data: &KeyData) -> Result<Box<dyn KemEncapsulate>> {
        let key: KyberPublicKey = decode_key(&key_data.value)?;
        validate_version(key.version, KEY_VERSION)?;
        Ok(Box::new(KyberEncapsulator::new(&key.key_value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encapsulate_to_derived_public_key() {
        let private_manager = KyberPrivateKeyManager::new();
        let public_manager = KyberPublicKeyManager::new();

        let private_data = private_manager.key_factory().new_key_data(&[]).unwrap();
        let factory = private_manager.key_factory().as_private().unwrap();
        let public_data = factory.public_key_data(&private_data.value).unwrap();
        assert_eq!(public_data.type_url, type_urls::KYBER768_PUBLIC);

        let sender = public_manager.primitive(&public_data).unwrap();
        let receiver = private_manager.primitive(&private_data).unwrap();
        let (ct, key) = sender.encapsulate().unwrap();
        assert_eq!(receiver.decapsulate(&ct).unwrap(), key);
    }

    #[test]
    fn test_corrupt_secret_key_rejected() {
        let private_manager = KyberPrivateKeyManager::new();
        let private_data = private_manager.key_factory().new_key_data(&[]).unwrap();
        let mut key = KyberPrivateKey::decode(private_data.value.as_slice()).unwrap();
        key.key_value.truncate(100);

        let corrupt = KeyData::new(
            type_urls::KYBER768_PRIVATE,
            key.encode_to_vec(),
            KeyMaterialType::AsymmetricPrivate,
        );
        assert!(matches!(
            private_manager.primitive(&corrupt),
            Err(CryptoError::InvalidKeyFormat)
        ));
    }
}
