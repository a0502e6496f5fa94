/*!
Dilithium3 key managers.

The private key message embeds its public half, so deriving the public key
is a decode and re-wrap rather than a computation.
*/

use prost::Message;

use crate::core::constants::{KEY_VERSION, type_urls};
use crate::core::crypto::algorithms::signatures::dilithium::{
    self, DilithiumSigner, DilithiumVerifier,
};
use crate::core::crypto::traits::{PublicKeySign, PublicKeyVerify};
use crate::core::crypto::types::errors::{CryptoError, Result, validate_version};
use crate::core::keys::manager::{
    KeyFactory, KeyManager, KeyTypeManager, PrivateKeyFactory, decode_key,
};
use crate::core::keys::managers::UnsupportedKeyFactory;
use crate::core::keys::type_url::KeyTypeUrl;
use crate::core::proto::keys::{DilithiumKeyFormat, DilithiumPrivateKey, DilithiumPublicKey};
use crate::core::proto::{KeyData, KeyMaterialType};

/// Manages `Dilithium3PrivateKey` keys and builds `PublicKeySign` primitives
pub struct DilithiumPrivateKeyManager {
    key_type: KeyTypeUrl,
    factory: DilithiumPrivateKeyFactory,
}

impl DilithiumPrivateKeyManager {
    pub fn new() -> Self {
        Self {
            key_type: KeyTypeUrl::from_static(type_urls::DILITHIUM3_PRIVATE),
            factory: DilithiumPrivateKeyFactory,
        }
    }
}

impl Default for DilithiumPrivateKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTypeManager for DilithiumPrivateKeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

impl KeyManager<dyn PublicKeySign> for DilithiumPrivateKeyManager {
    fn primitive(&self, key_data: &KeyData) -> Result<Box<dyn PublicKeySign>> {
        let key = decode_private_key(&key_data.value)?;
        Ok(Box::new(DilithiumSigner::new(&key.key_value)?))
    }
}

/// Decode a private key and check both its own and its public half's version
fn decode_private_key(bytes: &[u8]) -> Result<DilithiumPrivateKey> {
    let key: DilithiumPrivateKey = decode_key(bytes)?;
    validate_version(key.version, KEY_VERSION)?;
    let public_key = key.public_key.as_ref().ok_or(CryptoError::InvalidKeyFormat)?;
    validate_version(public_key.version, KEY_VERSION)?;
    Ok(key)
}

struct DilithiumPrivateKeyFactory;

impl KeyFactory for DilithiumPrivateKeyFactory {
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData> {
        let _format: DilithiumKeyFormat = decode_key(serialized_key_format)?;

        let (public_key, secret_key) = dilithium::generate_keypair();
        let key = DilithiumPrivateKey {
            version: KEY_VERSION,
            public_key: Some(DilithiumPublicKey {
                version: KEY_VERSION,
                key_value: public_key,
            }),
            key_value: secret_key,
        };

        Ok(KeyData::new(
            type_urls::DILITHIUM3_PRIVATE,
            key.encode_to_vec(),
            KeyMaterialType::AsymmetricPrivate,
        ))
    }

    fn as_private(&self) -> Option<&dyn PrivateKeyFactory> {
        Some(self)
    }
}

impl PrivateKeyFactory for DilithiumPrivateKeyFactory {
    fn public_key_data(&self, serialized_private_key: &[u8]) -> Result<KeyData> {
        let key = decode_private_key(serialized_private_key)?;
        let public_key = key.public_key.ok_or(CryptoError::InvalidKeyFormat)?;
        dilithium::validate_public_key(&public_key.key_value)?;

        Ok(KeyData::new(
            type_urls::DILITHIUM3_PUBLIC,
            public_key.encode_to_vec(),
            KeyMaterialType::AsymmetricPublic,
        ))
    }
}

/// Manages `Dilithium3PublicKey` keys and builds `PublicKeyVerify` primitives
pub struct DilithiumPublicKeyManager {
    key_type: KeyTypeUrl,
    factory: UnsupportedKeyFactory,
}

impl DilithiumPublicKeyManager {
    pub fn new() -> Self {
        Self {
            key_type: KeyTypeUrl::from_static(type_urls::DILITHIUM3_PUBLIC),
            factory: UnsupportedKeyFactory::new(type_urls::DILITHIUM3_PUBLIC),
        }
    }
}

impl Default for DilithiumPublicKeyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTypeManager for DilithiumPublicKeyManager {
    fn key_type(&self) -> &KeyTypeUrl {
        &self.key_type
    }

    fn key_factory(&self) -> &dyn KeyFactory {
        &self.factory
    }
}

impl KeyManager<dyn PublicKeyVerify> for DilithiumPublicKeyManager {
    fn primitive(&self, key_data: &KeyData) -> Result<Box<dyn PublicKeyVerify>> {
        let key: DilithiumPublicKey = decode_key(&key_data.value)?;
        validate_version(key.version, KEY_VERSION)?;
        Ok(Box::new(DilithiumVerifier::new(&key.key_value)?))
    }
}
