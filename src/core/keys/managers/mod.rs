/*!
Built-in key managers.

One manager per key type identifier. Private key managers expose a
`PrivateKeyFactory`; their public counterparts build verifiers and
encapsulators but cannot generate keys on their own.
*/

pub mod chacha20poly1305;
#[cfg(feature = "aes-gcm")]
pub mod aes_gcm;
pub mod dilithium;
pub mod kyber;

pub use self::chacha20poly1305::ChaCha20Poly1305KeyManager;
#[cfg(feature = "aes-gcm")]
pub use self::aes_gcm::AesGcmKeyManager;
pub use self::dilithium::{DilithiumPrivateKeyManager, DilithiumPublicKeyManager};
pub use self::kyber::{KyberPrivateKeyManager, KyberPublicKeyManager};

use crate::core::crypto::types::errors::{CryptoError, Result};
use crate::core::keys::manager::KeyFactory;
use crate::core::proto::KeyData;

/// Factory of public key types: public keys come from `public_key_data`
/// on the private key manager, never from a template.
pub struct UnsupportedKeyFactory {
    key_type: &'static str,
}

impl UnsupportedKeyFactory {
    pub(crate) fn new(key_type: &'static str) -> Self {
        Self { key_type }
    }
}

impl KeyFactory for UnsupportedKeyFactory {
    fn new_key_data(&self, _serialized_key_format: &[u8]) -> Result<KeyData> {
        Err(CryptoError::unsupported(format!(
            "key generation is not supported for '{}', derive it from the private key",
            self.key_type
        )))
    }
}
