/*!
ChaCha20-Poly1305 symmetric encryption implementation.

This module provides an AEAD primitive backed by ChaCha20-Poly1305.
*/

use crate::core::crypto::algorithms::symmetric::split_ciphertext;
use crate::core::crypto::random::random_array;
use crate::core::crypto::traits::aead::Aead;
use crate::core::crypto::types::algorithms::SymmetricAlgorithm;
use crate::core::crypto::types::constants::chacha;
use crate::core::crypto::types::errors::{CryptoError, Result};

use chacha20poly1305::{
    ChaCha20Poly1305, Key as ChaChaKey, Nonce,
    aead::{Aead as AeadCipher, KeyInit, Payload},
};

/// ChaCha20-Poly1305 AEAD bound to one key
pub struct ChaCha20Poly1305Aead {
    cipher: ChaCha20Poly1305,
}

impl ChaCha20Poly1305Aead {
    /// Create a new ChaCha20-Poly1305 AEAD from raw key bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != chacha::KEY_SIZE {
            return Err(CryptoError::InvalidKeySize(key.len()));
        }
        Ok(Self {
            cipher: ChaCha20Poly1305::new(ChaChaKey::from_slice(key)),
        })
    }
}

impl Aead for ChaCha20Poly1305Aead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let nonce: [u8; chacha::NONCE_SIZE] = random_array()?;
        let sealed = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), Payload { msg: plaintext, aad: associated_data })
            .map_err(|_e| CryptoError::EncryptionFailed)?;

        let mut out = Vec::with_capacity(nonce.len() + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let (nonce, sealed) = split_ciphertext(ciphertext, chacha::NONCE_SIZE, chacha::TAG_SIZE)?;
        self.cipher
            .decrypt(Nonce::from_slice(nonce), Payload { msg: sealed, aad: associated_data })
            .map_err(|_e| CryptoError::DecryptionFailed)
    }

    fn algorithm(&self) -> SymmetricAlgorithm {
        SymmetricAlgorithm::ChaCha20Poly1305
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let aead = ChaCha20Poly1305Aead::new(&[7u8; 32]).unwrap();
        let ct = aead.encrypt(b"attack at dawn", b"header").unwrap();
        assert_eq!(ct.len(), chacha::NONCE_SIZE + 14 + chacha::TAG_SIZE);
        assert_eq!(aead.decrypt(&ct, b"header").unwrap(), b"attack at dawn");
    }

    #[test]
    fn test_wrong_associated_data_fails() {
        let aead = ChaCha20Poly1305Aead::new(&[7u8; 32]).unwrap();
        let ct = aead.encrypt(b"payload", b"a").unwrap();
        assert!(matches!(aead.decrypt(&ct, b"b"), Err(CryptoError::DecryptionFailed)));
    }

    #[test]
    fn test_short_ciphertext_fails() {
        let aead = ChaCha20Poly1305Aead::new(&[7u8; 32]).unwrap();
        assert!(aead.decrypt(&[0u8; 20], b"").is_err());
    }

    #[test]
    fn test_wrong_key_size() {
        assert!(matches!(
            ChaCha20Poly1305Aead::new(&[0u8; 16]),
            Err(CryptoError::InvalidKeySize(16))
        ));
    }
}
