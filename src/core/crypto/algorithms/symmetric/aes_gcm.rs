/*!
AES-GCM symmetric encryption implementation.

This module provides an AEAD primitive backed by AES-128-GCM or
AES-256-GCM, selected by the key length.
*/

use crate::core::crypto::algorithms::symmetric::split_ciphertext;
use crate::core::crypto::random::random_array;
use crate::core::crypto::traits::aead::Aead;
use crate::core::crypto::types::algorithms::SymmetricAlgorithm;
use crate::core::crypto::types::constants::aes;
use crate::core::crypto::types::errors::{CryptoError, Result};

use aes_gcm::{
    Aes128Gcm, Aes256Gcm, Nonce,
    aead::{Aead as AeadCipher, KeyInit, Payload},
};

enum AesGcmCipher {
    Aes128(Aes128Gcm),
    Aes256(Aes256Gcm),
}

/// AES-GCM AEAD bound to one key
pub struct AesGcmAead {
    cipher: AesGcmCipher,
}

impl AesGcmAead {
    /// Create a new AES-GCM AEAD; 16-byte keys select AES-128, 32-byte keys AES-256
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = match key.len() {
            aes::KEY_SIZE_128 => AesGcmCipher::Aes128(
                Aes128Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyFormat)?,
            ),
            aes::KEY_SIZE_256 => AesGcmCipher::Aes256(
                Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyFormat)?,
            ),
            other => return Err(CryptoError::InvalidKeySize(other)),
        };
        Ok(Self { cipher })
    }
}

impl Aead for AesGcmAead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let nonce: [u8; aes::NONCE_SIZE] = random_array()?;
        let nonce_ref = Nonce::from_slice(&nonce);
        let payload = Payload { msg: plaintext, aad: associated_data };
        let sealed = match &self.cipher {
            AesGcmCipher::Aes128(c) => c.encrypt(nonce_ref, payload),
            AesGcmCipher::Aes256(c) => c.encrypt(nonce_ref, payload),
        }
        .map_err(|_e| CryptoError::EncryptionFailed)?;

        let mut out = Vec::with_capacity(nonce.len() + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let (nonce, sealed) = split_ciphertext(ciphertext, aes::NONCE_SIZE, aes::TAG_SIZE)?;
        let nonce_ref = Nonce::from_slice(nonce);
        let payload = Payload { msg: sealed, aad: associated_data };
        match &self.cipher {
            AesGcmCipher::Aes128(c) => c.decrypt(nonce_ref, payload),
            AesGcmCipher::Aes256(c) => c.decrypt(nonce_ref, payload),
        }
        .map_err(|_e| CryptoError::DecryptionFailed)
    }

    fn algorithm(&self) -> SymmetricAlgorithm {
        match self.cipher {
            AesGcmCipher::Aes128(_) => SymmetricAlgorithm::Aes128Gcm,
            AesGcmCipher::Aes256(_) => SymmetricAlgorithm::Aes256Gcm,
        }
    }
}
