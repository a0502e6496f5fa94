/*!
Symmetric encryption algorithm implementations.

Both AEADs share the same ciphertext layout: a random 12-byte nonce
followed by the sealed payload and its 16-byte tag.
*/

pub mod chacha20poly1305;
#[cfg(feature = "aes-gcm")]
pub mod aes_gcm;

pub use self::chacha20poly1305::ChaCha20Poly1305Aead;
#[cfg(feature = "aes-gcm")]
pub use self::aes_gcm::AesGcmAead;

use crate::core::crypto::types::errors::{CryptoError, Result};

/// Split `nonce || sealed` and reject inputs too short to hold a tag.
pub(crate) fn split_ciphertext(
    ciphertext: &[u8],
    nonce_size: usize,
    tag_size: usize,
) -> Result<(&[u8], &[u8])> {
    if ciphertext.len() < nonce_size + tag_size {
        return Err(CryptoError::DecryptionFailed);
    }
    Ok(ciphertext.split_at(nonce_size))
}
