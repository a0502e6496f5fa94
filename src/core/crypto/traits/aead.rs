/*!
Traits for authenticated encryption.

This module defines the interface for AEAD primitives.
*/

use crate::core::crypto::types::errors::Result;
use crate::core::crypto::types::algorithms::SymmetricAlgorithm;

/// Trait for AEAD operations
///
/// Ciphertexts are self-contained: the implementation picks a fresh random
/// nonce for every call and prepends it to the output.
pub trait Aead: Send + Sync {
    /// Encrypt and authenticate `plaintext`, binding `associated_data`
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt a ciphertext produced by `encrypt` with the same associated data
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Get the algorithm being used
    fn algorithm(&self) -> SymmetricAlgorithm;
}
