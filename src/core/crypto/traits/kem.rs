/*!
Traits for key encapsulation.

This module defines the sender and receiver halves of a KEM. Both sides
derive the same symmetric key from the encapsulated shared secret.
*/

use crate::core::crypto::types::errors::Result;
use crate::core::crypto::types::algorithms::KemAlgorithm;

/// Trait for the sender side of a KEM
pub trait KemEncapsulate: Send + Sync {
    /// Encapsulate a fresh shared secret to the bound public key.
    ///
    /// Returns the ciphertext and the derived 32-byte key.
    fn encapsulate(&self) -> Result<(Vec<u8>, [u8; 32])>;

    /// Get the current algorithm
    fn algorithm(&self) -> KemAlgorithm;
}

/// Trait for the receiver side of a KEM
pub trait KemDecapsulate: Send + Sync {
    /// Recover the derived 32-byte key from a ciphertext
    fn decapsulate(&self, ciphertext: &[u8]) -> Result<[u8; 32]>;

    /// Get the current algorithm
    fn algorithm(&self) -> KemAlgorithm;
}
