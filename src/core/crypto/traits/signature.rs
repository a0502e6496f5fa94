/*!
Traits for signature operations.

This module defines the signing and verification halves of a signature
scheme. Each half is bound to its key when the key manager builds it.
*/

use crate::core::crypto::types::errors::Result;
use crate::core::crypto::types::algorithms::SignatureAlgorithm;

/// Trait for signature creation
pub trait PublicKeySign: Send + Sync {
    /// Sign data
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Get the current algorithm
    fn algorithm(&self) -> SignatureAlgorithm;
}

/// Trait for signature verification
pub trait PublicKeyVerify: Send + Sync {
    /// Verify a detached signature over data
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()>;

    /// Get the current algorithm
    fn algorithm(&self) -> SignatureAlgorithm;
}
