/*!
Registry configuration.

This module selects which families of built-in key managers register
themselves when a registry is built from configuration.
*/

use crate::core::crypto::types::errors::{CryptoError, Result};

/// Selection of built-in key manager families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct RegistryConfig {
    /// Register AEAD managers (ChaCha20-Poly1305, AES-GCM when built)
    pub aead: bool,
    /// Register Dilithium signing and verification managers
    pub signature: bool,
    /// Register Kyber decapsulation and encapsulation managers
    pub kem: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            aead: true,
            signature: true,
            kem: true,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Only symmetric AEAD key types
    pub fn aead_only() -> Self {
        Self {
            aead: true,
            signature: false,
            kem: false,
        }
    }

    /// Only asymmetric (signature and KEM) key types
    pub fn asymmetric_only() -> Self {
        Self {
            aead: false,
            signature: true,
            kem: true,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.aead || self.signature || self.kem) {
            return Err(CryptoError::invalid_parameters(
                "registry configuration selects no key manager family",
            ));
        }
        Ok(())
    }
}
