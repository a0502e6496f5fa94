/*!
Algorithm type definitions.

This module defines the primitive kinds a key manager can produce and the
algorithm enums reported by the primitives themselves.
*/

use std::fmt;

/// Closed set of primitive kinds a key manager can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    /// Authenticated encryption with associated data
    Aead,
    /// Digital signature creation
    PublicKeySign,
    /// Digital signature verification
    PublicKeyVerify,
    /// KEM receiver side
    KemDecapsulate,
    /// KEM sender side
    KemEncapsulate,
}

impl PrimitiveKind {
    /// Get the name of the primitive kind as a string
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Aead => "Aead",
            PrimitiveKind::PublicKeySign => "PublicKeySign",
            PrimitiveKind::PublicKeyVerify => "PublicKeyVerify",
            PrimitiveKind::KemDecapsulate => "KemDecapsulate",
            PrimitiveKind::KemEncapsulate => "KemEncapsulate",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Supported Symmetric Encryption Algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetricAlgorithm {
    /// ChaCha20-Poly1305
    #[default]
    ChaCha20Poly1305,
    /// AES-128-GCM
    Aes128Gcm,
    /// AES-256-GCM - hardware acceleration on many platforms
    Aes256Gcm,
}

impl SymmetricAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            SymmetricAlgorithm::ChaCha20Poly1305 => "ChaCha20-Poly1305",
            SymmetricAlgorithm::Aes128Gcm => "AES-128-GCM",
            SymmetricAlgorithm::Aes256Gcm => "AES-256-GCM",
        }
    }
}

/// Supported Digital Signature Algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// CRYSTALS-Dilithium (dilithium3)
    #[default]
    Dilithium3,
}

impl SignatureAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Dilithium3 => "CRYSTALS-Dilithium-3",
        }
    }
}

/// Supported Key Encapsulation Mechanisms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KemAlgorithm {
    /// CRYSTALS-Kyber KEM (Kyber768)
    #[default]
    Kyber768,
}

impl KemAlgorithm {
    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            KemAlgorithm::Kyber768 => "CRYSTALS-Kyber-768",
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for KemAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
