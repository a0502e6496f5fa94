/*!
Error types for cryptographic operations.

This module defines the errors raised by the algorithm layer: key managers,
key factories and the primitives they build. The boundary layer in
`crate::core::error` wraps these as the cause of its failure kinds.
*/

use thiserror::Error;

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Error type for cryptographic operations
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key bytes could not be interpreted by the algorithm
    #[error("Invalid key format")]
    InvalidKeyFormat,

    /// Key has the wrong length for the algorithm
    #[error("Invalid key size: {0} bytes")]
    InvalidKeySize(usize),

    /// Key message carries a version this implementation does not know
    #[error("Unsupported key version: {0}")]
    UnsupportedVersion(u32),

    /// Key format parameters were rejected
    #[error("Invalid key parameters: {0}")]
    InvalidParameters(String),

    /// The algorithm does not offer the requested operation
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The operating system random source failed
    #[error("Random number generation failed: {0}")]
    Randomness(String),

    /// Encryption failed
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Decryption failed (limited details for security)
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// KEM decapsulation failed
    #[error("Decapsulation failed")]
    DecapsulationFailed,

    /// Key derivation failed
    #[error("Key derivation failed")]
    KeyDerivationFailed,

    /// A key factory produced a record that does not describe its own key type
    #[error("Generated key data rejected: {0}")]
    UnexpectedKeyData(String),

    /// Key material could not be decoded from its protobuf encoding
    #[error("Key material decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl CryptoError {
    /// Create an InvalidParameters error
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        CryptoError::InvalidParameters(msg.into())
    }

    /// Create an UnsupportedOperation error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        CryptoError::UnsupportedOperation(msg.into())
    }
}

/// Reject key messages whose version is newer than this implementation.
pub fn validate_version(version: u32, max_expected: u32) -> Result<()> {
    if version > max_expected {
        return Err(CryptoError::UnsupportedVersion(version));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_version() {
        assert!(validate_version(0, 0).is_ok());
        assert!(matches!(
            validate_version(1, 0),
            Err(CryptoError::UnsupportedVersion(1))
        ));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CryptoError::InvalidKeySize(7).to_string(), "Invalid key size: 7 bytes");
        assert_eq!(
            CryptoError::invalid_parameters("bad").to_string(),
            "Invalid key parameters: bad"
        );
    }
}
