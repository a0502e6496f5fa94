/*!
Error handling for the key manager boundary.

Every operation a caller can reach returns this `Error`. Its variants are
the failure kinds a caller must be able to tell apart; the algorithm-level
`CryptoError` rides along as the source of the wrapping variants.
*/

use std::fmt;
use thiserror::Error;

pub use crate::core::crypto::types::errors::CryptoError;

/// Result type for key manager operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for key manager operations
#[derive(Error, Debug)]
pub enum Error {
    /// No manager is registered for the identifier (configuration error)
    #[error("No manager for key type '{0}' found in the registry")]
    NotFound(String),

    /// Serialized input does not parse into the expected structure
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The input names a different key type than the bound manager
    #[error("Key type '{actual}' is not supported by the manager for '{expected}'")]
    TypeMismatch {
        expected: String,
        actual: String,
    },

    /// The manager does not offer the requested capability
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The algorithm could not build a primitive from the key
    #[error("Primitive construction failed: {0}")]
    PrimitiveConstruction(#[source] CryptoError),

    /// The key factory rejected the template
    #[error("Key generation failed: {0}")]
    KeyGeneration(#[source] CryptoError),

    /// Public key derivation failed
    #[error("Public key derivation failed: {0}")]
    Derivation(#[source] CryptoError),

    /// Registry registration or installation was refused
    #[error("Registration failed: {0}")]
    Registration(String),
}

/// Flat discriminant of `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    MalformedInput,
    TypeMismatch,
    UnsupportedOperation,
    PrimitiveConstruction,
    KeyGeneration,
    Derivation,
    Registration,
}

impl Error {
    /// The failure kind, for callers that branch on it
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::MalformedInput(_) => ErrorKind::MalformedInput,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Error::PrimitiveConstruction(_) => ErrorKind::PrimitiveConstruction,
            Error::KeyGeneration(_) => ErrorKind::KeyGeneration,
            Error::Derivation(_) => ErrorKind::Derivation,
            Error::Registration(_) => ErrorKind::Registration,
        }
    }

    /// The algorithm-level cause, for the wrapping kinds
    pub fn crypto_cause(&self) -> Option<&CryptoError> {
        match self {
            Error::PrimitiveConstruction(e) | Error::KeyGeneration(e) | Error::Derivation(e) => {
                Some(e)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::MalformedInput => "MalformedInput",
            ErrorKind::TypeMismatch => "TypeMismatch",
            ErrorKind::UnsupportedOperation => "UnsupportedOperation",
            ErrorKind::PrimitiveConstruction => "PrimitiveConstructionError",
            ErrorKind::KeyGeneration => "KeyGenerationError",
            ErrorKind::Derivation => "DerivationError",
            ErrorKind::Registration => "RegistrationError",
        };
        f.write_str(name)
    }
}

/// Shorthand for a `MalformedInput` error on a named structure
pub(crate) fn malformed(what: &str, cause: impl fmt::Display) -> Error {
    Error::MalformedInput(format!("{what}: {cause}"))
}
