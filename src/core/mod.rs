//! Core components of the key manager library.
//!
//! This module contains the wire messages, the key manager abstraction and
//! its built-in implementations, the registry, and error handling.

// Export cryptographic functionality
pub mod crypto;

// Export output prefix handling
pub mod crypto_format;

// Export key types and key managers
pub mod keys;

// Export wire messages
pub mod proto;

// Export the registry and manager handle
pub mod registry;

// Library constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{CryptoError, Error, ErrorKind, Result};
pub use self::constants::VERSION;
