/*!
Cryptographic components behind the key managers.

This module provides the primitive interfaces, their algorithm
implementations, per-call randomness, and the algorithm-level types.
*/

// Algorithm implementations
pub mod algorithms;

// Operating system randomness
pub mod random;

// Primitive interfaces
pub mod traits;

// Algorithm enums, constants, errors and registry configuration
pub mod types;

pub use traits::{Aead, KemDecapsulate, KemEncapsulate, Primitive, PublicKeySign, PublicKeyVerify};
pub use types::{CryptoError, PrimitiveKind, RegistryConfig};
