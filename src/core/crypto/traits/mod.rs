/*!
Core traits for cryptographic primitives.

This module defines the interfaces of the live primitives a key manager
produces, and the `Primitive` marker tying each interface to its kind.
*/

pub mod aead;
pub mod kem;
pub mod primitive;
pub mod signature;

// Re-export core traits for easier access
pub use aead::Aead;
pub use kem::{KemDecapsulate, KemEncapsulate};
pub use primitive::Primitive;
pub use signature::{PublicKeySign, PublicKeyVerify};
