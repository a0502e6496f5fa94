/*!
Signature algorithm implementations.

This module provides implementations of signature algorithms.
*/

pub mod dilithium;

pub use dilithium::{DilithiumSigner, DilithiumVerifier};
