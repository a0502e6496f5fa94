/*!
Implementations of cryptographic algorithms.

This module provides concrete implementations of the primitive
interfaces, each bound to its key at construction time.
*/

// Key encapsulation mechanisms
pub mod kem;

// Signature algorithms
pub mod signatures;

// Symmetric encryption algorithms
pub mod symmetric;
