/*!
Constants for cryptographic operations.

This module defines key sizes, nonce sizes and HKDF labels used by the
built-in algorithm implementations.
*/

/// ChaCha20-Poly1305 constants
pub mod chacha {
    /// Size of ChaCha20-Poly1305 key in bytes
    pub const KEY_SIZE: usize = 32;

    /// Size of ChaCha20-Poly1305 nonce in bytes
    pub const NONCE_SIZE: usize = 12;

    /// Size of ChaCha20-Poly1305 tag in bytes
    pub const TAG_SIZE: usize = 16;
}

/// AES-GCM constants
pub mod aes {
    /// Size of AES-128-GCM key in bytes
    pub const KEY_SIZE_128: usize = 16;

    /// Size of AES-256-GCM key in bytes
    pub const KEY_SIZE_256: usize = 32;

    /// Size of AES-GCM nonce in bytes
    pub const NONCE_SIZE: usize = 12;

    /// Size of AES-GCM tag in bytes
    pub const TAG_SIZE: usize = 16;
}

/// Kyber constants
pub mod kyber {
    /// Size of Kyber768 public key in bytes
    pub const PUBLIC_KEY_BYTES: usize = 1184;

    /// Size of Kyber768 secret key in bytes
    pub const SECRET_KEY_BYTES: usize = 2400;

    /// Size of Kyber768 ciphertext in bytes
    pub const CIPHERTEXT_BYTES: usize = 1088;

    /// Size of the key derived from the shared secret
    pub const DERIVED_KEY_BYTES: usize = 32;
}

/// Dilithium constants
pub mod dilithium {
    /// Size of Dilithium3 public key in bytes
    pub const PUBLIC_KEY_BYTES: usize = 1952;
}

/// Salt value for HKDF over KEM shared secrets
pub const HKDF_SALT: &[u8] = b"PQC-KEYMANAGER-KEM-SALT";

/// Info value for HKDF over Kyber768 shared secrets
pub const HKDF_INFO_KYBER768: &[u8] = b"PQC-KDF-KYBER768";
