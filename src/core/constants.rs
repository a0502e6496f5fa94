/*!
Constants for the key manager core.

This module holds the identifiers of the built-in key types and the key
message version they are written with.
*/

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version written into, and accepted from, every built-in key message
pub const KEY_VERSION: u32 = 0;

/// Prefix shared by all built-in key type identifiers
pub const TYPE_URL_PREFIX: &str = "type.pqc-keymanager/";

/// Key type identifiers of the built-in managers
pub mod type_urls {
    /// ChaCha20-Poly1305 AEAD key
    pub const CHACHA20_POLY1305: &str = "type.pqc-keymanager/ChaCha20Poly1305Key";

    /// AES-GCM AEAD key (128 or 256 bit)
    pub const AES_GCM: &str = "type.pqc-keymanager/AesGcmKey";

    /// Dilithium3 signing key
    pub const DILITHIUM3_PRIVATE: &str = "type.pqc-keymanager/Dilithium3PrivateKey";

    /// Dilithium3 verification key
    pub const DILITHIUM3_PUBLIC: &str = "type.pqc-keymanager/Dilithium3PublicKey";

    /// Kyber768 decapsulation key
    pub const KYBER768_PRIVATE: &str = "type.pqc-keymanager/Kyber768PrivateKey";

    /// Kyber768 encapsulation key
    pub const KYBER768_PUBLIC: &str = "type.pqc-keymanager/Kyber768PublicKey";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_urls_share_prefix() {
        for url in [
            type_urls::CHACHA20_POLY1305,
            type_urls::AES_GCM,
            type_urls::DILITHIUM3_PRIVATE,
            type_urls::DILITHIUM3_PUBLIC,
            type_urls::KYBER768_PRIVATE,
            type_urls::KYBER768_PUBLIC,
        ] {
            assert!(url.starts_with(TYPE_URL_PREFIX));
            assert!(url.len() > TYPE_URL_PREFIX.len());
        }
    }
}
