/*!
Algorithm-specific key messages.

Each built-in key type stores one of these in `KeyData::value`; each key
format goes in `KeyTemplate::value`. Every key message carries a
`version`, currently always 0.
*/

use prost::Message;

/// Key format for ChaCha20-Poly1305 (no parameters)
#[derive(Clone, PartialEq, Message)]
pub struct ChaCha20Poly1305KeyFormat {}

/// ChaCha20-Poly1305 key
#[derive(Clone, PartialEq, Message)]
pub struct ChaCha20Poly1305Key {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub key_value: Vec<u8>,
}

/// Key format for AES-GCM
#[derive(Clone, PartialEq, Message)]
pub struct AesGcmKeyFormat {
    /// Key size in bytes, 16 or 32
    #[prost(uint32, tag = "2")]
    pub key_size: u32,
    #[prost(uint32, tag = "3")]
    pub version: u32,
}

/// AES-GCM key
#[derive(Clone, PartialEq, Message)]
pub struct AesGcmKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(bytes = "vec", tag = "3")]
    pub key_value: Vec<u8>,
}

/// Key format for Dilithium3 (no parameters)
#[derive(Clone, PartialEq, Message)]
pub struct DilithiumKeyFormat {}

/// Dilithium3 public key
#[derive(Clone, PartialEq, Message)]
pub struct DilithiumPublicKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub key_value: Vec<u8>,
}

/// Dilithium3 private key with its public half embedded
#[derive(Clone, PartialEq, Message)]
pub struct DilithiumPrivateKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(message, optional, tag = "2")]
    pub public_key: Option<DilithiumPublicKey>,
    #[prost(bytes = "vec", tag = "3")]
    pub key_value: Vec<u8>,
}

/// Key format for Kyber768 (no parameters)
#[derive(Clone, PartialEq, Message)]
pub struct KyberKeyFormat {}

/// Kyber768 public key
#[derive(Clone, PartialEq, Message)]
pub struct KyberPublicKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub key_value: Vec<u8>,
}

/// Kyber768 private key with its public half embedded
#[derive(Clone, PartialEq, Message)]
pub struct KyberPrivateKey {
    #[prost(uint32, tag = "1")]
    pub version: u32,
    #[prost(message, optional, tag = "2")]
    pub public_key: Option<KyberPublicKey>,
    #[prost(bytes = "vec", tag = "3")]
    pub key_value: Vec<u8>,
}
