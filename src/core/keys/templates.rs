/*!
Key template presets for the built-in key types.

Each preset comes in a TINK-prefixed flavour and a `_raw` flavour whose
keys produce unprefixed output.
*/

use prost::Message;

use crate::core::constants::{KEY_VERSION, type_urls};
use crate::core::crypto::types::constants::aes;
use crate::core::proto::keys::{
    AesGcmKeyFormat, ChaCha20Poly1305KeyFormat, DilithiumKeyFormat, KyberKeyFormat,
};
use crate::core::proto::{KeyTemplate, OutputPrefixType};

/// ChaCha20-Poly1305 with TINK prefix
pub fn chacha20_poly1305() -> KeyTemplate {
    chacha20_poly1305_with(OutputPrefixType::Tink)
}

/// ChaCha20-Poly1305 without prefix
pub fn chacha20_poly1305_raw() -> KeyTemplate {
    chacha20_poly1305_with(OutputPrefixType::Raw)
}

fn chacha20_poly1305_with(prefix: OutputPrefixType) -> KeyTemplate {
    KeyTemplate::new(
        type_urls::CHACHA20_POLY1305,
        ChaCha20Poly1305KeyFormat {}.encode_to_vec(),
        prefix,
    )
}

/// AES-128-GCM with TINK prefix
pub fn aes128_gcm() -> KeyTemplate {
    aes_gcm_with(aes::KEY_SIZE_128, OutputPrefixType::Tink)
}

/// AES-256-GCM with TINK prefix
pub fn aes256_gcm() -> KeyTemplate {
    aes_gcm_with(aes::KEY_SIZE_256, OutputPrefixType::Tink)
}

/// AES-256-GCM without prefix
pub fn aes256_gcm_raw() -> KeyTemplate {
    aes_gcm_with(aes::KEY_SIZE_256, OutputPrefixType::Raw)
}

fn aes_gcm_with(key_size: usize, prefix: OutputPrefixType) -> KeyTemplate {
    let format = AesGcmKeyFormat {
        key_size: key_size as u32,
        version: KEY_VERSION,
    };
    KeyTemplate::new(type_urls::AES_GCM, format.encode_to_vec(), prefix)
}

/// Dilithium3 signing key with TINK prefix
pub fn dilithium3() -> KeyTemplate {
    KeyTemplate::new(
        type_urls::DILITHIUM3_PRIVATE,
        DilithiumKeyFormat {}.encode_to_vec(),
        OutputPrefixType::Tink,
    )
}

/// Dilithium3 signing key without prefix
pub fn dilithium3_raw() -> KeyTemplate {
    KeyTemplate::new(
        type_urls::DILITHIUM3_PRIVATE,
        DilithiumKeyFormat {}.encode_to_vec(),
        OutputPrefixType::Raw,
    )
}

/// Kyber768 decapsulation key; KEM output is never prefixed
pub fn kyber768() -> KeyTemplate {
    KeyTemplate::new(
        type_urls::KYBER768_PRIVATE,
        KyberKeyFormat {}.encode_to_vec(),
        OutputPrefixType::Raw,
    )
}
