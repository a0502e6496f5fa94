/*!
# PQC Key Manager

A registry of key managers for post-quantum and classical cryptographic
primitives.

## Overview

Callers hand this library serialized key templates and serialized keys.
The registry finds the key manager bound to the key type identifier, and
the manager handle turns the bytes into:

- new keys generated from a template
- live primitives (AEAD, signer, verifier, KEM sender and receiver)
- public keys derived from private keys

Built-in key types:

- ChaCha20-Poly1305 and AES-GCM for authenticated encryption
- CRYSTALS-Dilithium3 for digital signatures
- CRYSTALS-Kyber768 for key encapsulation

## Example

```no_run
use pqc_keymanager::{KeyManagerHandle, Aead, templates, type_urls};
use prost::Message;

let handle = KeyManagerHandle::<dyn Aead>::from_registry(type_urls::CHACHA20_POLY1305)?;
let key_data = handle.new_key_data(&templates::chacha20_poly1305().encode_to_vec())?;
let aead = handle.primitive(&key_data)?;
let ciphertext = aead.encrypt(b"secret", b"context")?;
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::error::{CryptoError, Error, ErrorKind, Result};
pub use crate::core::constants::{KEY_VERSION, TYPE_URL_PREFIX, VERSION, type_urls};
pub use crate::core::crypto::{
    Aead, KemDecapsulate, KemEncapsulate, Primitive, PrimitiveKind, PublicKeySign,
    PublicKeyVerify, RegistryConfig,
};
pub use crate::core::crypto_format::{NON_RAW_PREFIX_SIZE, RAW_PREFIX_SIZE, output_prefix, prefix_size};
pub use crate::core::keys::{KeyFactory, KeyManager, KeyTypeManager, KeyTypeUrl, PrivateKeyFactory, templates};
pub use crate::core::proto::{KeyData, KeyMaterialType, KeyTemplate, OutputPrefixType};

// Re-export the registry and manager handle
pub use crate::core::registry::{KeyManagerHandle, Registry, global, install};
