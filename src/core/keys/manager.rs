/*!
Key manager and key factory traits.

A key manager binds one key type identifier to a key factory and to the
logic that turns `KeyData` into a live primitive. Public key derivation is
an optional capability of the factory, reached through `as_private`.
*/

use prost::Message;

use crate::core::crypto::traits::Primitive;
use crate::core::crypto::types::errors::{CryptoError, Result};
use crate::core::keys::type_url::KeyTypeUrl;
use crate::core::proto::KeyData;

/// Creates new keys from serialized key formats
pub trait KeyFactory: Send + Sync {
    /// Generate a fresh key from the `value` of a key template
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData>;

    /// The public-key derivation capability, if this factory has one
    fn as_private(&self) -> Option<&dyn PrivateKeyFactory> {
        None
    }
}

/// A key factory for asymmetric private keys
pub trait PrivateKeyFactory: KeyFactory {
    /// Derive the public key record from the `value` of a private `KeyData`
    fn public_key_data(&self, serialized_private_key: &[u8]) -> Result<KeyData>;
}

/// The part of a key manager that does not depend on the primitive kind
pub trait KeyTypeManager: Send + Sync {
    /// The identifier this manager is bound to
    fn key_type(&self) -> &KeyTypeUrl;

    /// The factory generating keys of this type
    fn key_factory(&self) -> &dyn KeyFactory;

    /// Whether this manager handles the given identifier
    fn does_support(&self, type_url: &str) -> bool {
        self.key_type().matches(type_url)
    }
}

/// A key manager producing primitives of kind `P`
pub trait KeyManager<P: Primitive + ?Sized>: KeyTypeManager {
    /// Build a primitive from a key of this manager's type
    fn primitive(&self, key_data: &KeyData) -> Result<Box<P>>;
}

/// Decode an algorithm-specific key message
pub(crate) fn decode_key<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    Ok(M::decode(bytes)?)
}

/// Check that a freshly generated record names the manager's own key type
/// and carries complete metadata.
pub(crate) fn validate_generated(key_type: &KeyTypeUrl, key_data: &KeyData) -> Result<()> {
    if let Some(field) = key_data.missing_field() {
        return Err(CryptoError::UnexpectedKeyData(format!("missing {field}")));
    }
    if !key_type.matches(&key_data.type_url) {
        log::warn!(
            "Key factory for '{}' produced key data for '{}'",
            key_type,
            key_data.type_url
        );
        return Err(CryptoError::UnexpectedKeyData(format!(
            "expected '{}', got '{}'",
            key_type, key_data.type_url
        )));
    }
    Ok(())
}
