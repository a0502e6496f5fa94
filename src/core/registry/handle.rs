/*!
Caller-facing handle on one key manager.

A `KeyManagerHandle` takes and returns serialized protocol messages only.
Each operation decodes its input first, so format errors surface as
`MalformedInput` and are never confused with what the algorithm reports.
The identifier of decoded input is checked against the bound manager
before anything is delegated to it.
*/

use std::fmt;
use std::sync::Arc;

use prost::Message;

use crate::core::crypto::traits::Primitive;
use crate::core::crypto::types::errors::CryptoError;
use crate::core::crypto_format::prefix_size;
use crate::core::error::{Error, Result, malformed};
use crate::core::keys::KeyManager;
use crate::core::keys::manager::validate_generated;
use crate::core::proto::{KeyData, KeyTemplate, OutputPrefixType};
use crate::core::registry::manager::{Registry, global};

/// Handle on the key manager registered for one identifier and primitive kind
pub struct KeyManagerHandle<P: Primitive + ?Sized> {
    key_manager: Arc<dyn KeyManager<P>>,
}

impl<P: Primitive + ?Sized> KeyManagerHandle<P> {
    /// Wrap a key manager
    pub fn new(key_manager: Arc<dyn KeyManager<P>>) -> Self {
        Self { key_manager }
    }

    /// Get the handle for `type_url` from the process-wide registry
    pub fn from_registry(type_url: &str) -> Result<Self> {
        Self::lookup(global()?, type_url)
    }

    /// Get the handle for `type_url` from a specific registry
    pub fn lookup(registry: &Registry, type_url: &str) -> Result<Self> {
        Ok(Self::new(registry.get_key_manager::<P>(type_url)?))
    }

    /// Build a primitive from a serialized `KeyData`
    pub fn primitive(&self, serialized_key_data: &[u8]) -> Result<Box<P>> {
        let key_data = decode_key_data(serialized_key_data)?;
        self.check_key_type(&key_data.type_url)?;

        self.key_manager
            .primitive(&key_data)
            .map_err(Error::PrimitiveConstruction)
    }

    /// Generate a new key from a serialized `KeyTemplate`, returning a serialized `KeyData`
    pub fn new_key_data(&self, serialized_key_template: &[u8]) -> Result<Vec<u8>> {
        let template = decode_key_template(serialized_key_template)?;
        self.check_key_type(&template.type_url)?;

        let key_data = self
            .key_manager
            .key_factory()
            .new_key_data(&template.value)
            .and_then(|key_data| {
                validate_generated(self.key_manager.key_type(), &key_data)?;
                Ok(key_data)
            })
            .map_err(Error::KeyGeneration)?;

        Ok(key_data.encode_to_vec())
    }

    /// Length of the output prefix keys generated from a serialized `KeyTemplate` will carry
    pub fn output_prefix_size(&self, serialized_key_template: &[u8]) -> Result<usize> {
        let template = decode_key_template(serialized_key_template)?;
        self.check_key_type(&template.type_url)?;

        prefix_size(template.output_prefix_type())
            .map_err(|e| malformed("KeyTemplate", e))
    }

    /// Derive the serialized public `KeyData` of a serialized private `KeyData`
    pub fn public_key_data(&self, serialized_private_key_data: &[u8]) -> Result<Vec<u8>> {
        let factory = self.key_manager.key_factory().as_private().ok_or_else(|| {
            Error::UnsupportedOperation(format!(
                "KeyManager for type '{}' does not have a PrivateKeyFactory",
                self.key_type()
            ))
        })?;

        let private_key_data = decode_key_data(serialized_private_key_data)?;
        self.check_key_type(&private_key_data.type_url)?;

        let public_key_data = factory
            .public_key_data(&private_key_data.value)
            .and_then(|key_data| match key_data.missing_field() {
                Some(field) => Err(CryptoError::UnexpectedKeyData(format!("missing {field}"))),
                None => Ok(key_data),
            })
            .map_err(Error::Derivation)?;

        Ok(public_key_data.encode_to_vec())
    }

    /// The identifier of the bound key manager
    pub fn key_type(&self) -> &str {
        self.key_manager.key_type().as_str()
    }

    fn check_key_type(&self, type_url: &str) -> Result<()> {
        if self.key_manager.does_support(type_url) {
            return Ok(());
        }
        log::warn!(
            "Rejected key type '{}' at manager for '{}'",
            type_url,
            self.key_type()
        );
        Err(Error::TypeMismatch {
            expected: self.key_type().to_owned(),
            actual: type_url.to_owned(),
        })
    }
}

impl<P: Primitive + ?Sized> Clone for KeyManagerHandle<P> {
    fn clone(&self) -> Self {
        Self {
            key_manager: Arc::clone(&self.key_manager),
        }
    }
}

impl<P: Primitive + ?Sized> fmt::Debug for KeyManagerHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyManagerHandle")
            .field("key_type", &self.key_type())
            .field("primitive", &P::KIND)
            .finish()
    }
}

// A record that decodes but lacks its identifier or metadata is as
// unusable as one that does not decode at all.

fn decode_key_data(bytes: &[u8]) -> Result<KeyData> {
    let key_data = KeyData::decode(bytes).map_err(|e| malformed("KeyData", e))?;
    match key_data.missing_field() {
        Some(field) => Err(malformed("KeyData", format!("missing {field}"))),
        None => Ok(key_data),
    }
}

fn decode_key_template(bytes: &[u8]) -> Result<KeyTemplate> {
    let template = KeyTemplate::decode(bytes).map_err(|e| malformed("KeyTemplate", e))?;
    if template.type_url.is_empty() {
        return Err(malformed("KeyTemplate", "missing type_url"));
    }
    match OutputPrefixType::try_from(template.output_prefix_type) {
        Ok(OutputPrefixType::UnknownPrefix) | Err(_) => {
            Err(malformed("KeyTemplate", "missing output_prefix_type"))
        }
        Ok(_) => Ok(template),
    }
}
