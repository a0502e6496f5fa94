/*!
Registry of key managers.

The registry has two phases. While it is being built (`&mut self`) key
managers register under their identifier; once it is shared, only `&self`
queries remain, so lookups never race with registration. The process-wide
instance lives in a write-once cell: after installation, reads take no lock.
*/

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::crypto::traits::{
    Aead, KemDecapsulate, KemEncapsulate, Primitive, PublicKeySign, PublicKeyVerify,
};
use crate::core::crypto::types::algorithms::PrimitiveKind;
use crate::core::crypto::types::config::RegistryConfig;
use crate::core::error::{Error, Result};
use crate::core::keys::managers::{
    ChaCha20Poly1305KeyManager, DilithiumPrivateKeyManager, DilithiumPublicKeyManager,
    KyberPrivateKeyManager, KyberPublicKeyManager,
};
use crate::core::keys::manager::validate_generated;
use crate::core::keys::{KeyManager, KeyTypeManager, KeyTypeUrl};
use crate::core::proto::{KeyData, KeyTemplate};

struct RegistryEntry {
    kind: PrimitiveKind,
    /// Kind-erased view, for factory access
    key_manager: Arc<dyn KeyTypeManager>,
    /// Holds an `Arc<dyn KeyManager<P>>` for the `P` whose kind is `kind`
    typed: Box<dyn Any + Send + Sync>,
}

/// Map from key type identifier to the key manager registered for it
#[derive(Default)]
pub struct Registry {
    entries: HashMap<KeyTypeUrl, RegistryEntry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in key manager
    pub fn with_defaults() -> Result<Self> {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create a registry holding the built-in families selected by `config`
    pub fn with_config(config: &RegistryConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::Registration(e.to_string()))?;

        let mut registry = Self::new();

        if config.aead {
            registry.register::<dyn Aead, _>(ChaCha20Poly1305KeyManager::new())?;

            #[cfg(feature = "aes-gcm")]
            registry.register::<dyn Aead, _>(crate::core::keys::managers::AesGcmKeyManager::new())?;
        }

        if config.signature {
            registry.register::<dyn PublicKeySign, _>(DilithiumPrivateKeyManager::new())?;
            registry.register::<dyn PublicKeyVerify, _>(DilithiumPublicKeyManager::new())?;
        }

        if config.kem {
            registry.register::<dyn KemDecapsulate, _>(KyberPrivateKeyManager::new())?;
            registry.register::<dyn KemEncapsulate, _>(KyberPublicKeyManager::new())?;
        }

        Ok(registry)
    }

    /// Register a key manager for primitive kind `P`.
    ///
    /// Each identifier can be registered once; a second registration is
    /// refused rather than replacing the first.
    pub fn register<P, M>(&mut self, manager: M) -> Result<()>
    where
        P: Primitive + ?Sized,
        M: KeyManager<P> + 'static,
    {
        let key_type = manager.key_type().clone();
        if self.entries.contains_key(&key_type) {
            return Err(Error::Registration(format!(
                "a key manager for '{key_type}' is already registered"
            )));
        }

        let manager = Arc::new(manager);
        let typed: Arc<dyn KeyManager<P>> = manager.clone();
        let entry = RegistryEntry {
            kind: P::KIND,
            key_manager: manager,
            typed: Box::new(typed),
        };

        log::debug!("Registered key manager for '{}' ({})", key_type, P::KIND);
        self.entries.insert(key_type, entry);
        Ok(())
    }

    /// Look up the key manager for `type_url` that produces primitives of kind `P`
    pub fn get_key_manager<P>(&self, type_url: &str) -> Result<Arc<dyn KeyManager<P>>>
    where
        P: Primitive + ?Sized,
    {
        let entry = self.entry(type_url)?;
        if entry.kind != P::KIND {
            log::warn!(
                "Key manager for '{}' produces {}, not {}",
                type_url,
                entry.kind,
                P::KIND
            );
            return Err(Error::NotFound(type_url.to_owned()));
        }

        entry
            .typed
            .downcast_ref::<Arc<dyn KeyManager<P>>>()
            .cloned()
            .ok_or_else(|| Error::NotFound(type_url.to_owned()))
    }

    /// The kind-erased key manager for `type_url`
    pub fn key_type_manager(&self, type_url: &str) -> Result<Arc<dyn KeyTypeManager>> {
        Ok(self.entry(type_url)?.key_manager.clone())
    }

    /// Whether a key manager is registered for `type_url`
    pub fn contains(&self, type_url: &str) -> bool {
        self.entries.contains_key(type_url)
    }

    /// The primitive kind registered for `type_url`
    pub fn primitive_kind(&self, type_url: &str) -> Option<PrimitiveKind> {
        self.entries.get(type_url).map(|entry| entry.kind)
    }

    /// All registered identifiers, sorted
    pub fn key_types(&self) -> Vec<String> {
        let mut key_types: Vec<String> =
            self.entries.keys().map(|url| url.as_str().to_owned()).collect();
        key_types.sort();
        key_types
    }

    /// Number of registered key managers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a primitive of kind `P` from a key, dispatching on its identifier
    pub fn primitive<P>(&self, key_data: &KeyData) -> Result<Box<P>>
    where
        P: Primitive + ?Sized,
    {
        self.get_key_manager::<P>(&key_data.type_url)?
            .primitive(key_data)
            .map_err(Error::PrimitiveConstruction)
    }

    /// Generate a key from a template, dispatching on its identifier
    pub fn new_key_data(&self, template: &KeyTemplate) -> Result<KeyData> {
        let key_manager = &self.entry(&template.type_url)?.key_manager;
        key_manager
            .key_factory()
            .new_key_data(&template.value)
            .and_then(|key_data| {
                validate_generated(key_manager.key_type(), &key_data)?;
                Ok(key_data)
            })
            .map_err(Error::KeyGeneration)
    }

    /// Derive the public key of a private key, dispatching on its identifier
    pub fn public_key_data(&self, private_key_data: &KeyData) -> Result<KeyData> {
        let entry = self.entry(&private_key_data.type_url)?;
        let factory = entry.key_manager.key_factory().as_private().ok_or_else(|| {
            Error::UnsupportedOperation(format!(
                "KeyManager for type '{}' does not have a PrivateKeyFactory",
                private_key_data.type_url
            ))
        })?;

        factory
            .public_key_data(&private_key_data.value)
            .map_err(Error::Derivation)
    }

    fn entry(&self, type_url: &str) -> Result<&RegistryEntry> {
        self.entries.get(type_url).ok_or_else(|| {
            log::warn!("No key manager registered for '{}'", type_url);
            Error::NotFound(type_url.to_owned())
        })
    }
}

// Global registry instance
static GLOBAL: OnceCell<Registry> = OnceCell::new();

/// Install the process-wide registry.
///
/// Must happen before the first call to `global`; a second installation is
/// refused.
pub fn install(registry: Registry) -> Result<()> {
    let count = registry.len();
    GLOBAL.set(registry).map_err(|_| {
        Error::Registration("the global registry is already installed".into())
    })?;
    log::debug!("Installed global registry with {} key managers", count);
    Ok(())
}

/// The process-wide registry, installing the default one on first use
pub fn global() -> Result<&'static Registry> {
    GLOBAL.get_or_try_init(Registry::with_defaults)
}
