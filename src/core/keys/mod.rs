/*!
Key types, key managers and key templates.

This module provides the key type identifier, the manager and factory
traits, the built-in managers and the template presets for them.
*/

pub mod manager;
pub mod managers;
pub mod templates;
pub mod type_url;

pub use manager::{KeyFactory, KeyManager, KeyTypeManager, PrivateKeyFactory};
pub use type_url::KeyTypeUrl;
