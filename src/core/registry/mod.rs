/*!
Registry of key managers and the caller-facing manager handle.

This module provides the process-wide lookup table from key type
identifier to key manager, and the handle callers drive with serialized
templates and keys.
*/

pub mod handle;
pub mod manager;

// Re-export registry functions
pub use handle::KeyManagerHandle;
pub use manager::{Registry, global, install};
