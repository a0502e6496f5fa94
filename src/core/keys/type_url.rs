/*!
Key type identifiers.
*/

use std::borrow::Borrow;
use std::fmt;

use crate::core::error::{Error, Result};

/// Opaque, non-empty name of one algorithm and parameter family.
///
/// This is the sole dispatch key of the registry. Two identifiers are equal
/// only if their bytes are equal; there is no normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyTypeUrl(String);

impl KeyTypeUrl {
    /// Create an identifier, rejecting the empty string
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.is_empty() {
            return Err(Error::MalformedInput("key type identifier is empty".into()));
        }
        Ok(Self(url))
    }

    /// Identifier of a built-in key type
    pub(crate) fn from_static(url: &'static str) -> Self {
        debug_assert!(!url.is_empty());
        Self(url.to_owned())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison against a raw identifier
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for KeyTypeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyTypeUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for KeyTypeUrl {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for KeyTypeUrl {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
