//! Raw screenplay text.

use serde::{Deserialize, Serialize};

/// A screenplay as loaded from disk or pasted in, before any segmentation.
///
/// No structure is assumed beyond the character content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct Script(String);

impl Script {
    /// Wrap raw script text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The full script text.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Whether the script has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Length of the script in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Script {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Script {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for Script {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
