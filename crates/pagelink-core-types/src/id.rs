//! Stable content-item identifiers
//!
//! A `ContentId` addresses a content item independently of its position in
//! the content tree. It is assigned once and never changes, which is what
//! makes it safe to reference from application code.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, opaque identifier for a content item
///
/// Compared by value equality. The string form is a UUID, but callers must
/// treat it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    /// Generate a new random ContentId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization and fixtures)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for ContentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
