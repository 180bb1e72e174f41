use serde::{Deserialize, Serialize};

/// Resolved link: public relative URL plus display text
///
/// Immutable value object, constructed once per resolution and discarded
/// after rendering. Invariant: `url` is never empty — the resolver
/// represents absence as "not found", never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResult {
    /// Public relative URL of the target item
    pub url: String,

    /// Display text, defaulting to the item's display name
    pub text: String,
}

impl LinkResult {
    /// Create a new LinkResult
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}
