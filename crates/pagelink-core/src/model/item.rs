use pagelink_core_types::ContentId;
use serde::{Deserialize, Serialize};

/// Minimal projection of a content item
///
/// Carries only the fields link generation and deletion protection need:
/// the stable identifier, the display name used as fallback link text, and
/// the hierarchical path used in protection diagnostics. The full item
/// stays with the content-tree store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier, independent of tree position
    pub id: ContentId,

    /// Human-readable display name
    pub display_name: String,

    /// Hierarchical path in the content tree (e.g. "/home/about")
    pub path: String,
}

impl ContentItem {
    /// Create a new ContentItem projection
    pub fn new(id: ContentId, display_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            path: path.into(),
        }
    }
}
