use pagelink_core_types::ContentId;
use serde::{Deserialize, Serialize};

/// Caller-supplied configuration for one render request
///
/// Mirrors the attribute surface of the hosting anchor element: the target
/// identifier (required for a render to do anything), an optional explicit
/// text override, and optional ordered query parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderDirective {
    /// Target content identifier; `None` means the caller supplied nothing
    pub target: Option<ContentId>,

    /// Explicit link text override; blank values are ignored at render time
    pub text: Option<String>,

    /// Ordered query parameters appended to the resolved URL
    pub query_params: Vec<(String, String)>,
}

impl RenderDirective {
    /// Create a directive with no target (renders to a no-op)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a directive for the given target identifier
    pub fn for_target(target: ContentId) -> Self {
        Self {
            target: Some(target),
            text: None,
            query_params: Vec::new(),
        }
    }

    /// Set the explicit text override
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append one query parameter (insertion order is preserved)
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Get the text override if it is present and non-blank
    pub fn effective_text_override(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}
