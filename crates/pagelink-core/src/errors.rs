//! Error taxonomy for link resolution, rendering, and deletion protection
//!
//! Four conditions matter to callers, and they must stay distinguishable:
//!
//! - `MissingTarget`: the template supplied no identifier (caller error)
//! - `TargetMissing`: the identifier matched no item (data/reference error)
//! - `UrlResolutionFailed`: the item exists but its URL could not be
//!   computed (downstream/runtime error)
//! - `DeletionBlocked`: a protected item was about to be deleted (policy
//!   violation)
//!
//! None of these abort a page render; a broken link degrades to "anchor
//! left as supplied". `DeletionBlocked` is fatal to the one delete
//! operation it vetoes.

use thiserror::Error;

/// Result type alias using LinkError
pub type Result<T> = std::result::Result<T, LinkError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// handling, diagnostics dedup keys, and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkErrorKind {
    // Render-time reference errors
    MissingTarget,
    TargetMissing,
    UrlResolutionFailed,

    // Deletion protection
    DeletionBlocked,

    // Store access
    ItemNotFound,
}

impl LinkErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LinkErrorKind::MissingTarget => "ERR_MISSING_TARGET",
            LinkErrorKind::TargetMissing => "ERR_TARGET_MISSING",
            LinkErrorKind::UrlResolutionFailed => "ERR_URL_RESOLUTION_FAILED",
            LinkErrorKind::DeletionBlocked => "ERR_DELETION_BLOCKED",
            LinkErrorKind::ItemNotFound => "ERR_ITEM_NOT_FOUND",
        }
    }
}

/// Error taxonomy for pagelink operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkError {
    /// No target identifier was supplied to the renderer
    #[error("No link target identifier was supplied")]
    MissingTarget,

    /// The identifier is valid but no content item matches it
    #[error("No content item matches identifier {content_id}")]
    TargetMissing { content_id: String },

    /// The item exists but computing its public URL faulted
    #[error("URL resolution failed for content item {content_id}: {reason}")]
    UrlResolutionFailed { content_id: String, reason: String },

    /// A delete attempt on a linkable item was vetoed
    #[error("Cannot delete linkable content item [{path}] ({content_id}), as it might be in use. Please first remove the reference in the application code and re-deploy the application.")]
    DeletionBlocked { content_id: String, path: String },

    /// Content item not found in the tree
    #[error("Content item not found: {content_id}")]
    ItemNotFound { content_id: String },
}

impl LinkError {
    /// Get the error kind
    pub fn kind(&self) -> LinkErrorKind {
        match self {
            LinkError::MissingTarget => LinkErrorKind::MissingTarget,
            LinkError::TargetMissing { .. } => LinkErrorKind::TargetMissing,
            LinkError::UrlResolutionFailed { .. } => LinkErrorKind::UrlResolutionFailed,
            LinkError::DeletionBlocked { .. } => LinkErrorKind::DeletionBlocked,
            LinkError::ItemNotFound { .. } => LinkErrorKind::ItemNotFound,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
