//! Ports consumed by the link resolution and protection core
//!
//! Each port is a one-method trait selected at process wiring time
//! (strategy pattern). The core consumes these contracts; it does not
//! reimplement the content-tree store, the URL routing layer, or the
//! hosting application's notion of "linkable".

use async_trait::async_trait;
use pagelink_core_types::ContentId;

use crate::errors::Result;
use crate::model::ContentItem;

/// Lookup port into the content-tree store
///
/// `cache_key` scopes the lookup layer's read-through cache to one
/// identifier; repeated retrievals with the same key must be served from
/// cache without re-querying the underlying store. Zero or one item is
/// expected; if more than one comes back the caller takes the first,
/// silently.
#[async_trait]
pub trait ContentLookup: Send + Sync {
    /// Retrieve the content items matching `id`
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store query fails.
    async fn retrieve(&self, id: &ContentId, cache_key: &str) -> Result<Vec<ContentItem>>;
}

/// URL computation port
pub trait UrlResolver: Send + Sync {
    /// Compute the public relative URL of `item`
    ///
    /// # Errors
    ///
    /// Returns an error when the URL cannot be computed (missing route,
    /// routing fault). The resolver surfaces this as `UrlResolutionFailed`,
    /// never as "not found".
    fn resolve_url(&self, item: &ContentItem) -> Result<String>;
}

/// Pluggable inventory of identifiers protected from deletion
///
/// Pure predicate over the item's identity; replaceable by the hosting
/// application.
pub trait LinkableInventory: Send + Sync {
    /// Check whether `item` is a registered linkable target
    fn is_linkable(&self, item: &ContentItem) -> bool;
}
