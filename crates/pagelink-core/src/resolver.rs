//! Link resolution: stable identifier → `LinkResult`
//!
//! Orchestrates the lookup and URL ports into a single resolve call. The
//! two failure shapes stay distinct: "no matching item" is `Ok(None)`,
//! while "item found but its URL could not be computed" is an error —
//! callers must be able to tell them apart.

use std::sync::Arc;

use pagelink_core_types::ContentId;

use crate::errors::{LinkError, Result};
use crate::model::{ContentItem, LinkResult};
use crate::ports::{ContentLookup, UrlResolver};

/// Fixed namespace prefix for lookup cache keys
pub const CACHE_KEY_NAMESPACE: &str = "page-link";

/// Derive the lookup cache key for one identifier
///
/// Deterministic, so repeated resolutions for the same identifier are
/// served from the lookup layer's cache without re-querying the store.
/// Keys for distinct identifiers never collide.
pub fn cache_key(id: &ContentId) -> String {
    format!("{}|{}", CACHE_KEY_NAMESPACE, id)
}

/// Resolves a content identifier into a renderable link
pub struct LinkResolver {
    lookup: Arc<dyn ContentLookup>,
    urls: Arc<dyn UrlResolver>,
}

impl LinkResolver {
    /// Create a resolver over the given ports
    pub fn new(lookup: Arc<dyn ContentLookup>, urls: Arc<dyn UrlResolver>) -> Self {
        Self { lookup, urls }
    }

    /// Resolve `id` to a link, or `None` when no item matches
    ///
    /// Text defaults to the item's display name; an explicit caller
    /// override is a rendering-time concern and is applied by the
    /// renderer, not here.
    ///
    /// # Errors
    ///
    /// Returns `UrlResolutionFailed` when the item exists but its URL
    /// could not be computed. Not-found is `Ok(None)`, never an error.
    pub async fn resolve(&self, id: &ContentId) -> Result<Option<LinkResult>> {
        let items = self.lookup.retrieve(id, &cache_key(id)).await?;

        // 0 or 1 expected; with more than one the first wins, silently.
        let Some(item) = items.first() else {
            return Ok(None);
        };

        let url = self.resolve_url(item)?;
        Ok(Some(LinkResult::new(url, item.display_name.clone())))
    }

    /// Fallback display text for an item (its display name)
    pub fn fallback_link_text(&self, item: &ContentItem) -> String {
        item.display_name.clone()
    }

    fn resolve_url(&self, item: &ContentItem) -> Result<String> {
        let url = self.urls.resolve_url(item).map_err(|err| match err {
            already @ LinkError::UrlResolutionFailed { .. } => already,
            other => LinkError::UrlResolutionFailed {
                content_id: item.id.to_string(),
                reason: other.to_string(),
            },
        })?;

        // An empty URL would be indistinguishable from "no link"; surface
        // it as a fault instead.
        if url.is_empty() {
            return Err(LinkError::UrlResolutionFailed {
                content_id: item.id.to_string(),
                reason: "resolved URL is empty".to_string(),
            });
        }

        Ok(url)
    }
}
