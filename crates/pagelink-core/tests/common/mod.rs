//! Shared fixtures for the pagelink-core integration suites

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pagelink_core::diagnostics::{CapturingEventLog, DedupEventLog};
use pagelink_core::errors::{LinkError, Result};
use pagelink_core::model::ContentItem;
use pagelink_core::ports::{ContentLookup, UrlResolver};
use pagelink_core::render::LinkRenderer;
use pagelink_core::resolver::LinkResolver;
use pagelink_core::tree::ContentTree;
use pagelink_core_types::ContentId;

/// Build a content item with a fresh identifier
pub fn item(display_name: &str, path: &str) -> ContentItem {
    ContentItem::new(ContentId::new(), display_name, path)
}

/// Build a tree seeded with one routed "About Us" page
pub fn seeded_tree() -> (Arc<ContentTree>, ContentItem) {
    let tree = Arc::new(ContentTree::new());
    let about = item("About Us", "/home/about");
    tree.insert(about.clone(), "/about");
    (tree, about)
}

/// Resolver wired to one tree for both ports
pub fn tree_resolver(tree: &Arc<ContentTree>) -> LinkResolver {
    LinkResolver::new(tree.clone(), tree.clone())
}

/// Renderer over a tree, a capturing sink, and the once-per-code policy
pub fn tree_renderer(tree: &Arc<ContentTree>) -> (LinkRenderer, Arc<CapturingEventLog>) {
    let capture = Arc::new(CapturingEventLog::new());
    let log = Arc::new(DedupEventLog::new(capture.clone()));
    (LinkRenderer::new(tree_resolver(tree), log), capture)
}

/// URL port that always faults
pub struct FailingUrlResolver;

impl UrlResolver for FailingUrlResolver {
    fn resolve_url(&self, item: &ContentItem) -> Result<String> {
        Err(LinkError::UrlResolutionFailed {
            content_id: item.id.to_string(),
            reason: "oops".to_string(),
        })
    }
}

/// URL port that resolves to the empty string (invariant violation)
pub struct EmptyUrlResolver;

impl UrlResolver for EmptyUrlResolver {
    fn resolve_url(&self, _item: &ContentItem) -> Result<String> {
        Ok(String::new())
    }
}

/// Lookup port returning a fixed item list, counting every retrieval
pub struct FixedLookup {
    items: Vec<ContentItem>,
    calls: AtomicUsize,
}

impl FixedLookup {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentLookup for FixedLookup {
    async fn retrieve(&self, _id: &ContentId, _cache_key: &str) -> Result<Vec<ContentItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }
}
