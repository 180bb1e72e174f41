//! In-memory content tree
//!
//! HashMap-backed stand-in for the hosting system's content store. It
//! implements both resolver ports — `ContentLookup` with a read-through
//! cache keyed by the caller-supplied cache key, and `UrlResolver` over a
//! route table — and hosts the delete lifecycle: registered handlers run
//! synchronously before a delete commits and may cancel it.
//!
//! The underlying query count is observable so tests can assert the
//! cache-hit property (a second resolve for the same identifier must not
//! re-query the store).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pagelink_core_types::ContentId;

use crate::errors::{LinkError, Result};
use crate::guard::{DeleteEvent, DeleteHandler};
use crate::model::ContentItem;
use crate::ports::{ContentLookup, UrlResolver};
use crate::resolver;

/// In-memory content store with routes, lookup cache, and delete hooks
#[derive(Default)]
pub struct ContentTree {
    /// Items by identifier string
    items: Mutex<HashMap<String, ContentItem>>,
    /// Public relative URL per identifier string
    routes: Mutex<HashMap<String, String>>,
    /// Read-through lookup cache, keyed by the caller-supplied cache key
    lookup_cache: Mutex<HashMap<String, Vec<ContentItem>>>,
    /// Number of queries that reached the underlying item map
    query_count: AtomicUsize,
    /// Pre-delete handlers, run in registration order
    delete_handlers: Mutex<Vec<Arc<dyn DeleteHandler>>>,
}

impl ContentTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item and register its public URL
    pub fn insert(&self, item: ContentItem, url: impl Into<String>) {
        let id = item.id.as_str().to_string();
        self.routes
            .lock()
            .expect("routes lock poisoned")
            .insert(id.clone(), url.into());
        self.insert_unrouted(item);
    }

    /// Insert an item without a route (its URL resolution will fault)
    pub fn insert_unrouted(&self, item: ContentItem) {
        let id = item.id.as_str().to_string();
        self.items
            .lock()
            .expect("items lock poisoned")
            .insert(id.clone(), item);
        self.invalidate(&id);
    }

    /// Get an item by identifier
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if no item has that identifier.
    pub fn get(&self, id: &ContentId) -> Result<ContentItem> {
        self.items
            .lock()
            .expect("items lock poisoned")
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| LinkError::ItemNotFound {
                content_id: id.to_string(),
            })
    }

    /// Check whether an item exists
    pub fn contains(&self, id: &ContentId) -> bool {
        self.items
            .lock()
            .expect("items lock poisoned")
            .contains_key(id.as_str())
    }

    /// Number of queries that reached the underlying store (cache misses)
    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::SeqCst)
    }

    /// Register a pre-delete handler
    pub fn register_before_delete(&self, handler: Arc<dyn DeleteHandler>) {
        self.delete_handlers
            .lock()
            .expect("handlers lock poisoned")
            .push(handler);
    }

    /// Delete an item, honoring pre-delete handlers
    ///
    /// Handlers run synchronously on the calling thread, before the
    /// delete commits. A cancelled event leaves the item in place.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the item does not exist, or
    /// `DeletionBlocked` if a handler cancelled the deletion.
    pub fn delete(&self, id: &ContentId) -> Result<()> {
        let item = self.get(id)?;

        let handlers: Vec<Arc<dyn DeleteHandler>> = self
            .delete_handlers
            .lock()
            .expect("handlers lock poisoned")
            .clone();

        let mut event = DeleteEvent::new(&item);
        for handler in &handlers {
            handler.before_delete(&mut event);
            if event.is_cancelled() {
                return Err(LinkError::DeletionBlocked {
                    content_id: item.id.to_string(),
                    path: item.path.clone(),
                });
            }
        }

        self.items
            .lock()
            .expect("items lock poisoned")
            .remove(id.as_str());
        self.routes
            .lock()
            .expect("routes lock poisoned")
            .remove(id.as_str());
        self.invalidate(id.as_str());
        Ok(())
    }

    /// Drop the cached lookup result for one identifier
    fn invalidate(&self, id: &str) {
        let key = resolver::cache_key(&ContentId::from_string(id.to_string()));
        self.lookup_cache
            .lock()
            .expect("cache lock poisoned")
            .remove(&key);
    }
}

#[async_trait]
impl ContentLookup for ContentTree {
    async fn retrieve(&self, id: &ContentId, cache_key: &str) -> Result<Vec<ContentItem>> {
        if let Some(cached) = self
            .lookup_cache
            .lock()
            .expect("cache lock poisoned")
            .get(cache_key)
        {
            return Ok(cached.clone());
        }

        self.query_count.fetch_add(1, Ordering::SeqCst);
        let found: Vec<ContentItem> = self
            .items
            .lock()
            .expect("items lock poisoned")
            .get(id.as_str())
            .cloned()
            .into_iter()
            .collect();

        self.lookup_cache
            .lock()
            .expect("cache lock poisoned")
            .insert(cache_key.to_string(), found.clone());
        Ok(found)
    }
}

impl UrlResolver for ContentTree {
    fn resolve_url(&self, item: &ContentItem) -> Result<String> {
        self.routes
            .lock()
            .expect("routes lock poisoned")
            .get(item.id.as_str())
            .cloned()
            .ok_or_else(|| LinkError::UrlResolutionFailed {
                content_id: item.id.to_string(),
                reason: "no route registered for item".to_string(),
            })
    }
}
