//! Linkable inventory implementations
//!
//! The hosting application decides which identifiers are "linkable";
//! these are the two reference implementations, picked at wiring time.

use std::collections::HashSet;

use pagelink_core_types::ContentId;

use crate::model::ContentItem;
use crate::ports::LinkableInventory;

/// Inventory that protects nothing
///
/// Useful while prototyping, when no identifiers are referenced from code
/// yet and every item may be deleted freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinkableInventory;

impl LinkableInventory for NoLinkableInventory {
    fn is_linkable(&self, _item: &ContentItem) -> bool {
        false
    }
}

/// Inventory backed by an explicit set of protected identifiers
///
/// # Example
/// ```
/// use pagelink_core::inventory::StaticInventory;
/// use pagelink_core::model::ContentItem;
/// use pagelink_core::ports::LinkableInventory;
/// use pagelink_core_types::ContentId;
///
/// let home = ContentItem::new(ContentId::new(), "Home", "/home");
/// let inventory = StaticInventory::with_ids([home.id.clone()]);
///
/// assert!(inventory.is_linkable(&home));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    ids: HashSet<ContentId>,
}

impl StaticInventory {
    /// Create an inventory protecting the given identifier set
    pub fn new(ids: HashSet<ContentId>) -> Self {
        Self { ids }
    }

    /// Create an inventory from any iterator of identifiers
    pub fn with_ids(ids: impl IntoIterator<Item = ContentId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

impl LinkableInventory for StaticInventory {
    fn is_linkable(&self, item: &ContentItem) -> bool {
        self.ids.contains(&item.id)
    }
}
