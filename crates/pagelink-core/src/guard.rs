//! Deletion protection for linkable content items
//!
//! The guard subscribes to the pre-delete lifecycle hook of the content
//! store. If the inventory marks the item as linkable, the deletion is
//! cancelled and one error diagnostic is emitted — a hard veto, not a
//! retryable condition. The guard runs synchronously on the deleting
//! thread; it must finish before the underlying delete proceeds, else the
//! veto has no effect.

use std::sync::Arc;

use crate::diagnostics::{codes, Diagnostic, EventLog};
use crate::errors::LinkError;
use crate::model::{ContentItem, ProtectionDecision};
use crate::ports::LinkableInventory;

/// Component name used in guard diagnostics
pub const COMPONENT: &str = "DeletionGuard";

/// Pre-delete lifecycle event, fired before the delete is committed
///
/// Cancelling the event vetoes the deletion.
#[derive(Debug)]
pub struct DeleteEvent<'a> {
    item: &'a ContentItem,
    cancelled: bool,
}

impl<'a> DeleteEvent<'a> {
    /// Create an event for the item about to be deleted
    pub fn new(item: &'a ContentItem) -> Self {
        Self {
            item,
            cancelled: false,
        }
    }

    /// The item about to be deleted
    pub fn item(&self) -> &ContentItem {
        self.item
    }

    /// Veto the deletion
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the deletion has been vetoed
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Handler invoked synchronously before a deletion is committed
pub trait DeleteHandler: Send + Sync {
    fn before_delete(&self, event: &mut DeleteEvent<'_>);
}

/// Vetoes deletion of items the inventory marks as linkable
pub struct DeletionGuard {
    inventory: Arc<dyn LinkableInventory>,
    log: Arc<dyn EventLog>,
}

impl DeletionGuard {
    /// Create a guard over the given inventory and diagnostics sink
    pub fn new(inventory: Arc<dyn LinkableInventory>, log: Arc<dyn EventLog>) -> Self {
        Self { inventory, log }
    }

    /// Consult the inventory for one item without side effects
    pub fn check(&self, item: &ContentItem) -> ProtectionDecision {
        if self.inventory.is_linkable(item) {
            ProtectionDecision::blocked(
                LinkError::DeletionBlocked {
                    content_id: item.id.to_string(),
                    path: item.path.clone(),
                }
                .to_string(),
            )
        } else {
            ProtectionDecision::allowed()
        }
    }
}

impl DeleteHandler for DeletionGuard {
    fn before_delete(&self, event: &mut DeleteEvent<'_>) {
        let decision = self.check(event.item());
        if decision.blocked {
            event.cancel();
            self.log.emit(Diagnostic::error(
                COMPONENT,
                codes::deletion_blocked(&event.item().id),
                decision.reason.unwrap_or_default(),
            ));
        }
    }
}
