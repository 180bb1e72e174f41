//! pagelink-core - Link resolution, rendering, and deletion protection
//!
//! This crate resolves stable content-item identifiers into renderable
//! hyperlinks inside a page-templating pipeline, and enforces that items
//! referenced this way cannot be deleted while still linkable from code:
//!
//! - `LinkResolver`: identifier → `LinkResult { url, text }` via the
//!   lookup and URL ports, with identifier-scoped cache keys
//! - `LinkRenderer`: applies a resolved link to one anchor node, with
//!   explicit title/body precedence and deduplicated failure diagnostics
//! - `DeletionGuard`: pre-delete hook that vetoes deletion of items the
//!   pluggable inventory marks as linkable
//! - `ContentTree`: in-memory content store implementing the ports and
//!   the cancellable delete lifecycle

pub mod diagnostics;
pub mod errors;
pub mod guard;
pub mod inventory;
pub mod logging_facility;
pub mod model;
pub mod ports;
pub mod render;
pub mod resolver;
pub mod tree;

// Re-export commonly used types
pub use diagnostics::{CapturingEventLog, DedupEventLog, Diagnostic, EventLog, Severity, TracingEventLog};
pub use errors::{LinkError, LinkErrorKind, Result};
pub use guard::{DeleteEvent, DeleteHandler, DeletionGuard};
pub use inventory::{NoLinkableInventory, StaticInventory};
pub use model::{Anchor, ContentItem, LinkResult, ProtectionDecision, RenderDirective};
pub use ports::{ContentLookup, LinkableInventory, UrlResolver};
pub use render::{LinkRenderer, RenderOutcome};
pub use resolver::LinkResolver;
pub use tree::ContentTree;
