//! Core data model for link resolution and rendering
//!
//! These are minimal projections and value objects; the full content item
//! is owned by the hosting content-tree store, not by this crate.

pub mod anchor;
pub mod directive;
pub mod item;
pub mod link;
pub mod protection;

pub use anchor::Anchor;
pub use directive::RenderDirective;
pub use item::ContentItem;
pub use link::LinkResult;
pub use protection::ProtectionDecision;
