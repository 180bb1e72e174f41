//! Core types shared across pagelink facilities
//!
//! This crate provides foundational types used by the link resolution,
//! rendering, and deletion protection facilities:
//!
//! - **Identifiers**: ContentId, the stable content-item identifier
//! - **Schema constants**: Canonical field keys and event names for
//!   structured logging and diagnostics

pub mod id;
pub mod schema;

pub use id::ContentId;
