//! Canonical schema constants for structured logging and diagnostics
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CONTENT_ID: &str = "content_id";
pub const FIELD_PATH: &str = "path";
pub const FIELD_URL: &str = "url";

// Diagnostics fields
pub const FIELD_CODE: &str = "code";
pub const FIELD_SEVERITY: &str = "severity";
pub const FIELD_MESSAGE: &str = "message";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DIAGNOSTIC: &str = "diagnostic";
