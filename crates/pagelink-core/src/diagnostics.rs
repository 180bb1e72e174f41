//! Structured, deduplicatable diagnostics
//!
//! A `Diagnostic` is a severity-tagged entry with a stable code. Codes for
//! reference errors embed the content identifier, so each distinct broken
//! target is reported once per process rather than once per render.
//!
//! Sinks compose: `DedupEventLog` wraps any `EventLog` and applies the
//! once-per-code policy; `TracingEventLog` emits through `tracing`;
//! `CapturingEventLog` collects entries in memory for test assertions.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use pagelink_core_types::ContentId;

use crate::errors::LinkErrorKind;

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A structured, severity-tagged, deduplicatable log entry
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Component that emitted the entry (e.g. "LinkRenderer")
    pub component: String,

    /// Stable code; reference-error codes embed the content identifier
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Severity level
    pub severity: Severity,
}

impl Diagnostic {
    /// Create an info diagnostic
    pub fn info(
        component: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_severity(component, code, message, Severity::Info)
    }

    /// Create a warning diagnostic
    pub fn warning(
        component: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_severity(component, code, message, Severity::Warning)
    }

    /// Create an error diagnostic
    pub fn error(
        component: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_severity(component, code, message, Severity::Error)
    }

    fn with_severity(
        component: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            component: component.into(),
            code: code.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Diagnostic codes, parameterized by identifier where dedup needs it
pub mod codes {
    use super::*;

    /// Code for "no identifier supplied" (no identifier to embed)
    pub fn missing_target() -> String {
        LinkErrorKind::MissingTarget.code().to_string()
    }

    /// Code for "identifier matched no item", scoped to that identifier
    pub fn target_missing(id: &ContentId) -> String {
        format!("{}|{}", LinkErrorKind::TargetMissing.code(), id)
    }

    /// Code for "URL computation faulted", scoped to that identifier
    pub fn url_resolution_failed(id: &ContentId) -> String {
        format!("{}|{}", LinkErrorKind::UrlResolutionFailed.code(), id)
    }

    /// Code for "protected item deletion attempted", scoped to that identifier
    pub fn deletion_blocked(id: &ContentId) -> String {
        format!("{}|{}", LinkErrorKind::DeletionBlocked.code(), id)
    }
}

/// Sink accepting structured diagnostics
pub trait EventLog: Send + Sync {
    /// Emit one diagnostic entry
    fn emit(&self, diagnostic: Diagnostic);
}

/// Sink that forwards diagnostics to `tracing` at the matching level
#[derive(Debug, Default)]
pub struct TracingEventLog;

impl TracingEventLog {
    pub fn new() -> Self {
        Self
    }
}

impl EventLog for TracingEventLog {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Info => tracing::info!(
                component = %diagnostic.component,
                code = %diagnostic.code,
                event = pagelink_core_types::schema::EVENT_DIAGNOSTIC,
                "{}",
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                component = %diagnostic.component,
                code = %diagnostic.code,
                event = pagelink_core_types::schema::EVENT_DIAGNOSTIC,
                "{}",
                diagnostic.message
            ),
            Severity::Error => tracing::error!(
                component = %diagnostic.component,
                code = %diagnostic.code,
                event = pagelink_core_types::schema::EVENT_DIAGNOSTIC,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Default capacity of the once-per-code dedup table
///
/// Codes embed identifiers, so the table would otherwise grow without
/// bound in a long-lived process. When full, the oldest code is evicted
/// (FIFO); a very old broken reference may then be reported a second time.
pub const DEFAULT_DEDUP_CAPACITY: usize = 1024;

/// Once-per-code deduplicating sink
///
/// Forwards each distinct code to the inner sink exactly once while the
/// code remains in the bounded table. State is process-wide for the life
/// of this sink instance.
pub struct DedupEventLog {
    inner: Arc<dyn EventLog>,
    seen: Mutex<SeenCodes>,
}

struct SeenCodes {
    set: HashSet<String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl SeenCodes {
    /// Record `code`; returns true when it was not already present
    fn insert(&mut self, code: &str) -> bool {
        if self.set.contains(code) {
            return false;
        }
        if self.set.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.set.remove(&oldest);
            }
        }
        self.set.insert(code.to_string());
        self.order.push_back(code.to_string());
        true
    }
}

impl DedupEventLog {
    /// Wrap `inner` with the default table capacity
    pub fn new(inner: Arc<dyn EventLog>) -> Self {
        Self::with_capacity(inner, DEFAULT_DEDUP_CAPACITY)
    }

    /// Wrap `inner` with an explicit table capacity (must be non-zero)
    pub fn with_capacity(inner: Arc<dyn EventLog>, capacity: usize) -> Self {
        Self {
            inner,
            seen: Mutex::new(SeenCodes {
                set: HashSet::new(),
                order: VecDeque::new(),
                capacity: capacity.max(1),
            }),
        }
    }
}

impl EventLog for DedupEventLog {
    fn emit(&self, diagnostic: Diagnostic) {
        let fresh = self
            .seen
            .lock()
            .map(|mut seen| seen.insert(&diagnostic.code))
            .unwrap_or(true);
        if fresh {
            self.inner.emit(diagnostic);
        }
    }
}

/// In-memory capturing sink for deterministic test assertions
#[derive(Debug, Default)]
pub struct CapturingEventLog {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CapturingEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of all captured diagnostics
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Count captured diagnostics with the given code
    pub fn count_code(&self, code: &str) -> usize {
        self.entries().iter().filter(|d| d.code == code).count()
    }

    /// Clear all captured diagnostics
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl EventLog for CapturingEventLog {
    fn emit(&self, diagnostic: Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic);
        }
    }
}
