use serde::{Deserialize, Serialize};

/// Outcome of consulting the linkable inventory for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionDecision {
    /// Whether the deletion must be vetoed
    pub blocked: bool,

    /// Human-readable reason, populated when blocked
    pub reason: Option<String>,
}

impl ProtectionDecision {
    /// Decision allowing the deletion to proceed
    pub fn allowed() -> Self {
        Self {
            blocked: false,
            reason: None,
        }
    }

    /// Decision vetoing the deletion with the given reason
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self {
            blocked: true,
            reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_has_no_reason() {
        let decision = ProtectionDecision::allowed();
        assert!(!decision.blocked);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_blocked_carries_reason() {
        let decision = ProtectionDecision::blocked("linkable");
        assert!(decision.blocked);
        assert_eq!(decision.reason.as_deref(), Some("linkable"));
    }
}
