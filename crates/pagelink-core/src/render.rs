//! Link rendering: `RenderDirective` + resolver → mutated anchor
//!
//! A render is a small state machine over four terminal outcomes,
//! evaluated in order:
//!
//! 1. No target supplied → `MissingTarget` diagnostic, anchor untouched
//! 2. Resolver finds nothing → `TargetMissing` diagnostic, anchor untouched
//! 3. URL computation faults → `UrlResolutionFailed` diagnostic, anchor untouched
//! 4. Success → href/title/body updated per the precedence rules
//!
//! Every failure degrades gracefully: the anchor is left exactly as the
//! caller supplied it and the surrounding page render continues.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::diagnostics::{codes, Diagnostic, EventLog};
use crate::model::{Anchor, LinkResult, RenderDirective};
use crate::resolver::LinkResolver;
use std::sync::Arc;

/// Component name used in renderer diagnostics
pub const COMPONENT: &str = "LinkRenderer";

/// Terminal outcome of one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Anchor was updated from a resolved link
    Rendered,
    /// No target identifier was supplied; anchor untouched
    SkippedMissingTarget,
    /// No item matched the identifier; anchor untouched
    SkippedTargetMissing,
    /// URL computation faulted; anchor untouched
    SkippedUrlResolutionFailed,
}

/// Whether a successful render writes the title attribute
///
/// Explicit decision table over the three independent booleans, so each
/// outcome stays auditable and testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    Set,
    Keep,
}

impl TitleAction {
    /// Decide from (title present at all, title blank, child content blank)
    pub fn decide(title_present: bool, title_blank: bool, child_blank: bool) -> Self {
        match (title_present, title_blank, child_blank) {
            // No title attribute at all: always set
            (false, _, _) => TitleAction::Set,
            // Blank title and blank child content: set
            (true, true, true) => TitleAction::Set,
            // Blank title but real child content: leave
            (true, true, false) => TitleAction::Keep,
            // Non-blank title: leave
            (true, false, _) => TitleAction::Keep,
        }
    }
}

/// Serialize ordered query parameters to a query string
///
/// Empty input serializes to the empty string (no bare "?"). Keys and
/// values are percent-encoded.
pub fn serialize_query(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, NON_ALPHANUMERIC),
                utf8_percent_encode(v, NON_ALPHANUMERIC)
            )
        })
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Renders a resolved link into a single anchor node
pub struct LinkRenderer {
    resolver: LinkResolver,
    log: Arc<dyn EventLog>,
}

impl LinkRenderer {
    /// Create a renderer over the given resolver and diagnostics sink
    ///
    /// Wrap `log` in a `DedupEventLog` to get the once-per-code policy the
    /// render path expects for repeated broken references.
    pub fn new(resolver: LinkResolver, log: Arc<dyn EventLog>) -> Self {
        Self { resolver, log }
    }

    /// Render one directive into `anchor`
    ///
    /// Side effects are confined to the anchor passed in; nothing is
    /// written until resolution has fully completed or definitively
    /// failed.
    pub async fn render(&self, directive: &RenderDirective, anchor: &mut Anchor) -> RenderOutcome {
        let Some(target) = &directive.target else {
            self.log.emit(Diagnostic::warning(
                COMPONENT,
                codes::missing_target(),
                "No link target identifier was supplied; anchor left untouched",
            ));
            return RenderOutcome::SkippedMissingTarget;
        };

        match self.resolver.resolve(target).await {
            Ok(None) => {
                self.log.emit(Diagnostic::warning(
                    COMPONENT,
                    codes::target_missing(target),
                    format!(
                        "No content item matches identifier {}; anchor left untouched",
                        target
                    ),
                ));
                RenderOutcome::SkippedTargetMissing
            }
            Err(err) => {
                self.log.emit(Diagnostic::error(
                    COMPONENT,
                    codes::url_resolution_failed(target),
                    format!("{}; anchor left untouched", err),
                ));
                RenderOutcome::SkippedUrlResolutionFailed
            }
            Ok(Some(link)) => {
                self.apply(directive, anchor, &link);
                RenderOutcome::Rendered
            }
        }
    }

    /// Apply a resolved link to the anchor (outcome 4)
    fn apply(&self, directive: &RenderDirective, anchor: &mut Anchor, link: &LinkResult) {
        let href = format!("{}{}", link.url, serialize_query(&directive.query_params));
        anchor.set_attribute("href", href);

        let child_blank = anchor.is_child_content_blank();

        let title_present = anchor.has_attribute("title");
        let title_blank = anchor
            .attribute("title")
            .map(|t| t.trim().is_empty())
            .unwrap_or(true);
        if TitleAction::decide(title_present, title_blank, child_blank) == TitleAction::Set {
            anchor.set_attribute("title", link.text.clone());
        }

        if child_blank {
            let text = directive
                .effective_text_override()
                .unwrap_or(link.text.as_str());
            anchor.set_child_content(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_decision_table() {
        // (title_present, title_blank, child_blank) → action
        assert_eq!(TitleAction::decide(false, true, true), TitleAction::Set);
        assert_eq!(TitleAction::decide(false, true, false), TitleAction::Set);
        assert_eq!(TitleAction::decide(true, true, true), TitleAction::Set);
        assert_eq!(TitleAction::decide(true, true, false), TitleAction::Keep);
        assert_eq!(TitleAction::decide(true, false, true), TitleAction::Keep);
        assert_eq!(TitleAction::decide(true, false, false), TitleAction::Keep);
    }

    #[test]
    fn test_serialize_query_empty_is_empty_string() {
        assert_eq!(serialize_query(&[]), "");
    }

    #[test]
    fn test_serialize_query_single_param() {
        let params = vec![("ref".to_string(), "nav".to_string())];
        assert_eq!(serialize_query(&params), "?ref=nav");
    }

    #[test]
    fn test_serialize_query_preserves_order() {
        let params = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        assert_eq!(serialize_query(&params), "?b=2&a=1");
    }

    #[test]
    fn test_serialize_query_percent_encodes() {
        let params = vec![("q".to_string(), "a b&c".to_string())];
        assert_eq!(serialize_query(&params), "?q=a%20b%26c");
    }
}
