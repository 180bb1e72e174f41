//! Link Renderer Tests
//!
//! This test suite verifies the four terminal render outcomes and the
//! title/body precedence rules.
//!
//! ## Scenarios Covered
//!
//! 1. No target / missing item / URL fault leave the anchor untouched
//! 2. Failure diagnostics are emitted once per identifier, not per render
//! 3. Successful renders set href (with query string), title, and body
//! 4. Caller-supplied child content and titles take precedence

mod common;

use std::sync::Arc;

use common::{item, seeded_tree, tree_renderer, FailingUrlResolver, FixedLookup};
use pagelink_core::diagnostics::{codes, CapturingEventLog, DedupEventLog, Severity};
use pagelink_core::model::{Anchor, RenderDirective};
use pagelink_core::render::{LinkRenderer, RenderOutcome};
use pagelink_core::resolver::LinkResolver;
use pagelink_core_types::ContentId;

#[tokio::test]
async fn test_no_target_leaves_anchor_untouched() {
    // GIVEN an anchor the caller already decorated
    let (tree, _about) = seeded_tree();
    let (renderer, capture) = tree_renderer(&tree);

    let mut anchor = Anchor::new();
    anchor.set_attribute("href", "/existing");
    let before = anchor.clone();

    // WHEN we render a directive with no target
    let outcome = renderer.render(&RenderDirective::empty(), &mut anchor).await;

    // THEN the anchor is exactly as supplied
    assert_eq!(outcome, RenderOutcome::SkippedMissingTarget);
    assert_eq!(anchor, before);

    // AND exactly one MissingTarget diagnostic was emitted
    assert_eq!(capture.count_code(&codes::missing_target()), 1);
}

#[tokio::test]
async fn test_missing_item_leaves_anchor_untouched_and_logs_once() {
    let (tree, _about) = seeded_tree();
    let (renderer, capture) = tree_renderer(&tree);

    let ghost = ContentId::new();
    let directive = RenderDirective::for_target(ghost.clone());

    let mut anchor = Anchor::new();
    anchor.set_attribute("href", "/existing");
    let before = anchor.clone();

    // WHEN rendering is retried several times for the same identifier
    for _ in 0..3 {
        let outcome = renderer.render(&directive, &mut anchor).await;
        assert_eq!(outcome, RenderOutcome::SkippedTargetMissing);
    }

    // THEN the anchor stays untouched
    assert_eq!(anchor, before);

    // AND exactly one TargetMissing diagnostic was emitted for it
    assert_eq!(capture.count_code(&codes::target_missing(&ghost)), 1);
}

#[tokio::test]
async fn test_url_fault_leaves_anchor_untouched_and_logs_once() {
    // GIVEN a lookup that finds the page but a URL port that throws
    let about = item("About Us", "/home/about");
    let lookup = Arc::new(FixedLookup::new(vec![about.clone()]));
    let resolver = LinkResolver::new(lookup, Arc::new(FailingUrlResolver));

    let capture = Arc::new(CapturingEventLog::new());
    let renderer = LinkRenderer::new(resolver, Arc::new(DedupEventLog::new(capture.clone())));

    let directive = RenderDirective::for_target(about.id.clone());
    let mut anchor = Anchor::new();
    anchor.set_attribute("href", "/existing");
    let before = anchor.clone();

    for _ in 0..3 {
        let outcome = renderer.render(&directive, &mut anchor).await;
        assert_eq!(outcome, RenderOutcome::SkippedUrlResolutionFailed);
    }

    assert_eq!(anchor, before);
    assert_eq!(capture.count_code(&codes::url_resolution_failed(&about.id)), 1);

    // Faulting URL resolution is an error-severity diagnostic
    assert_eq!(capture.entries()[0].severity, Severity::Error);
}

#[tokio::test]
async fn test_success_sets_href_title_and_body() {
    // GIVEN url=/about, text="About Us", no title, no child content
    let (tree, about) = seeded_tree();
    let (renderer, capture) = tree_renderer(&tree);

    let mut anchor = Anchor::new();
    let outcome = renderer
        .render(&RenderDirective::for_target(about.id.clone()), &mut anchor)
        .await;

    assert_eq!(outcome, RenderOutcome::Rendered);
    assert_eq!(anchor.attribute("href"), Some("/about"));
    assert_eq!(anchor.attribute("title"), Some("About Us"));
    assert_eq!(anchor.child_content(), "About Us");

    // No diagnostic on success
    assert!(capture.entries().is_empty());
}

#[tokio::test]
async fn test_success_appends_query_string() {
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let directive =
        RenderDirective::for_target(about.id.clone()).with_query_param("ref", "nav");

    let mut anchor = Anchor::new();
    renderer.render(&directive, &mut anchor).await;

    assert_eq!(anchor.attribute("href"), Some("/about?ref=nav"));
}

#[tokio::test]
async fn test_existing_child_content_is_preserved() {
    // GIVEN non-blank child content already present
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let mut anchor = Anchor::with_child_content("<b>Click</b>");
    renderer
        .render(&RenderDirective::for_target(about.id.clone()), &mut anchor)
        .await;

    // Body remains unmodified; title is set because none existed
    assert_eq!(anchor.child_content(), "<b>Click</b>");
    assert_eq!(anchor.attribute("title"), Some("About Us"));
}

#[tokio::test]
async fn test_existing_title_is_preserved() {
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let mut anchor = Anchor::new();
    anchor.set_attribute("title", "Custom title");
    renderer
        .render(&RenderDirective::for_target(about.id.clone()), &mut anchor)
        .await;

    assert_eq!(anchor.attribute("title"), Some("Custom title"));
}

#[tokio::test]
async fn test_blank_title_with_blank_child_is_replaced() {
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let mut anchor = Anchor::new();
    anchor.set_attribute("title", "  ");
    renderer
        .render(&RenderDirective::for_target(about.id.clone()), &mut anchor)
        .await;

    assert_eq!(anchor.attribute("title"), Some("About Us"));
}

#[tokio::test]
async fn test_blank_title_with_real_child_content_is_kept() {
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let mut anchor = Anchor::with_child_content("<b>Click</b>");
    anchor.set_attribute("title", "");
    renderer
        .render(&RenderDirective::for_target(about.id.clone()), &mut anchor)
        .await;

    assert_eq!(anchor.attribute("title"), Some(""));
    assert_eq!(anchor.child_content(), "<b>Click</b>");
}

#[tokio::test]
async fn test_explicit_text_override_wins_for_blank_body() {
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let directive = RenderDirective::for_target(about.id.clone()).with_text("Learn more");

    let mut anchor = Anchor::new();
    renderer.render(&directive, &mut anchor).await;

    assert_eq!(anchor.child_content(), "Learn more");
}

#[tokio::test]
async fn test_blank_text_override_falls_back_to_display_name() {
    let (tree, about) = seeded_tree();
    let (renderer, _capture) = tree_renderer(&tree);

    let directive = RenderDirective::for_target(about.id.clone()).with_text("   ");

    let mut anchor = Anchor::new();
    renderer.render(&directive, &mut anchor).await;

    assert_eq!(anchor.child_content(), "About Us");
}

#[tokio::test]
async fn test_distinct_broken_targets_each_get_one_diagnostic() {
    let (tree, _about) = seeded_tree();
    let (renderer, capture) = tree_renderer(&tree);

    let ghost_a = ContentId::new();
    let ghost_b = ContentId::new();

    let mut anchor = Anchor::new();
    renderer
        .render(&RenderDirective::for_target(ghost_a.clone()), &mut anchor)
        .await;
    renderer
        .render(&RenderDirective::for_target(ghost_b.clone()), &mut anchor)
        .await;
    renderer
        .render(&RenderDirective::for_target(ghost_a.clone()), &mut anchor)
        .await;

    assert_eq!(capture.count_code(&codes::target_missing(&ghost_a)), 1);
    assert_eq!(capture.count_code(&codes::target_missing(&ghost_b)), 1);
}
