// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth same-page anchor navigation.

use landing_core::behavior::anchor::AnchorOutcome;
use landing_core::host::Host;
use landing_harness::fixture::{desktop, mobile};
use landing_harness::{HostCall, RecordedEvent};

fn anchor_outcomes(trace: Vec<RecordedEvent>) -> Vec<AnchorOutcome> {
    trace
        .into_iter()
        .filter_map(|r| match r {
            RecordedEvent::Anchor { outcome, .. } => Some(outcome),
            _ => None,
        })
        .collect()
}

#[test]
fn existing_destination_scrolls_and_records_history() {
    let (mut harness, landing) = desktop();

    let response = harness.click(landing.weapons_link());

    assert!(response.default_prevented, "jump navigation must be cancelled");
    assert_eq!(harness.doc().scroll_y(), 1700.0, "ends at the section's top edge");
    assert_eq!(harness.doc().history(), ["#weapons"]);
    assert!(harness.followed().is_empty());
}

#[test]
fn navigation_closes_the_open_menu_before_scrolling() {
    let (mut harness, landing) = mobile();
    harness.click(landing.toggle);
    assert!(harness.doc().has_class(landing.navbar, "nav-open"));
    harness.doc_mut().clear_calls();
    harness.clear_trace();

    harness.click(landing.weapons_link());

    assert!(!harness.doc().has_class(landing.navbar, "nav-open"));
    let calls = harness.doc().calls();
    let position = |needle: &HostCall| calls.iter().position(|c| c == needle);
    let closed = position(&HostCall::RemoveClass(landing.navbar, "nav-open".into()));
    let scrolled = position(&HostCall::ScrollIntoView(landing.weapons));
    let pushed = position(&HostCall::PushHistory("#weapons".into()));
    assert!(closed.is_some() && scrolled.is_some() && pushed.is_some());
    assert!(closed < scrolled, "menu must close before scrolling");
    assert!(scrolled < pushed, "history is pushed after the scroll starts");

    assert_eq!(
        anchor_outcomes(harness.trace()),
        [AnchorOutcome::Navigated {
            target: landing.weapons,
            closed_menu: true,
        }]
    );
}

#[test]
fn missing_destination_prevents_default_without_scrolling() {
    let (mut harness, landing) = desktop();
    harness.scroll_to(900.0);
    harness.doc_mut().clear_calls();

    let response = harness.click(landing.dead_link);

    assert!(response.default_prevented);
    assert_eq!(harness.doc().scroll_y(), 900.0, "no scroll may occur");
    assert!(harness.doc().history().is_empty());
    assert_eq!(
        harness
            .doc()
            .count_calls(|c| matches!(c, HostCall::ScrollIntoView(_))),
        0
    );
    assert_eq!(
        anchor_outcomes(harness.trace()),
        [AnchorOutcome::MissingTarget],
        "dead links are reported"
    );
}

#[test]
fn bare_marker_keeps_default_navigation() {
    let (mut harness, landing) = desktop();

    let response = harness.click(landing.logo);

    assert!(!response.default_prevented);
    assert_eq!(harness.followed(), [landing.logo]);
    assert!(harness.doc().history().is_empty());
    assert_eq!(anchor_outcomes(harness.trace()), [AnchorOutcome::Passed]);
}

#[test]
fn off_document_links_are_not_intercepted() {
    let (mut harness, landing) = desktop();

    let response = harness.click(landing.external_link);

    assert!(!response.default_prevented);
    assert_eq!(harness.followed(), [landing.external_link]);
    assert!(anchor_outcomes(harness.trace()).is_empty());
}

#[test]
fn navigation_highlights_the_destination_link() {
    let (mut harness, landing) = desktop();
    harness.click(landing.nav_links[2]);
    harness.render_frame();
    assert_eq!(harness.doc().scroll_y(), 2700.0);
    assert!(harness.doc().has_class(landing.nav_links[2], "active"));
    assert!(!harness.doc().has_class(landing.weapons_link(), "active"));
}
