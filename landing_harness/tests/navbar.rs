// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar `scrolled` state across the threshold.

use landing_core::behavior::navbar::NavbarState;
use landing_core::host::Host;
use landing_harness::fixture::{DESKTOP_WIDTH, VIEWPORT_HEIGHT, desktop, landing_page};
use landing_harness::{Harness, HostCall};

#[test]
fn threshold_boundary_is_plain() {
    let (mut harness, landing) = desktop();
    for (offset, scrolled) in [
        (0.0, false),
        (49.0, false),
        (50.0, false),
        (51.0, true),
        (800.0, true),
        (50.0, false),
        (12.0, false),
    ] {
        harness.scroll_to(offset);
        assert_eq!(
            harness.doc().has_class(landing.navbar, "scrolled"),
            scrolled,
            "wrong navbar state at offset {offset}"
        );
    }
}

#[test]
fn writes_only_on_transitions() {
    let (mut harness, landing) = desktop();
    harness.doc_mut().clear_calls();
    for offset in [60.0, 120.0, 300.0, 900.0] {
        harness.scroll_to(offset);
    }
    let adds = harness
        .doc()
        .count_calls(|c| *c == HostCall::AddClass(landing.navbar, "scrolled".into()));
    assert_eq!(adds, 1);
    assert_eq!(
        harness.page().navbar().map(|n| n.state()),
        Some(NavbarState::Scrolled)
    );
}

#[test]
fn state_is_applied_at_startup() {
    let (mut doc, landing) = landing_page(DESKTOP_WIDTH, VIEWPORT_HEIGHT);
    doc.set_scroll_y(300.0);
    let mut harness = Harness::new(doc);
    harness.start();
    assert!(
        harness.doc().has_class(landing.navbar, "scrolled"),
        "restored scroll position must show the scrolled navbar before any scroll event"
    );
}
