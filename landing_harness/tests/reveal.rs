// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot reveals driven by page geometry.

use landing_core::event::PageEvent;
use landing_core::host::{Host, IntersectionEntry};
use landing_core::node::WatcherId;
use landing_harness::fixture::desktop;
use landing_harness::{HostCall, RecordedEvent};

#[test]
fn nothing_below_the_fold_is_revealed_at_load() {
    let (harness, landing) = desktop();
    for &el in &landing.reveals {
        assert!(
            !harness.doc().has_class(el, "visible"),
            "{el:?} revealed without being on screen"
        );
    }
    assert_eq!(harness.doc().observed(WatcherId::REVEAL), landing.reveals);
}

#[test]
fn reveal_applies_once_and_unobserves() {
    let (mut harness, landing) = desktop();
    let first = landing.reveals[0];

    harness.scroll_and_render(500.0);
    assert!(harness.doc().has_class(first, "visible"));
    assert!(
        !harness.doc().observed(WatcherId::REVEAL).contains(&first),
        "revealed element must stop being observed"
    );

    // Scroll away and back: the flag never reverses and is never rewritten.
    harness.scroll_and_render(0.0);
    assert!(harness.doc().has_class(first, "visible"));
    harness.scroll_and_render(500.0);
    let writes = harness
        .doc()
        .count_calls(|c| *c == HostCall::AddClass(first, "visible".into()));
    assert_eq!(writes, 1, "visible flag written more than once");
}

#[test]
fn reveal_fires_on_first_intersection() {
    let (mut harness, landing) = desktop();
    let second = landing.reveals[1]; // 1350..1650

    harness.scroll_and_render(540.0); // viewport 540..1340
    assert!(!harness.doc().has_class(second, "visible"));

    // 30px of 300px on screen: the observer reports it as intersecting.
    harness.scroll_and_render(580.0);
    assert!(harness.doc().has_class(second, "visible"));

    let reveals: Vec<_> = harness
        .trace()
        .into_iter()
        .filter_map(|r| match r {
            RecordedEvent::Reveal(e) if e.target == second => Some(e.ratio),
            _ => None,
        })
        .collect();
    assert_eq!(reveals.len(), 1);
    assert!((reveals[0] - 0.1).abs() < 1e-9, "ratio {}", reveals[0]);
}

#[test]
fn crossing_reported_just_under_the_threshold_still_reveals() {
    let (mut harness, landing) = desktop();
    let second = landing.reveals[1];

    harness.dispatch(&PageEvent::Intersections {
        watcher: WatcherId::REVEAL,
        entries: vec![IntersectionEntry {
            target: second,
            is_intersecting: true,
            ratio: 0.1499,
        }],
    });

    assert!(harness.doc().has_class(second, "visible"));
    assert!(!harness.doc().observed(WatcherId::REVEAL).contains(&second));
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let (mut harness, landing) = desktop();
    let first = landing.reveals[0];

    harness.dispatch(&PageEvent::Intersections {
        watcher: WatcherId::REVEAL,
        entries: vec![IntersectionEntry {
            target: first,
            is_intersecting: false,
            ratio: 0.0,
        }],
    });

    assert!(!harness.doc().has_class(first, "visible"));
    assert!(harness.doc().observed(WatcherId::REVEAL).contains(&first));
}

#[test]
fn jumping_to_the_bottom_reveals_only_what_is_visible() {
    let (mut harness, landing) = desktop();
    harness.scroll_and_render(2500.0); // viewport 2500..3300

    let visible = harness.doc().with_class("visible");
    assert_eq!(visible, vec![landing.reveals[3]]);
    assert_eq!(
        harness.page().reveal().map(|r| r.pending().len()),
        Some(3),
        "three targets still awaiting their reveal"
    );
}
