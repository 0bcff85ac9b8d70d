// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile menu transitions.

use landing_core::behavior::menu::{MenuCause, MenuState};
use landing_core::event::EventResponse;
use landing_core::host::Host;
use landing_harness::fixture::mobile;
use landing_harness::{HostCall, RecordedEvent};

#[test]
fn toggling_twice_returns_to_closed() {
    let (mut harness, landing) = mobile();
    let menu = |h: &landing_harness::Harness| h.page().menu().map(|m| m.state(h.doc()));

    let response = harness.click(landing.toggle);
    assert!(response.propagation_stopped, "toggle must not reach the outside-click handler");
    assert_eq!(menu(&harness), Some(MenuState::Open));

    harness.click(landing.toggle);
    assert_eq!(menu(&harness), Some(MenuState::Closed));
    assert!(!harness.doc().has_class(landing.navbar, "nav-open"));
}

#[test]
fn escape_closes_regardless_of_toggle_count() {
    let (mut harness, landing) = mobile();
    for _ in 0..3 {
        harness.click(landing.toggle);
    }
    assert!(harness.doc().has_class(landing.navbar, "nav-open"));

    let response = harness.key_down("Escape");
    assert_eq!(response, EventResponse::PASS);
    assert!(!harness.doc().has_class(landing.navbar, "nav-open"));
}

#[test]
fn escape_while_closed_writes_nothing() {
    let (mut harness, landing) = mobile();
    harness.doc_mut().clear_calls();
    harness.key_down("Escape");
    assert_eq!(
        harness
            .doc()
            .count_calls(|c| *c == HostCall::RemoveClass(landing.navbar, "nav-open".into())),
        0
    );
}

#[test]
fn other_keys_are_ignored() {
    let (mut harness, landing) = mobile();
    harness.click(landing.toggle);
    harness.key_down("Enter");
    harness.key_down("Esc");
    assert!(harness.doc().has_class(landing.navbar, "nav-open"));
}

#[test]
fn outside_click_closes() {
    let (mut harness, landing) = mobile();
    harness.click(landing.toggle);
    harness.clear_trace();

    harness.click(landing.features);

    assert!(!harness.doc().has_class(landing.navbar, "nav-open"));
    assert!(harness.trace().contains(&RecordedEvent::Menu(
        landing_core::trace::MenuEvent {
            state: MenuState::Closed,
            cause: MenuCause::OutsideClick,
        }
    )));
}

#[test]
fn click_inside_navbar_keeps_menu_open() {
    let (mut harness, landing) = mobile();
    harness.click(landing.toggle);
    harness.click(landing.logo);
    assert!(harness.doc().has_class(landing.navbar, "nav-open"));
}
