// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup idempotence and degradation on partial markup.

use std::collections::BTreeSet;

use landing_core::behavior::{Attach, Behavior, Reason};
use landing_core::event::{EventResponse, PageEvent};
use landing_core::host::{EventKind, Host, ListenTarget};
use landing_core::page::StartOutcome;
use landing_harness::fixture::{DESKTOP_WIDTH, VIEWPORT_HEIGHT, landing_page};
use landing_harness::{FakeDocument, Harness, HostCall};

fn observe_calls(harness: &Harness) -> usize {
    harness
        .doc()
        .count_calls(|c| matches!(c, HostCall::Observe(..)))
}

#[test]
fn full_page_attaches_everything() {
    let (doc, _) = landing_page(DESKTOP_WIDTH, VIEWPORT_HEIGHT);
    let mut harness = Harness::new(doc);
    let StartOutcome::Started(report) = harness.start() else {
        panic!("first start must run");
    };
    assert_eq!(report.attached_count(), Behavior::ALL.len());
    for (behavior, outcome) in report.iter() {
        assert_eq!(outcome, Attach::Attached, "{} did not attach", behavior.as_str());
    }
}

#[test]
fn second_start_registers_nothing() {
    let (doc, _) = landing_page(DESKTOP_WIDTH, VIEWPORT_HEIGHT);
    let mut harness = Harness::new(doc);
    harness.start();
    let listeners = harness.doc().listeners().len();
    let observes = observe_calls(&harness);
    assert_eq!(observes, 2, "one observer for reveals, one for sections");

    assert_eq!(harness.start(), StartOutcome::AlreadyStarted);
    assert_eq!(harness.doc().listeners().len(), listeners);
    assert_eq!(observe_calls(&harness), observes);
}

#[test]
fn each_listener_is_installed_once() {
    let (doc, landing) = landing_page(DESKTOP_WIDTH, VIEWPORT_HEIGHT);
    let mut harness = Harness::new(doc);
    harness.start();

    let listeners = harness.doc().listeners();
    let unique: BTreeSet<_> = listeners
        .iter()
        .map(|(target, kind)| format!("{target:?}/{}", kind.as_str()))
        .collect();
    assert_eq!(unique.len(), listeners.len(), "duplicate listener in {listeners:?}");

    let scroll = (ListenTarget::Window, EventKind::Scroll);
    assert_eq!(
        listeners.iter().filter(|&&l| l == scroll).count(),
        1,
        "navbar and parallax share the window scroll listener"
    );
    assert!(harness.doc().listens(ListenTarget::Node(landing.toggle), EventKind::Click));
    assert!(harness.doc().listens(ListenTarget::Document, EventKind::KeyDown));
}

#[test]
fn empty_document_degrades_silently() {
    let mut harness = Harness::new(FakeDocument::new(DESKTOP_WIDTH, VIEWPORT_HEIGHT));
    let StartOutcome::Started(report) = harness.start() else {
        panic!("first start must run");
    };

    assert_eq!(report.attached_count(), 0);
    assert_eq!(
        report.outcome(Behavior::Reveal),
        Attach::NotApplicable(Reason::NoRevealTargets)
    );
    assert_eq!(
        report.outcome(Behavior::Navbar),
        Attach::NotApplicable(Reason::MissingNavbar)
    );
    assert_eq!(
        report.outcome(Behavior::Anchors),
        Attach::NotApplicable(Reason::NoLinks)
    );
    assert_eq!(
        report.outcome(Behavior::Menu),
        Attach::NotApplicable(Reason::MissingMenuToggle)
    );
    assert_eq!(
        report.outcome(Behavior::Parallax),
        Attach::NotApplicable(Reason::MissingHero)
    );
    assert_eq!(
        report.outcome(Behavior::Highlight),
        Attach::NotApplicable(Reason::NoSections)
    );
    assert_eq!(
        report.outcome(Behavior::Touch),
        Attach::NotApplicable(Reason::NoCards)
    );
    assert!(harness.doc().calls().is_empty(), "nothing may be registered");

    harness.scroll_to(500.0);
    harness.resize(400.0, 700.0);
    assert_eq!(harness.key_down("Escape"), EventResponse::PASS);
    harness.render_frame();
    assert!(harness.doc().calls().is_empty());
}

#[test]
fn partial_markup_keeps_what_applies() {
    let mut doc = FakeDocument::new(DESKTOP_WIDTH, VIEWPORT_HEIGHT);
    let navbar = doc.create("nav").class("navbar").span(0.0, 70.0).build();
    let link = doc.create("a").href("#about").child_of(navbar).build();
    doc.create("section").id("about").span(900.0, 600.0).build();

    let mut harness = Harness::new(doc);
    let StartOutcome::Started(report) = harness.start() else {
        panic!("first start must run");
    };
    assert!(report.outcome(Behavior::Navbar).is_attached());
    assert!(report.outcome(Behavior::Anchors).is_attached());
    assert!(report.outcome(Behavior::Highlight).is_attached());
    assert_eq!(
        report.outcome(Behavior::Menu),
        Attach::NotApplicable(Reason::MissingMenuToggle)
    );
    assert_eq!(
        report.outcome(Behavior::Parallax),
        Attach::NotApplicable(Reason::MissingHero)
    );
    assert!(!harness.doc().listens(ListenTarget::Window, EventKind::Resize));
    assert!(!harness.doc().listens(ListenTarget::Document, EventKind::KeyDown));

    let response = harness.click(link);
    assert!(response.default_prevented);
    assert_eq!(harness.doc().scroll_y(), 700.0, "clamped to the end of the document");
    assert!(harness.doc().has_class(navbar, "scrolled"));
    harness.render_frame();
    assert!(harness.doc().has_class(link, "active"));
}

#[test]
fn events_before_start_are_ignored() {
    let (doc, landing) = landing_page(DESKTOP_WIDTH, VIEWPORT_HEIGHT);
    let mut harness = Harness::new(doc);
    let response = harness.dispatch(&PageEvent::Click {
        target: landing.weapons_link(),
        listener: ListenTarget::Node(landing.weapons_link()),
    });
    assert_eq!(response, EventResponse::PASS);
    assert!(harness.doc().calls().is_empty());
    assert!(!harness.page().is_started());
}
