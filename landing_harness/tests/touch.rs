// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch toggling for weapon cards.

use landing_core::host::{EventKind, ListenTarget};
use landing_core::node::NodeId;
use landing_harness::Harness;
use landing_harness::fixture::mobile;

fn active(harness: &Harness) -> Vec<NodeId> {
    harness.doc().with_class("touch-active")
}

#[test]
fn touch_activates_one_card() {
    let (mut harness, landing) = mobile();

    let response = harness.touch(landing.cards[0]);
    assert!(!response.default_prevented, "touch listeners are passive");
    assert_eq!(active(&harness), [landing.cards[0]]);

    harness.touch(landing.cards[1]);
    assert_eq!(active(&harness), [landing.cards[1]]);
}

#[test]
fn touching_the_active_card_again_closes_it() {
    let (mut harness, landing) = mobile();
    harness.touch(landing.cards[0]);
    // The label bubbles to its card.
    harness.touch(landing.card_label);
    assert!(active(&harness).is_empty());
}

#[test]
fn touch_outside_clears_every_card() {
    let (mut harness, landing) = mobile();
    harness.touch(landing.cards[2]);
    harness.touch(landing.features);
    assert!(active(&harness).is_empty());
}

#[test]
fn listeners_cover_every_card_and_the_document() {
    let (harness, landing) = mobile();
    for &card in &landing.cards {
        assert!(
            harness
                .doc()
                .listens(ListenTarget::Node(card), EventKind::TouchStart)
        );
    }
    assert!(
        harness
            .doc()
            .listens(ListenTarget::Document, EventKind::TouchStart)
    );
}
