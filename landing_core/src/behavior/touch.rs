// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch toggling for cards.
//!
//! Hover-only details on cards are unreachable on touch screens, so a touch
//! marks the card `touch-active` instead. Touching the active card again
//! closes it, and touching anywhere outside the cards clears them all.

use alloc::vec::Vec;

use crate::config::LandingConfig;
use crate::host::Host;
use crate::node::NodeId;
use crate::trace::{TouchEvent, Tracer};

use super::Reason;

/// Toggles `touch-active` on a set of cards.
#[derive(Clone, Debug)]
pub struct TouchCards {
    cards: Vec<NodeId>,
    class: &'static str,
}

impl TouchCards {
    /// Attaches to `cards`.
    ///
    /// Fails with [`Reason::NoCards`] when there are none.
    pub fn attach(cards: Vec<NodeId>, config: &LandingConfig) -> Result<Self, Reason> {
        if cards.is_empty() {
            return Err(Reason::NoCards);
        }
        Ok(Self {
            cards,
            class: config.classes.touch_active,
        })
    }

    /// The cards this behavior listens on.
    #[must_use]
    pub fn cards(&self) -> &[NodeId] {
        &self.cards
    }

    /// Returns `true` if `node` is one of the cards.
    #[must_use]
    pub fn handles(&self, node: NodeId) -> bool {
        self.cards.contains(&node)
    }

    /// Handles a touch delivered to `card`'s own listener.
    pub fn on_card_touch(&self, card: NodeId, host: &mut dyn Host, tracer: &mut Tracer<'_>) {
        let was_active = host.has_class(card, self.class);
        self.clear(host);
        let active = if was_active {
            None
        } else {
            host.add_class(card, self.class);
            Some(card)
        };
        tracer.touch(&TouchEvent { active });
    }

    /// Handles a touch delivered to the document listener.
    pub fn on_document_touch(
        &self,
        target: NodeId,
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) {
        if self.cards.iter().any(|&card| host.contains(card, target)) {
            return;
        }
        self.clear(host);
        tracer.touch(&TouchEvent { active: None });
    }

    fn clear(&self, host: &mut dyn Host) {
        for &card in &self.cards {
            host.remove_class(card, self.class);
        }
    }
}
