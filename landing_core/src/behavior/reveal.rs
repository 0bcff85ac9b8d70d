// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot entrance animations.
//!
//! Every reveal target is observed until the observer first reports it as
//! intersecting. At that point it receives the `visible` class and is
//! immediately unobserved, so the flag is applied at most once per element
//! and the observer's target set only shrinks.
//!
//! The visibility threshold belongs to the observer registration. Entries
//! are not filtered by ratio again: a threshold crossing can be reported with
//! a ratio a hair below the threshold, and no later entry would follow.

use alloc::vec::Vec;

use crate::config::LandingConfig;
use crate::host::{Host, IntersectionEntry};
use crate::node::{NodeId, WatcherId};
use crate::trace::{RevealEvent, Tracer};

use super::Reason;

/// Coordinates reveals for a fixed set of targets.
#[derive(Clone, Debug)]
pub struct Reveal {
    class: &'static str,
    /// Targets still awaiting their reveal.
    pending: Vec<NodeId>,
}

impl Reveal {
    /// Starts observing `targets`.
    ///
    /// Fails with [`Reason::NoRevealTargets`] when `targets` is empty.
    pub fn attach(
        targets: Vec<NodeId>,
        config: &LandingConfig,
        host: &mut dyn Host,
    ) -> Result<Self, Reason> {
        if targets.is_empty() {
            return Err(Reason::NoRevealTargets);
        }
        host.observe(WatcherId::REVEAL, config.reveal_options(), &targets);
        Ok(Self {
            class: config.classes.visible,
            pending: targets,
        })
    }

    /// Applies a batch of observations.
    ///
    /// Entries for targets that were already revealed (or never observed)
    /// are ignored.
    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry],
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(pos) = self.pending.iter().position(|&n| n == entry.target) else {
                continue;
            };
            self.pending.swap_remove(pos);
            host.add_class(entry.target, self.class);
            host.unobserve(WatcherId::REVEAL, entry.target);
            tracer.reveal(&RevealEvent {
                target: entry.target,
                ratio: entry.ratio,
            });
        }
    }

    /// Returns the targets still awaiting their reveal.
    #[must_use]
    pub fn pending(&self) -> &[NodeId] {
        &self.pending
    }
}
