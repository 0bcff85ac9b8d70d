// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform events delivered to the [`Page`](crate::page::Page) and the
//! response the host applies to the native event.

use alloc::string::String;
use alloc::vec::Vec;

use crate::host::{IntersectionEntry, ListenTarget};
use crate::node::{NodeId, WatcherId};

/// An event fired by the platform for a listener or observer the page
/// registered.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The window scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
    /// A click on `target`, delivered to the listener installed on `listener`.
    ///
    /// A click bubbling through several listeners arrives once per listener,
    /// innermost first.
    Click {
        /// The element that was clicked.
        target: NodeId,
        /// The listener currently handling the event.
        listener: ListenTarget,
    },
    /// A key press, with the DOM `key` value.
    KeyDown {
        /// The pressed key, e.g. `"Escape"`.
        key: String,
    },
    /// A touch starting on `target`, delivered like [`PageEvent::Click`].
    TouchStart {
        /// The element that was touched.
        target: NodeId,
        /// The listener currently handling the event.
        listener: ListenTarget,
    },
    /// The frame requested through
    /// [`Host::request_frame`](crate::host::Host::request_frame) is about to
    /// render.
    AnimationFrame,
    /// A batch of visibility observations, in platform delivery order.
    Intersections {
        /// The observer that produced the batch.
        watcher: WatcherId,
        /// Entries in delivery order.
        entries: Vec<IntersectionEntry>,
    },
}

/// What the host should do with the native event after dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Cancel the platform's default action (e.g. jump navigation).
    pub default_prevented: bool,
    /// Stop the event from reaching listeners further up the tree.
    pub propagation_stopped: bool,
}

impl EventResponse {
    /// Leaves the event untouched.
    pub const PASS: Self = Self {
        default_prevented: false,
        propagation_stopped: false,
    };

    /// Cancels the default action.
    pub const PREVENT_DEFAULT: Self = Self {
        default_prevented: true,
        propagation_stopped: false,
    };

    /// Stops propagation.
    pub const STOP_PROPAGATION: Self = Self {
        default_prevented: false,
        propagation_stopped: true,
    };

    /// Combines two responses; each flag is set if either side set it.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            default_prevented: self.default_prevented || other.default_prevented,
            propagation_stopped: self.propagation_stopped || other.propagation_stopped,
        }
    }
}
