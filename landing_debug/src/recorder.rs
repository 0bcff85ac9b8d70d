// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory trace recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] by keeping an owned
//! [`RecordedEvent`] per call, in arrival order. Pass the recording to
//! [`json::export`](crate::json::export) to save it.

use landing_core::behavior::anchor::AnchorOutcome;
use landing_core::node::NodeId;
use landing_core::trace::{
    ActiveLinkEvent, AnchorEvent, AttachEvent, MenuEvent, NavbarEvent, ParallaxEvent,
    RevealEvent, TouchEvent, TraceSink,
};

/// An owned trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`AttachEvent`].
    Attach(AttachEvent),
    /// A [`RevealEvent`].
    Reveal(RevealEvent),
    /// A [`NavbarEvent`].
    Navbar(NavbarEvent),
    /// A [`MenuEvent`].
    Menu(MenuEvent),
    /// An [`AnchorEvent`] with its `href` copied out.
    Anchor {
        /// The clicked link.
        link: NodeId,
        /// The link's `href` value, if any.
        href: Option<String>,
        /// What the click did.
        outcome: AnchorOutcome,
    },
    /// A [`ParallaxEvent`].
    Parallax(ParallaxEvent),
    /// An [`ActiveLinkEvent`].
    ActiveLink(ActiveLinkEvent),
    /// A [`TouchEvent`].
    Touch(TouchEvent),
}

impl RecordedEvent {
    /// Short event name, matching the pretty-printer's line prefix.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Attach(_) => "attach",
            Self::Reveal(_) => "reveal",
            Self::Navbar(_) => "navbar",
            Self::Menu(_) => "menu",
            Self::Anchor { .. } => "anchor",
            Self::Parallax(_) => "parallax",
            Self::ActiveLink(_) => "active",
            Self::Touch(_) => "touch",
        }
    }
}

/// Records every trace event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.events.push(RecordedEvent::Attach(*e));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.events.push(RecordedEvent::Reveal(*e));
    }

    fn on_navbar(&mut self, e: &NavbarEvent) {
        self.events.push(RecordedEvent::Navbar(*e));
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        self.events.push(RecordedEvent::Menu(*e));
    }

    fn on_anchor(&mut self, e: &AnchorEvent<'_>) {
        self.events.push(RecordedEvent::Anchor {
            link: e.link,
            href: e.href.map(String::from),
            outcome: e.outcome,
        });
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        self.events.push(RecordedEvent::Parallax(*e));
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        self.events.push(RecordedEvent::ActiveLink(*e));
    }

    fn on_touch(&mut self, e: &TouchEvent) {
        self.events.push(RecordedEvent::Touch(*e));
    }
}
