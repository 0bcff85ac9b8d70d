// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page behaviors.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! behaviors call at each visual-state transition. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Nothing here reaches the visitor: sinks are developer-facing only.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::behavior::anchor::AnchorOutcome;
use crate::behavior::menu::{MenuCause, MenuState};
use crate::behavior::navbar::NavbarState;
use crate::behavior::{Attach, Behavior};
use crate::node::NodeId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per behavior when the page starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachEvent {
    /// Which behavior.
    pub behavior: Behavior,
    /// Whether it attached or why not.
    pub outcome: Attach,
}

/// Emitted when an element receives its one-shot reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEvent {
    /// The revealed element.
    pub target: NodeId,
    /// Visible-area fraction at the time of the reveal.
    pub ratio: f64,
}

/// Emitted when the navbar changes state (and once at startup).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarEvent {
    /// The new state.
    pub state: NavbarState,
    /// Scroll offset that produced it.
    pub scroll_y: f64,
}

/// Emitted when the mobile menu opens or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEvent {
    /// The new state.
    pub state: MenuState,
    /// What caused the transition.
    pub cause: MenuCause,
}

/// Emitted for every anchor click the page handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorEvent<'a> {
    /// The clicked link.
    pub link: NodeId,
    /// The link's `href` value, if any.
    pub href: Option<&'a str>,
    /// What the click did.
    pub outcome: AnchorOutcome,
}

/// Emitted each time the parallax offset is applied or cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxEvent {
    /// Applied offset, or `None` when the override was cleared.
    pub offset: Option<f64>,
    /// Scroll offset the computation used.
    pub scroll_y: f64,
}

/// Emitted when a section crossing moves the active link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveLinkEvent {
    /// The section that crossed into the trigger band.
    pub section: NodeId,
    /// The link now marked active.
    pub link: NodeId,
}

/// Emitted after a touch updated the card states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchEvent {
    /// The card left active, or `None` when every card was cleared.
    pub active: Option<NodeId>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the page behaviors.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once per behavior during startup.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called when an element is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when the navbar state is written.
    fn on_navbar(&mut self, e: &NavbarEvent) {
        _ = e;
    }

    /// Called when the mobile menu opens or closes.
    fn on_menu(&mut self, e: &MenuEvent) {
        _ = e;
    }

    /// Called for each handled anchor click.
    fn on_anchor(&mut self, e: &AnchorEvent<'_>) {
        _ = e;
    }

    /// Called when the parallax offset is applied or cleared.
    fn on_parallax(&mut self, e: &ParallaxEvent) {
        _ = e;
    }

    /// Called when the active navigation link changes.
    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        _ = e;
    }

    /// Called after a touch updated the cards.
    fn on_touch(&mut self, e: &TouchEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Shared sinks
// ---------------------------------------------------------------------------

/// Lets the caller keep a handle on a sink owned by a
/// [`Page`](crate::page::Page).
///
/// ```rust,ignore
/// let recorder = Rc::new(RefCell::new(RecorderSink::new()));
/// let page = Page::with_sink(LandingConfig::new(), Rc::clone(&recorder));
/// // ... drive the page ...
/// let events = recorder.borrow().events().to_vec();
/// ```
///
/// The sink is borrowed mutably for the duration of each call. Do not hold a
/// borrow across [`Page::start`](crate::page::Page::start) or
/// [`Page::handle`](crate::page::Page::handle).
impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.borrow_mut().on_attach(e);
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.borrow_mut().on_reveal(e);
    }

    fn on_navbar(&mut self, e: &NavbarEvent) {
        self.borrow_mut().on_navbar(e);
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        self.borrow_mut().on_menu(e);
    }

    fn on_anchor(&mut self, e: &AnchorEvent<'_>) {
        self.borrow_mut().on_anchor(e);
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        self.borrow_mut().on_parallax(e);
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        self.borrow_mut().on_active_link(e);
    }

    fn on_touch(&mut self, e: &TouchEvent) {
        self.borrow_mut().on_touch(e);
    }
}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavbarEvent`].
    #[inline]
    pub fn navbar(&mut self, e: &NavbarEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navbar(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MenuEvent`].
    #[inline]
    pub fn menu(&mut self, e: &MenuEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_menu(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AnchorEvent`].
    #[inline]
    pub fn anchor(&mut self, e: &AnchorEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_anchor(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ParallaxEvent`].
    #[inline]
    pub fn parallax(&mut self, e: &ParallaxEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_parallax(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ActiveLinkEvent`].
    #[inline]
    pub fn active_link(&mut self, e: &ActiveLinkEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_active_link(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TouchEvent`].
    #[inline]
    pub fn touch(&mut self, e: &TouchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_touch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Reason;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_attach(&AttachEvent {
            behavior: Behavior::Parallax,
            outcome: Attach::NotApplicable(Reason::MissingHero),
        });
        sink.on_reveal(&RevealEvent {
            target: NodeId(3),
            ratio: 0.2,
        });
        sink.on_touch(&TouchEvent { active: None });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.navbar(&NavbarEvent {
            state: NavbarState::Scrolled,
            scroll_y: 60.0,
        });
        tracer.active_link(&ActiveLinkEvent {
            section: NodeId(1),
            link: NodeId(2),
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            revealed: Vec<NodeId>,
        }
        impl TraceSink for RecordingSink {
            fn on_reveal(&mut self, e: &RevealEvent) {
                self.revealed.push(e.target);
            }
        }

        let mut sink = RecordingSink {
            revealed: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.reveal(&RevealEvent {
            target: NodeId(9),
            ratio: 0.5,
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.revealed, &[NodeId(9)]);
    }

    #[test]
    fn shared_sink_stays_readable() {
        use alloc::vec::Vec;

        #[derive(Default)]
        struct Counter {
            touches: Vec<Option<NodeId>>,
        }
        impl TraceSink for Counter {
            fn on_touch(&mut self, e: &TouchEvent) {
                self.touches.push(e.active);
            }
        }

        let shared = Rc::new(RefCell::new(Counter::default()));
        let mut handle = Rc::clone(&shared);
        handle.on_touch(&TouchEvent {
            active: Some(NodeId(4)),
        });
        handle.on_touch(&TouchEvent { active: None });
        assert_eq!(shared.borrow().touches, [Some(NodeId(4)), None]);
    }
}
