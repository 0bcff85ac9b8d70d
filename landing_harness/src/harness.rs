// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic event driver.
//!
//! [`Harness`] owns a [`FakeDocument`] and a [`Page`] and plays the role of
//! the browser: it delivers events only to listeners the page installed,
//! bubbles clicks and touches from the target up to the document, runs
//! requested animation frames, and flushes visibility observations when a
//! frame is rendered. Trace events land in a shared
//! [`RecorderSink`].
//!
//! Smooth scrolls requested by the page complete instantly on the next
//! delivered click, followed by a regular scroll event.

use std::cell::RefCell;
use std::rc::Rc;

use landing_core::config::LandingConfig;
use landing_core::event::{EventResponse, PageEvent};
use landing_core::host::{EventKind, ListenTarget};
use landing_core::node::NodeId;
use landing_core::page::{Page, StartOutcome};
use landing_debug::{RecordedEvent, RecorderSink};

use crate::document::FakeDocument;

/// Drives a [`Page`] against a [`FakeDocument`].
#[derive(Debug)]
pub struct Harness {
    doc: FakeDocument,
    page: Page,
    recorder: Rc<RefCell<RecorderSink>>,
    /// Click targets whose default action was not prevented.
    followed: Vec<NodeId>,
}

impl Harness {
    /// Creates a harness with the default configuration.
    #[must_use]
    pub fn new(doc: FakeDocument) -> Self {
        Self::with_config(doc, LandingConfig::new())
    }

    /// Creates a harness with a custom configuration.
    #[must_use]
    pub fn with_config(doc: FakeDocument, config: LandingConfig) -> Self {
        let recorder = Rc::new(RefCell::new(RecorderSink::new()));
        let page = Page::with_sink(config, Rc::clone(&recorder));
        Self {
            doc,
            page,
            recorder,
            followed: Vec::new(),
        }
    }

    /// Returns the document.
    #[must_use]
    pub fn doc(&self) -> &FakeDocument {
        &self.doc
    }

    /// Returns the document for direct edits.
    pub fn doc_mut(&mut self) -> &mut FakeDocument {
        &mut self.doc
    }

    /// Returns the page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Returns a copy of every trace event so far.
    #[must_use]
    pub fn trace(&self) -> Vec<RecordedEvent> {
        self.recorder.borrow().events().to_vec()
    }

    /// Returns the recorder the page reports to.
    #[must_use]
    pub fn recorder(&self) -> &Rc<RefCell<RecorderSink>> {
        &self.recorder
    }

    /// Clears the recorded trace.
    pub fn clear_trace(&self) {
        self.recorder.borrow_mut().clear();
    }

    /// Returns click targets whose default action ran, oldest first.
    #[must_use]
    pub fn followed(&self) -> &[NodeId] {
        &self.followed
    }

    /// Starts the page, then delivers the initial observations.
    pub fn start(&mut self) -> StartOutcome {
        let outcome = self.page.start(&mut self.doc);
        self.flush_intersections();
        outcome
    }

    /// Scrolls to `y` and fires a scroll event if the page listens for one.
    pub fn scroll_to(&mut self, y: f64) {
        self.doc.set_scroll_y(y);
        if self.doc.listens(ListenTarget::Window, EventKind::Scroll) {
            self.page.handle(&PageEvent::Scroll, &mut self.doc);
        }
    }

    /// Scrolls to `y`, then renders one frame.
    pub fn scroll_and_render(&mut self, y: f64) {
        self.scroll_to(y);
        self.render_frame();
    }

    /// Resizes the viewport and fires a resize event if the page listens
    /// for one.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.doc.set_viewport(width, height);
        if self.doc.listens(ListenTarget::Window, EventKind::Resize) {
            self.page.handle(&PageEvent::Resize, &mut self.doc);
        }
    }

    /// Clicks `target`, bubbling through every click listener on its
    /// ancestry and then the document.
    ///
    /// Returns the combined response. When the default action was not
    /// prevented, `target` is recorded in [`followed`](Self::followed).
    pub fn click(&mut self, target: NodeId) -> EventResponse {
        let response = self.bubble(target, EventKind::Click, |target, listener| {
            PageEvent::Click { target, listener }
        });
        if !response.default_prevented {
            self.followed.push(target);
        }
        if let Some(y) = self.doc.take_pending_scroll() {
            self.scroll_to(y);
        }
        response
    }

    /// Touches `target`, bubbling like [`click`](Self::click).
    pub fn touch(&mut self, target: NodeId) -> EventResponse {
        self.bubble(target, EventKind::TouchStart, |target, listener| {
            PageEvent::TouchStart { target, listener }
        })
    }

    /// Presses `key` with focus anywhere in the document.
    pub fn key_down(&mut self, key: &str) -> EventResponse {
        if !self.doc.listens(ListenTarget::Document, EventKind::KeyDown) {
            return EventResponse::PASS;
        }
        let event = PageEvent::KeyDown { key: key.into() };
        self.page.handle(&event, &mut self.doc)
    }

    /// Runs the pending animation frame, if any, then delivers changed
    /// visibility observations.
    pub fn render_frame(&mut self) {
        if self.doc.take_frame() {
            self.page.handle(&PageEvent::AnimationFrame, &mut self.doc);
        }
        self.flush_intersections();
    }

    /// Delivers an arbitrary event, bypassing listener checks.
    pub fn dispatch(&mut self, event: &PageEvent) -> EventResponse {
        self.page.handle(event, &mut self.doc)
    }

    fn flush_intersections(&mut self) {
        for batch in self.doc.take_intersections() {
            self.page.handle(&batch, &mut self.doc);
        }
    }

    fn bubble(
        &mut self,
        target: NodeId,
        kind: EventKind,
        event: impl Fn(NodeId, ListenTarget) -> PageEvent,
    ) -> EventResponse {
        let mut listeners: Vec<ListenTarget> = self
            .doc
            .ancestry(target)
            .into_iter()
            .map(ListenTarget::Node)
            .collect();
        listeners.push(ListenTarget::Document);

        let mut response = EventResponse::PASS;
        for listener in listeners {
            if !self.doc.listens(listener, kind) {
                continue;
            }
            let handled = self.page.handle(&event(target, listener), &mut self.doc);
            response = response.merge(handled);
            if response.propagation_stopped {
                break;
            }
        }
        response
    }
}
