// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Host`] implementation over a live document.
//!
//! Elements are interned the first time a query returns them and addressed
//! by their [`NodeId`] afterwards. Event targets resolve to the nearest
//! interned ancestor, falling back to the root element, so the node table
//! only grows with what the page looked up. Registrations that need a JS callback (listeners,
//! observers, frames) are queued as [`Request`]s and realized by the
//! [`PageDriver`](crate::PageDriver) once the page hands control back.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use js_sys::Array;
use landing_core::host::{EventKind, Host, IntersectionEntry, ListenTarget, ObserverOptions};
use landing_core::node::{NodeId, WatcherId};
use log::warn;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

/// A registration queued by the page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Request {
    Listen(ListenTarget, EventKind),
    Observe(WatcherId, ObserverOptions, Vec<NodeId>),
    Frame,
}

/// Document access for the page behaviors.
pub struct DomHost {
    window: Window,
    document: Document,
    nodes: Vec<Element>,
    root: NodeId,
    observers: Vec<(WatcherId, IntersectionObserver)>,
    requests: Vec<Request>,
}

impl core::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomHost")
            .field("nodes_len", &self.nodes.len())
            .field("observers_len", &self.observers.len())
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}

impl DomHost {
    /// Creates a host over `window` and its document.
    ///
    /// # Errors
    ///
    /// Fails when the window has no document.
    pub fn new(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;
        Ok(Self {
            window,
            document,
            nodes: vec![root],
            root: NodeId(0),
            observers: Vec::new(),
            requests: Vec::new(),
        })
    }

    /// Returns the window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the handle for `element`, assigning one on first sight.
    pub fn intern(&mut self, element: Element) -> NodeId {
        if let Some(node) = self.lookup(&element) {
            return node;
        }
        self.nodes.push(element);
        NodeId(u32::try_from(self.nodes.len() - 1).unwrap_or(u32::MAX))
    }

    /// Returns the handle of an already interned `element`.
    #[must_use]
    pub fn lookup(&self, element: &Element) -> Option<NodeId> {
        let idx = self.nodes.iter().position(|n| n == element)?;
        Some(NodeId(u32::try_from(idx).unwrap_or(u32::MAX)))
    }

    /// Returns the handle of `element` or of its nearest interned ancestor.
    ///
    /// Elements outside every interned subtree resolve to the root element.
    #[must_use]
    pub fn resolve(&self, element: &Element) -> NodeId {
        nearest_known(
            element.clone(),
            |el| self.lookup(el),
            |el: &Element| el.parent_element(),
        )
        .unwrap_or(self.root)
    }

    /// Returns the element behind `node`.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0 as usize)
    }

    pub(crate) fn take_requests(&mut self) -> Vec<Request> {
        core::mem::take(&mut self.requests)
    }

    pub(crate) fn event_target(&self, target: ListenTarget) -> Option<EventTarget> {
        match target {
            ListenTarget::Window => Some(self.window.clone().into()),
            ListenTarget::Document => Some(self.document.clone().into()),
            ListenTarget::Node(node) => self.element(node).map(|el| el.clone().into()),
        }
    }

    /// Resolves the element an event was dispatched to.
    pub(crate) fn event_node(&self, event: &Event) -> Option<NodeId> {
        let element = event.target()?.dyn_into::<Element>().ok()?;
        Some(self.resolve(&element))
    }

    /// Converts an `IntersectionObserver` callback batch. Entries for
    /// elements that were never interned are dropped.
    pub(crate) fn entries(&self, records: &Array) -> Vec<IntersectionEntry> {
        records
            .iter()
            .filter_map(|record| record.dyn_into::<IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                Some(IntersectionEntry {
                    target: self.lookup(&entry.target())?,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
            })
            .collect()
    }

    /// Starts `observer` on `targets` and keeps it for later unobserves.
    pub(crate) fn attach_observer(
        &mut self,
        watcher: WatcherId,
        observer: IntersectionObserver,
        targets: &[NodeId],
    ) {
        for &node in targets {
            if let Some(el) = self.element(node) {
                observer.observe(el);
            }
        }
        self.observers.push((watcher, observer));
    }

    fn html(&self, node: NodeId) -> Option<&HtmlElement> {
        self.element(node)?.dyn_ref::<HtmlElement>()
    }
}

/// Walks from `start` up through `parent` and returns the first handle
/// `known` reports.
fn nearest_known<T>(
    start: T,
    known: impl Fn(&T) -> Option<NodeId>,
    parent: impl Fn(&T) -> Option<T>,
) -> Option<NodeId> {
    let mut current = Some(start);
    while let Some(item) = current {
        if let Some(node) = known(&item) {
            return Some(node);
        }
        current = parent(&item);
    }
    None
}

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        warn!("{what} failed: {err:?}");
    }
}

impl Host for DomHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default()
    }

    fn query(&mut self, selector: &str) -> Option<NodeId> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|el| self.intern(el)),
            Err(err) => {
                warn!("invalid selector {selector:?}: {err:?}");
                None
            }
        }
    }

    fn query_all(&mut self, selector: &str) -> Vec<NodeId> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                warn!("invalid selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|el| self.intern(el))
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        let id = self.element(node)?.id();
        (!id.is_empty()).then_some(id)
    }

    fn element_by_id(&mut self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let element = self.document.get_element_by_id(id)?;
        Some(self.intern(element))
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        match (self.element(ancestor), self.element(node)) {
            (Some(ancestor), Some(node)) => {
                let node: &web_sys::Node = node;
                ancestor.contains(Some(node))
            }
            _ => false,
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element(node) {
            warn_on_err("classList.add", el.class_list().add_1(class));
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element(node) {
            warn_on_err("classList.remove", el.class_list().remove_1(class));
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.html(node) {
            warn_on_err("style.setProperty", el.style().set_property(property, value));
        }
    }

    fn remove_style(&mut self, node: NodeId, property: &str) {
        if let Some(el) = self.html(node) {
            warn_on_err("style.removeProperty", el.style().remove_property(property));
        }
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        if let Some(el) = self.element(node) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn push_history(&mut self, url: &str) {
        match self.window.history() {
            Ok(history) => warn_on_err(
                "history.pushState",
                history.push_state_with_url(&JsValue::NULL, "", Some(url)),
            ),
            Err(err) => warn!("no history: {err:?}"),
        }
    }

    fn listen(&mut self, target: ListenTarget, kind: EventKind) {
        self.requests.push(Request::Listen(target, kind));
    }

    fn observe(&mut self, watcher: WatcherId, options: ObserverOptions, targets: &[NodeId]) {
        self.requests
            .push(Request::Observe(watcher, options, targets.to_vec()));
    }

    fn unobserve(&mut self, watcher: WatcherId, target: NodeId) {
        let Some(el) = self.element(target) else {
            return;
        };
        for (_, observer) in self.observers.iter().filter(|(w, _)| *w == watcher) {
            observer.unobserve(el);
        }
    }

    fn request_frame(&mut self) {
        if !self.requests.contains(&Request::Frame) {
            self.requests.push(Request::Frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tree: 0 <- 1 <- 2 <- 3, with 4 detached.
    fn parent(n: &u32) -> Option<u32> {
        match *n {
            1..=3 => Some(n - 1),
            _ => None,
        }
    }

    #[test]
    fn resolves_to_the_closest_known_ancestor() {
        let known = |n: &u32| (*n == 1).then_some(NodeId(7));
        assert_eq!(nearest_known(3, known, parent), Some(NodeId(7)));
        assert_eq!(nearest_known(1, known, parent), Some(NodeId(7)));
    }

    #[test]
    fn prefers_the_element_itself() {
        let known = |n: &u32| match *n {
            1 => Some(NodeId(1)),
            3 => Some(NodeId(3)),
            _ => None,
        };
        assert_eq!(nearest_known(3, known, parent), Some(NodeId(3)));
        assert_eq!(nearest_known(2, known, parent), Some(NodeId(1)));
    }

    #[test]
    fn unknown_chains_resolve_to_nothing() {
        let known = |n: &u32| (*n == 1).then_some(NodeId(1));
        assert_eq!(nearest_known(0, known, parent), None);
        assert_eq!(nearest_known(4, known, parent), None);
    }
}
