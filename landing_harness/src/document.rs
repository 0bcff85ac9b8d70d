// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document implementing [`Host`].
//!
//! [`FakeDocument`] stores elements with a tag, id, classes, attributes,
//! parent, and a vertical box in document coordinates. Intersections are
//! computed from those boxes against the margin-adjusted viewport, so
//! observer behavior follows page geometry deterministically.
//!
//! Every write is also appended to a call log ([`HostCall`]) so tests can
//! assert on ordering.

use std::collections::BTreeMap;

use kurbo::Rect;
use landing_core::event::PageEvent;
use landing_core::host::{EventKind, Host, IntersectionEntry, ListenTarget, ObserverOptions};
use landing_core::node::{NodeId, WatcherId};

use crate::selector::{self, NodeRef};

/// A write or registration performed through [`Host`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    /// [`Host::add_class`].
    AddClass(NodeId, String),
    /// [`Host::remove_class`].
    RemoveClass(NodeId, String),
    /// [`Host::set_style`].
    SetStyle(NodeId, String, String),
    /// [`Host::remove_style`].
    RemoveStyle(NodeId, String),
    /// [`Host::scroll_into_view`].
    ScrollIntoView(NodeId),
    /// [`Host::push_history`].
    PushHistory(String),
    /// [`Host::listen`].
    Listen(ListenTarget, EventKind),
    /// [`Host::observe`].
    Observe(WatcherId, Vec<NodeId>),
    /// [`Host::unobserve`].
    Unobserve(WatcherId, NodeId),
    /// [`Host::request_frame`].
    RequestFrame,
}

#[derive(Clone, Debug)]
pub(crate) struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    parent: Option<NodeId>,
    rect: Rect,
    styles: BTreeMap<String, String>,
}

impl FakeNode {
    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        if name == "id" {
            return self.id.as_deref();
        }
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Last reported state of one observed target: `(is_intersecting, at_threshold)`.
type Crossing = (bool, bool);

#[derive(Clone, Debug)]
struct FakeObserver {
    watcher: WatcherId,
    options: ObserverOptions,
    /// Observed targets in registration order, with their last reported state.
    targets: Vec<(NodeId, Option<Crossing>)>,
}

/// An in-memory document with viewport geometry.
#[derive(Clone, Debug)]
pub struct FakeDocument {
    nodes: Vec<FakeNode>,
    viewport_width: f64,
    viewport_height: f64,
    scroll_y: f64,
    listeners: Vec<(ListenTarget, EventKind)>,
    observers: Vec<FakeObserver>,
    history: Vec<String>,
    frame_pending: bool,
    pending_scroll: Option<f64>,
    calls: Vec<HostCall>,
}

impl FakeDocument {
    /// Creates an empty document with the given viewport size.
    #[must_use]
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            viewport_width,
            viewport_height,
            scroll_y: 0.0,
            listeners: Vec::new(),
            observers: Vec::new(),
            history: Vec::new(),
            frame_pending: false,
            pending_scroll: None,
            calls: Vec::new(),
        }
    }

    /// Starts building a new element with tag `tag`.
    pub fn create(&mut self, tag: &str) -> ElementBuilder<'_> {
        ElementBuilder {
            doc: self,
            node: FakeNode {
                tag: tag.to_ascii_lowercase(),
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
                parent: None,
                rect: Rect::ZERO,
                styles: BTreeMap::new(),
            },
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the viewport height.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Returns the largest scroll offset the document allows.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        let bottom = self.nodes.iter().map(|n| n.rect.y1).fold(0.0, f64::max);
        (bottom - self.viewport_height).max(0.0)
    }

    /// Moves the viewport, clamped to the scrollable range.
    ///
    /// This only changes geometry; use [`Harness`](crate::Harness) to also
    /// deliver the scroll event.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Resizes the viewport.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Returns the parent of `node`.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    /// Returns the box of `node` in document coordinates.
    #[must_use]
    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.node(node).map(|n| n.rect)
    }

    /// Returns the classes of `node`.
    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<&str> {
        self.node(node)
            .map(|n| n.classes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns every element carrying `class`, in document order.
    #[must_use]
    pub fn with_class(&self, class: &str) -> Vec<NodeId> {
        self.ids()
            .filter(|&id| self.node(id).is_some_and(|n| n.has_class(class)))
            .collect()
    }

    /// Returns an inline style property of `node`.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    /// Returns the pushed history entries, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns every installed listener, including duplicates.
    #[must_use]
    pub fn listeners(&self) -> &[(ListenTarget, EventKind)] {
        &self.listeners
    }

    /// Returns `true` if a `kind` listener is installed on `target`.
    #[must_use]
    pub fn listens(&self, target: ListenTarget, kind: EventKind) -> bool {
        self.listeners.contains(&(target, kind))
    }

    /// Returns the targets currently observed by `watcher`.
    #[must_use]
    pub fn observed(&self, watcher: WatcherId) -> Vec<NodeId> {
        self.observers
            .iter()
            .filter(|o| o.watcher == watcher)
            .flat_map(|o| o.targets.iter().map(|&(node, _)| node))
            .collect()
    }

    /// Returns `true` if a frame was requested and has not yet run.
    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Returns the log of writes and registrations, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Returns how many logged calls satisfy `pred`.
    pub fn count_calls(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    /// Clears the call log.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Takes the pending frame request, if any.
    pub(crate) fn take_frame(&mut self) -> bool {
        core::mem::take(&mut self.frame_pending)
    }

    /// Takes the destination of the last smooth scroll, if any.
    pub(crate) fn take_pending_scroll(&mut self) -> Option<f64> {
        self.pending_scroll.take()
    }

    /// Returns the element and its ancestors, innermost first.
    pub(crate) fn ancestry(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = self.node(node).map(|_| node);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.parent(current);
        }
        path
    }

    /// Computes the intersection entries that changed since the last
    /// delivery, one batch per observer.
    pub(crate) fn take_intersections(&mut self) -> Vec<PageEvent> {
        let mut batches = Vec::new();
        for idx in 0..self.observers.len() {
            let options = self.observers[idx].options;
            let (band_top, band_bottom) = options
                .root_margin
                .band(self.scroll_y, self.viewport_height);
            let root = Rect::new(0.0, band_top, self.viewport_width, band_bottom);

            let mut entries = Vec::new();
            let targets: Vec<_> = self.observers[idx].targets.clone();
            for (slot, (target, last)) in targets.into_iter().enumerate() {
                let Some(rect) = self.rect(target) else {
                    continue;
                };
                let (is_intersecting, ratio) = intersect(rect, root, self.viewport_width);
                let state = (is_intersecting, ratio >= options.threshold);
                if last == Some(state) {
                    continue;
                }
                self.observers[idx].targets[slot].1 = Some(state);
                entries.push(IntersectionEntry {
                    target,
                    is_intersecting,
                    ratio,
                });
            }
            if !entries.is_empty() {
                batches.push(PageEvent::Intersections {
                    watcher: self.observers[idx].watcher,
                    entries,
                });
            }
        }
        batches
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&FakeNode> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut FakeNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(u32::try_from(i).unwrap_or(u32::MAX)))
    }

    /// Returns the children of `parent` (top-level nodes for `None`), in
    /// document order.
    pub(crate) fn children(&self, parent: Option<NodeId>) -> impl Iterator<Item = NodeId> + '_ {
        self.ids()
            .filter(move |&id| self.node(id).is_some_and(|n| n.parent == parent))
    }

    /// Returns every node matching `selector`, in document order. An
    /// unparsable selector matches nothing.
    fn select(&self, selector: &str) -> Vec<NodeId> {
        let Some(list) = selector::parse(selector) else {
            return Vec::new();
        };
        self.ids()
            .filter(|&id| NodeRef::new(self, id).is_some_and(|el| el.matches(&list)))
            .collect()
    }
}

/// Returns `(is_intersecting, ratio)` for `target` against `root`.
///
/// Elements are laid out across the full viewport width, so only the
/// vertical overlap matters.
fn intersect(target: Rect, root: Rect, width: f64) -> (bool, f64) {
    let target = Rect::new(0.0, target.y0, width, target.y1);
    let overlap = target.intersect(root);
    let area = target.area();
    if area <= 0.0 {
        return (false, 0.0);
    }
    let visible = overlap.area();
    (visible > 0.0, visible / area)
}

impl Host for FakeDocument {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn query(&mut self, selector: &str) -> Option<NodeId> {
        self.select(selector).into_iter().next()
    }

    fn query_all(&mut self, selector: &str) -> Vec<NodeId> {
        self.select(selector)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node).and_then(|n| n.attr(name)).map(String::from)
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.node(node)
            .and_then(|n| n.id.clone())
            .filter(|id| !id.is_empty())
    }

    fn element_by_id(&mut self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.ids()
            .find(|&n| self.node(n).and_then(|n| n.id.as_deref()) == Some(id))
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestry(node).contains(&ancestor)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).is_some_and(|n| n.has_class(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.calls.push(HostCall::AddClass(node, class.into()));
        if let Some(n) = self.node_mut(node)
            && !n.classes.iter().any(|c| c == class)
        {
            n.classes.push(class.into());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.calls.push(HostCall::RemoveClass(node, class.into()));
        if let Some(n) = self.node_mut(node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.calls
            .push(HostCall::SetStyle(node, property.into(), value.into()));
        if let Some(n) = self.node_mut(node) {
            n.styles.insert(property.into(), value.into());
        }
    }

    fn remove_style(&mut self, node: NodeId, property: &str) {
        self.calls.push(HostCall::RemoveStyle(node, property.into()));
        if let Some(n) = self.node_mut(node) {
            n.styles.remove(property);
        }
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        self.calls.push(HostCall::ScrollIntoView(node));
        if let Some(rect) = self.rect(node) {
            self.pending_scroll = Some(rect.y0);
        }
    }

    fn push_history(&mut self, url: &str) {
        self.calls.push(HostCall::PushHistory(url.into()));
        self.history.push(url.into());
    }

    fn listen(&mut self, target: ListenTarget, kind: EventKind) {
        self.calls.push(HostCall::Listen(target, kind));
        self.listeners.push((target, kind));
    }

    fn observe(&mut self, watcher: WatcherId, options: ObserverOptions, targets: &[NodeId]) {
        self.calls.push(HostCall::Observe(watcher, targets.to_vec()));
        let idx = match self.observers.iter().position(|o| o.watcher == watcher) {
            Some(idx) => idx,
            None => {
                self.observers.push(FakeObserver {
                    watcher,
                    options,
                    targets: Vec::new(),
                });
                self.observers.len() - 1
            }
        };
        let observer = &mut self.observers[idx];
        for &target in targets {
            if !observer.targets.iter().any(|&(n, _)| n == target) {
                observer.targets.push((target, None));
            }
        }
    }

    fn unobserve(&mut self, watcher: WatcherId, target: NodeId) {
        self.calls.push(HostCall::Unobserve(watcher, target));
        for observer in self.observers.iter_mut().filter(|o| o.watcher == watcher) {
            observer.targets.retain(|&(n, _)| n != target);
        }
    }

    fn request_frame(&mut self) {
        self.calls.push(HostCall::RequestFrame);
        self.frame_pending = true;
    }
}

/// Builds one element of a [`FakeDocument`].
#[derive(Debug)]
pub struct ElementBuilder<'a> {
    doc: &'a mut FakeDocument,
    node: FakeNode,
}

impl ElementBuilder<'_> {
    /// Sets the `id`.
    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.node.id = Some(id.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.node.classes.push(class.into());
        self
    }

    /// Sets an attribute. `id` is routed to [`id`](Self::id).
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if name == "id" {
            return self.id(value);
        }
        self.node.attrs.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    /// Shorthand for `attr("href", href)`.
    #[must_use]
    pub fn href(self, href: &str) -> Self {
        self.attr("href", href)
    }

    /// Places the element inside `parent`.
    #[must_use]
    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.node.parent = Some(parent);
        self
    }

    /// Sets the element's vertical box in document coordinates.
    #[must_use]
    pub fn span(mut self, top: f64, height: f64) -> Self {
        self.node.rect = Rect::new(0.0, top, 1.0, top + height);
        self
    }

    /// Appends the element to the document and returns its handle.
    pub fn build(self) -> NodeId {
        let id = NodeId(u32::try_from(self.doc.nodes.len()).unwrap_or(u32::MAX));
        self.doc.nodes.push(self.node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_link() -> (FakeDocument, NodeId, NodeId) {
        let mut doc = FakeDocument::new(1024.0, 800.0);
        let nav = doc.create("nav").class("navbar").span(0.0, 70.0).build();
        let link = doc.create("a").href("#about").child_of(nav).build();
        (doc, nav, link)
    }

    #[test]
    fn query_follows_document_order() {
        let (mut doc, nav, link) = doc_with_link();
        assert_eq!(doc.query(".navbar"), Some(nav));
        assert_eq!(doc.query_all("a[href^=\"#\"]"), vec![link]);
        assert_eq!(doc.query("#missing"), None);
    }

    #[test]
    fn containment_walks_parents() {
        let (doc, nav, link) = doc_with_link();
        assert!(doc.contains(nav, link));
        assert!(doc.contains(nav, nav), "a node contains itself");
        assert!(!doc.contains(link, nav));
    }

    #[test]
    fn scroll_is_clamped_to_document() {
        let mut doc = FakeDocument::new(1024.0, 800.0);
        doc.create("section").span(0.0, 2000.0).build();
        doc.set_scroll_y(5000.0);
        assert_eq!(doc.scroll_y(), 1200.0);
        doc.set_scroll_y(-40.0);
        assert_eq!(doc.scroll_y(), 0.0);
    }

    #[test]
    fn intersections_report_only_changes() {
        let mut doc = FakeDocument::new(1024.0, 800.0);
        let near = doc.create("div").span(100.0, 100.0).build();
        let far = doc.create("div").span(1800.0, 100.0).build();
        doc.observe(
            WatcherId::REVEAL,
            ObserverOptions {
                threshold: 0.5,
                root_margin: landing_core::host::RootMargin::ZERO,
            },
            &[near, far],
        );

        let first = doc.take_intersections();
        let PageEvent::Intersections { entries, .. } = &first[0] else {
            panic!("expected an intersection batch");
        };
        assert_eq!(entries.len(), 2, "initial delivery covers every target");
        assert!(entries[0].is_intersecting);
        assert_eq!(entries[0].ratio, 1.0);
        assert!(!entries[1].is_intersecting);

        assert!(doc.take_intersections().is_empty(), "nothing moved");

        doc.set_scroll_y(1200.0);
        let moved = doc.take_intersections();
        let PageEvent::Intersections { entries, .. } = &moved[0] else {
            panic!("expected an intersection batch");
        };
        assert_eq!(entries.len(), 2, "both targets crossed");
        assert!(!entries[0].is_intersecting);
        assert!(entries[1].is_intersecting);
    }

    #[test]
    fn unobserved_targets_stop_reporting() {
        let mut doc = FakeDocument::new(1024.0, 800.0);
        let el = doc.create("div").span(0.0, 100.0).build();
        let options = ObserverOptions {
            threshold: 0.1,
            root_margin: landing_core::host::RootMargin::ZERO,
        };
        doc.observe(WatcherId::REVEAL, options, &[el]);
        doc.unobserve(WatcherId::REVEAL, el);
        assert!(doc.take_intersections().is_empty());
        assert!(doc.observed(WatcherId::REVEAL).is_empty());
    }
}
