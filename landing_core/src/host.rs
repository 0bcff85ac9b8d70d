// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for document and platform integrations.
//!
//! Behaviors never talk to a browser directly. Everything they read, write,
//! or subscribe to goes through the [`Host`] trait:
//!
//! - **Reads**: scroll position, viewport width, document structure (ids,
//!   attributes, class membership, containment).
//!
//! - **Writes**: class toggles, a single inline style property, smooth
//!   scrolling, and history entries without reload.
//!
//! - **Capabilities**: event listener registration ([`Host::listen`]),
//!   visibility observation ([`Host::observe`]), and next-frame scheduling
//!   ([`Host::request_frame`]). The host later feeds the resulting events
//!   back through [`Page::handle`](crate::page::Page::handle).
//!
//! # Crate boundaries
//!
//! `landing_core` owns the behaviors and this contract. The web backend
//! implements [`Host`] over a live DOM; the harness implements it over an
//! in-memory document with deterministic geometry.

use alloc::string::String;
use alloc::vec::Vec;

use crate::node::{NodeId, WatcherId};

/// Where an event listener is installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// The global window (scroll, resize).
    Window,
    /// The document (outside clicks, key presses, touches).
    Document,
    /// A specific element.
    Node(NodeId),
}

/// Which kind of platform event a listener receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Vertical scroll position changed.
    Scroll,
    /// Viewport was resized.
    Resize,
    /// Pointer activation.
    Click,
    /// Key press.
    KeyDown,
    /// Touch start. Always registered as passive.
    TouchStart,
}

impl EventKind {
    /// Returns the DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::TouchStart => "touchstart",
        }
    }

    /// Returns `true` if listeners of this kind never cancel the event.
    #[must_use]
    pub const fn is_passive(self) -> bool {
        matches!(self, Self::Scroll | Self::Resize | Self::TouchStart)
    }
}

/// Vertical margins applied to the viewport before computing intersections.
///
/// Values are percentages of the viewport height. Negative values shrink the
/// observation root, so `top: -10.0, bottom: -70.0` leaves a band covering
/// 10%–30% of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RootMargin {
    /// Top margin, percent of viewport height.
    pub top: f64,
    /// Bottom margin, percent of viewport height.
    pub bottom: f64,
}

impl RootMargin {
    /// The unmodified viewport.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// Creates a margin from top and bottom percentages.
    #[must_use]
    pub const fn vertical_percent(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Renders the margin in `IntersectionObserver` `rootMargin` syntax.
    #[must_use]
    pub fn to_css(&self) -> String {
        alloc::format!("{}% 0px {}% 0px", self.top, self.bottom)
    }

    /// Returns the observed band `[top, bottom)` in document coordinates for
    /// a viewport starting at `scroll_y` with height `viewport_height`.
    #[must_use]
    pub fn band(&self, scroll_y: f64, viewport_height: f64) -> (f64, f64) {
        let top = scroll_y - self.top * viewport_height / 100.0;
        let bottom = scroll_y + viewport_height + self.bottom * viewport_height / 100.0;
        (top, bottom)
    }
}

/// Trigger options for one visibility observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible-area fraction at which the observer reports a crossing.
    pub threshold: f64,
    /// Margins applied to the viewport.
    pub root_margin: RootMargin,
}

/// One visibility observation delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// The observed element.
    pub target: NodeId,
    /// Whether any part of the element intersects the observation root.
    pub is_intersecting: bool,
    /// Fraction of the element's area inside the observation root.
    pub ratio: f64,
}

/// Document and platform capabilities that behaviors rely on.
///
/// Both the DOM host and the in-memory harness implement this trait,
/// enabling the same behaviors to run in a browser and under test.
///
/// Writes on nodes the host does not know are ignored. Queries that match
/// nothing return `None` or an empty list; they never fail.
pub trait Host {
    /// Returns the vertical scroll offset of the viewport.
    fn scroll_y(&self) -> f64;

    /// Returns the viewport width.
    fn viewport_width(&self) -> f64;

    /// Returns the first element matching `selector`.
    fn query(&mut self, selector: &str) -> Option<NodeId>;

    /// Returns every element matching `selector`, in document order.
    fn query_all(&mut self, selector: &str) -> Vec<NodeId>;

    /// Returns the value of attribute `name` on `node`.
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Returns the `id` of `node`, if it has a non-empty one.
    fn element_id(&self, node: NodeId) -> Option<String>;

    /// Returns the element whose `id` is `id`.
    fn element_by_id(&mut self, id: &str) -> Option<NodeId>;

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Returns `true` if `node` carries `class`.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Adds `class` to `node`.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Removes `class` from `node`.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Sets an inline style property on `node`.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Clears an inline style property on `node`, restoring stylesheet rules.
    fn remove_style(&mut self, node: NodeId, property: &str);

    /// Smoothly scrolls so the top edge of `node` aligns with the viewport top.
    fn scroll_into_view(&mut self, node: NodeId);

    /// Pushes `url` onto the session history without reloading.
    fn push_history(&mut self, url: &str);

    /// Installs a listener delivering `kind` events from `target`.
    fn listen(&mut self, target: ListenTarget, kind: EventKind);

    /// Starts observing `targets` under `watcher` with the given options.
    ///
    /// The host reports an initial entry for every target, then one entry
    /// each time a target crosses the threshold or enters/leaves the root.
    fn observe(&mut self, watcher: WatcherId, options: ObserverOptions, targets: &[NodeId]);

    /// Stops observing `target` under `watcher`.
    fn unobserve(&mut self, watcher: WatcherId, target: NodeId);

    /// Schedules one [`PageEvent::AnimationFrame`](crate::event::PageEvent)
    /// before the next repaint.
    fn request_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_css_form() {
        let margin = RootMargin::vertical_percent(-10.0, -70.0);
        assert_eq!(margin.to_css(), "-10% 0px -70% 0px");
        assert_eq!(RootMargin::ZERO.to_css(), "0% 0px 0% 0px");
    }

    #[test]
    fn negative_margins_shrink_band() {
        let margin = RootMargin::vertical_percent(-10.0, -70.0);
        let (top, bottom) = margin.band(1000.0, 800.0);
        assert_eq!(top, 1080.0, "top edge sits 10% below the viewport top");
        assert_eq!(bottom, 1240.0, "bottom edge sits 70% above the viewport bottom");
    }

    #[test]
    fn zero_margin_band_is_viewport() {
        let (top, bottom) = RootMargin::ZERO.band(250.0, 600.0);
        assert_eq!((top, bottom), (250.0, 850.0));
    }

    #[test]
    fn passive_kinds() {
        assert!(EventKind::Scroll.is_passive());
        assert!(EventKind::TouchStart.is_passive());
        assert!(!EventKind::Click.is_passive());
        assert!(!EventKind::KeyDown.is_passive());
        assert_eq!(EventKind::KeyDown.as_str(), "keydown");
    }
}
