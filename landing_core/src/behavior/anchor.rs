// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth same-page anchor navigation.
//!
//! A click on a same-document link cancels the jump, closes the mobile menu,
//! smoothly scrolls the destination to the viewport top, and records the
//! fragment in history without reloading.
//!
//! A link whose destination id does not exist still has its default
//! navigation cancelled; nothing scrolls and history is left alone. The
//! outcome is reported as [`AnchorOutcome::MissingTarget`] so dead links show
//! up in diagnostics.

use alloc::vec::Vec;

use crate::config::LandingConfig;
use crate::event::EventResponse;
use crate::host::Host;
use crate::node::NodeId;
use crate::trace::{AnchorEvent, Tracer};

use super::Reason;
use super::menu::{MenuCause, close_menu};

/// Where an `href` points, from the page's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Empty, the bare `#` marker, or off-document: leave the click alone.
    Default,
    /// A same-document fragment; holds the id without the leading `#`.
    Fragment(&'a str),
}

impl<'a> Destination<'a> {
    /// Classifies an `href` attribute value.
    #[must_use]
    pub fn of(href: Option<&'a str>) -> Self {
        match href {
            None | Some("" | "#") => Self::Default,
            Some(href) if href.starts_with("http") => Self::Default,
            Some(href) => match href.strip_prefix('#') {
                Some(id) => Self::Fragment(id),
                None => Self::Default,
            },
        }
    }
}

/// What an anchor click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorOutcome {
    /// Default navigation was left alone.
    Passed,
    /// Scrolled to the destination and pushed a history entry.
    Navigated {
        /// The destination element.
        target: NodeId,
        /// Whether an open mobile menu was closed first.
        closed_menu: bool,
    },
    /// Default navigation was cancelled but the destination does not exist.
    MissingTarget,
}

/// Intercepts clicks on same-document links.
#[derive(Clone, Debug)]
pub struct AnchorNav {
    links: Vec<NodeId>,
    navbar: Option<NodeId>,
    menu_class: &'static str,
}

impl AnchorNav {
    /// Attaches to `links`.
    ///
    /// Fails with [`Reason::NoLinks`] when there are none.
    pub fn attach(
        links: &[NodeId],
        navbar: Option<NodeId>,
        config: &LandingConfig,
    ) -> Result<Self, Reason> {
        if links.is_empty() {
            return Err(Reason::NoLinks);
        }
        Ok(Self {
            links: links.to_vec(),
            navbar,
            menu_class: config.classes.menu_open,
        })
    }

    /// The links this behavior listens on.
    #[must_use]
    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// Returns `true` if `node` is one of the handled links.
    #[must_use]
    pub fn handles(&self, node: NodeId) -> bool {
        self.links.contains(&node)
    }

    /// Handles a click on `link`.
    pub fn on_click(
        &self,
        link: NodeId,
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) -> EventResponse {
        let href = host.attribute(link, "href");
        let (outcome, response) = match Destination::of(href.as_deref()) {
            Destination::Default => (AnchorOutcome::Passed, EventResponse::PASS),
            Destination::Fragment(id) => match host.element_by_id(id) {
                None => (AnchorOutcome::MissingTarget, EventResponse::PREVENT_DEFAULT),
                Some(target) => {
                    let closed_menu = self.navbar.is_some_and(|navbar| {
                        close_menu(
                            host,
                            navbar,
                            self.menu_class,
                            MenuCause::Navigation,
                            tracer,
                        )
                    });
                    host.scroll_into_view(target);
                    if let Some(href) = href.as_deref() {
                        host.push_history(href);
                    }
                    (
                        AnchorOutcome::Navigated {
                            target,
                            closed_menu,
                        },
                        EventResponse::PREVENT_DEFAULT,
                    )
                }
            },
        };
        tracer.anchor(&AnchorEvent {
            link,
            href: href.as_deref(),
            outcome,
        });
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_are_same_document() {
        assert_eq!(
            Destination::of(Some("#features")),
            Destination::Fragment("features")
        );
        assert_eq!(Destination::of(Some("#a-b_c")), Destination::Fragment("a-b_c"));
    }

    #[test]
    fn empty_and_bare_marker_keep_default() {
        assert_eq!(Destination::of(None), Destination::Default);
        assert_eq!(Destination::of(Some("")), Destination::Default);
        assert_eq!(Destination::of(Some("#")), Destination::Default);
    }

    #[test]
    fn off_document_keeps_default() {
        assert_eq!(
            Destination::of(Some("https://example.com/#top")),
            Destination::Default
        );
        assert_eq!(Destination::of(Some("/pricing")), Destination::Default);
        assert_eq!(Destination::of(Some("mailto:hi@example.com")), Destination::Default);
    }
}
