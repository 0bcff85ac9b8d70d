// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page dispatcher.
//!
//! [`Page`] owns the configuration, the element cache, every attached
//! behavior, and an optional [`TraceSink`]. It is started once against a
//! [`Host`] and then fed every [`PageEvent`] the host delivers.
//!
//! # Event loop pseudocode
//!
//! ```rust,ignore
//! let mut page = Page::new(LandingConfig::new());
//! page.start(&mut host);
//!
//! // For every event the host's listeners or observers produce:
//! let response = page.handle(&event, &mut host);
//! if response.default_prevented {
//!     native_event.prevent_default();
//! }
//! if response.propagation_stopped {
//!     native_event.stop_propagation();
//! }
//! ```
//!
//! # Click routing
//!
//! A click arrives once per listener it reaches, innermost first, mirroring
//! DOM bubbling. Link listeners run anchor navigation; the toggle listener
//! flips the menu and stops propagation; the document listener performs
//! outside-click closing. Hosts must stop delivering an event once a response
//! has `propagation_stopped` set.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::behavior::anchor::AnchorNav;
use crate::behavior::highlight::SectionHighlight;
use crate::behavior::menu::MobileMenu;
use crate::behavior::navbar::NavbarScroll;
use crate::behavior::parallax::Parallax;
use crate::behavior::reveal::Reveal;
use crate::behavior::touch::TouchCards;
use crate::behavior::{Attach, Behavior};
use crate::cache::ElementCache;
use crate::config::LandingConfig;
use crate::event::{EventResponse, PageEvent};
use crate::host::{EventKind, Host, ListenTarget};
use crate::node::WatcherId;
use crate::trace::{AttachEvent, TraceSink, Tracer};

/// Per-behavior attach results from [`Page::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartReport {
    outcomes: [Attach; Behavior::ALL.len()],
}

impl StartReport {
    /// Returns the attach result for `behavior`.
    #[must_use]
    pub fn outcome(&self, behavior: Behavior) -> Attach {
        self.outcomes[behavior.index()]
    }

    /// Iterates over every behavior and its result, in attach order.
    pub fn iter(&self) -> impl Iterator<Item = (Behavior, Attach)> + '_ {
        Behavior::ALL.iter().copied().zip(self.outcomes.iter().copied())
    }

    /// Returns the number of behaviors that attached.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_attached()).count()
    }
}

/// Result of [`Page::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The page started; holds each behavior's attach result.
    Started(StartReport),
    /// The page had already been started. Nothing was registered.
    AlreadyStarted,
}

/// Owns the page behaviors and routes platform events to them.
pub struct Page {
    config: LandingConfig,
    started: bool,
    cache: ElementCache,
    reveal: Option<Reveal>,
    navbar: Option<NavbarScroll>,
    anchors: Option<AnchorNav>,
    menu: Option<MobileMenu>,
    parallax: Option<Parallax>,
    highlight: Option<SectionHighlight>,
    touch: Option<TouchCards>,
    /// Listeners installed on the host, used to install each one once.
    listeners: Vec<(ListenTarget, EventKind)>,
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Page {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Page")
            .field("started", &self.started)
            .field("cache", &self.cache)
            .field("listeners", &self.listeners.len())
            .field("traced", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Creates a page that is **not yet started**.
    #[must_use]
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config,
            started: false,
            cache: ElementCache::default(),
            reveal: None,
            navbar: None,
            anchors: None,
            menu: None,
            parallax: None,
            highlight: None,
            touch: None,
            listeners: Vec::new(),
            sink: None,
        }
    }

    /// Creates an unstarted page that reports to `sink`.
    #[must_use]
    pub fn with_sink(config: LandingConfig, sink: impl TraceSink + 'static) -> Self {
        let mut page = Self::new(config);
        page.sink = Some(Box::new(sink));
        page
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    /// Returns `true` once [`start`](Self::start) has run.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the element references resolved at startup.
    #[must_use]
    pub fn cache(&self) -> &ElementCache {
        &self.cache
    }

    /// Resolves the element cache, attaches every behavior, and installs
    /// their listeners.
    ///
    /// Calling this again is a no-op returning
    /// [`StartOutcome::AlreadyStarted`], so no observer or listener is ever
    /// registered twice.
    pub fn start(&mut self, host: &mut dyn Host) -> StartOutcome {
        if self.started {
            return StartOutcome::AlreadyStarted;
        }
        self.started = true;

        let config = self.config;
        let cache = ElementCache::resolve(host, &config.selectors);
        let mut tracer = tracer_for(&mut self.sink);

        let reveal_targets = host.query_all(config.selectors.reveal);
        let reveal = Reveal::attach(reveal_targets, &config, host);
        let navbar = NavbarScroll::attach(cache.navbar, &config, host, &mut tracer);
        let anchors = AnchorNav::attach(&cache.links, cache.navbar, &config);
        let menu = MobileMenu::attach(cache.navbar, cache.menu_toggle, &config);
        let parallax = Parallax::attach(cache.hero, &config, host, &mut tracer);
        let highlight = SectionHighlight::attach(&cache.sections, &cache.links, &config, host);
        let cards = host.query_all(config.selectors.touch_cards);
        let touch = TouchCards::attach(cards, &config);

        let report = StartReport {
            outcomes: [
                Attach::from(&reveal),
                Attach::from(&navbar),
                Attach::from(&anchors),
                Attach::from(&menu),
                Attach::from(&parallax),
                Attach::from(&highlight),
                Attach::from(&touch),
            ],
        };
        for (behavior, outcome) in report.iter() {
            tracer.attach(&AttachEvent { behavior, outcome });
        }

        let listeners = &mut self.listeners;
        if navbar.is_ok() || parallax.is_ok() {
            listen_once(listeners, host, ListenTarget::Window, EventKind::Scroll);
        }
        if parallax.is_ok() {
            listen_once(listeners, host, ListenTarget::Window, EventKind::Resize);
        }
        if let Ok(anchors) = &anchors {
            for &link in anchors.links() {
                listen_once(listeners, host, ListenTarget::Node(link), EventKind::Click);
            }
        }
        if let Ok(menu) = &menu {
            let toggle = ListenTarget::Node(menu.toggle());
            listen_once(listeners, host, toggle, EventKind::Click);
            listen_once(listeners, host, ListenTarget::Document, EventKind::Click);
            listen_once(listeners, host, ListenTarget::Document, EventKind::KeyDown);
        }
        if let Ok(touch) = &touch {
            for &card in touch.cards() {
                let card = ListenTarget::Node(card);
                listen_once(listeners, host, card, EventKind::TouchStart);
            }
            listen_once(listeners, host, ListenTarget::Document, EventKind::TouchStart);
        }

        self.cache = cache;
        self.reveal = reveal.ok();
        self.navbar = navbar.ok();
        self.anchors = anchors.ok();
        self.menu = menu.ok();
        self.parallax = parallax.ok();
        self.highlight = highlight.ok();
        self.touch = touch.ok();

        StartOutcome::Started(report)
    }

    /// Routes one platform event to the attached behaviors.
    ///
    /// Events delivered before [`start`](Self::start) are ignored.
    pub fn handle(&mut self, event: &PageEvent, host: &mut dyn Host) -> EventResponse {
        if !self.started {
            return EventResponse::PASS;
        }
        let mut tracer = tracer_for(&mut self.sink);
        match event {
            PageEvent::Scroll => {
                if let Some(navbar) = &mut self.navbar {
                    navbar.on_scroll(host, &mut tracer);
                }
                if let Some(parallax) = &mut self.parallax {
                    parallax.on_scroll(host);
                }
                EventResponse::PASS
            }
            PageEvent::Resize => {
                if let Some(parallax) = &mut self.parallax {
                    parallax.on_resize(host, &mut tracer);
                }
                EventResponse::PASS
            }
            PageEvent::AnimationFrame => {
                if let Some(parallax) = &mut self.parallax {
                    parallax.on_frame(host, &mut tracer);
                }
                EventResponse::PASS
            }
            PageEvent::Click { target, listener } => match *listener {
                ListenTarget::Node(node) => {
                    let mut response = EventResponse::PASS;
                    if let Some(anchors) = &self.anchors
                        && anchors.handles(node)
                    {
                        response = response.merge(anchors.on_click(node, host, &mut tracer));
                    }
                    if let Some(menu) = &self.menu
                        && menu.toggle() == node
                    {
                        response = response.merge(menu.on_toggle(host, &mut tracer));
                    }
                    response
                }
                ListenTarget::Document => {
                    if let Some(menu) = &self.menu {
                        menu.on_document_click(*target, host, &mut tracer);
                    }
                    EventResponse::PASS
                }
                ListenTarget::Window => EventResponse::PASS,
            },
            PageEvent::KeyDown { key } => {
                if let Some(menu) = &self.menu {
                    menu.on_key_down(key, host, &mut tracer);
                }
                EventResponse::PASS
            }
            PageEvent::TouchStart { target, listener } => {
                if let Some(touch) = &self.touch {
                    match *listener {
                        ListenTarget::Node(card) if touch.handles(card) => {
                            touch.on_card_touch(card, host, &mut tracer);
                        }
                        ListenTarget::Document => {
                            touch.on_document_touch(*target, host, &mut tracer);
                        }
                        _ => {}
                    }
                }
                EventResponse::PASS
            }
            PageEvent::Intersections { watcher, entries } => {
                match *watcher {
                    WatcherId::REVEAL => {
                        if let Some(reveal) = &mut self.reveal {
                            reveal.on_intersections(entries, host, &mut tracer);
                        }
                    }
                    WatcherId::SECTIONS => {
                        if let Some(highlight) = &mut self.highlight {
                            highlight.on_intersections(entries, host, &mut tracer);
                        }
                    }
                    _ => {}
                }
                EventResponse::PASS
            }
        }
    }

    /// Returns the reveal behavior, if attached.
    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    /// Returns the navbar behavior, if attached.
    #[must_use]
    pub fn navbar(&self) -> Option<&NavbarScroll> {
        self.navbar.as_ref()
    }

    /// Returns the mobile menu behavior, if attached.
    #[must_use]
    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    /// Returns the parallax behavior, if attached.
    #[must_use]
    pub fn parallax(&self) -> Option<&Parallax> {
        self.parallax.as_ref()
    }

    /// Returns the section highlighter, if attached.
    #[must_use]
    pub fn highlight(&self) -> Option<&SectionHighlight> {
        self.highlight.as_ref()
    }
}

fn tracer_for(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(sink) => Tracer::new(sink.as_mut()),
        None => Tracer::none(),
    }
}

fn listen_once(
    listeners: &mut Vec<(ListenTarget, EventKind)>,
    host: &mut dyn Host,
    target: ListenTarget,
    kind: EventKind,
) {
    if listeners.contains(&(target, kind)) {
        return;
    }
    listeners.push((target, kind));
    host.listen(target, kind);
}
