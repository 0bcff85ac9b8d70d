// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connects a [`Page`] to browser callbacks.
//!
//! [`PageDriver`] owns the page and its [`DomHost`]. After the page starts or
//! handles an event, the driver turns the host's queued requests into real
//! event listeners, `IntersectionObserver`s, and animation frames. Every
//! callback converts the browser event into a [`PageEvent`], runs
//! [`Page::handle`], and applies the returned [`EventResponse`].
//!
//! Callbacks hold a weak reference to the driver. Keep the driver alive for
//! as long as the page should stay interactive.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use js_sys::Array;
use landing_core::event::{EventResponse, PageEvent};
use landing_core::host::{EventKind, ListenTarget, ObserverOptions};
use landing_core::node::{NodeId, WatcherId};
use landing_core::page::{Page, StartOutcome};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    AddEventListenerOptions, Event, IntersectionObserver, IntersectionObserverInit,
    KeyboardEvent,
};

use crate::dom::{DomHost, Request};
use crate::raf::FrameRequest;

type ListenerClosure = Closure<dyn FnMut(Event)>;
type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Runs a [`Page`] against the live document.
pub struct PageDriver {
    shared: Rc<Shared>,
}

struct Shared {
    state: RefCell<State>,
    listeners: RefCell<Vec<ListenerClosure>>,
    observers: RefCell<Vec<ObserverClosure>>,
    frame: FrameRequest,
}

struct State {
    page: Page,
    host: DomHost,
}

impl core::fmt::Debug for PageDriver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageDriver")
            .field("listeners", &self.shared.listeners.borrow().len())
            .field("observers", &self.shared.observers.borrow().len())
            .field("frame", &self.shared.frame)
            .finish_non_exhaustive()
    }
}

impl PageDriver {
    /// Creates a driver for an unstarted `page`.
    pub fn new(page: Page, host: DomHost) -> Self {
        let shared = Rc::new_cyclic(|weak: &Weak<Shared>| {
            let weak = weak.clone();
            Shared {
                state: RefCell::new(State { page, host }),
                listeners: RefCell::new(Vec::new()),
                observers: RefCell::new(Vec::new()),
                frame: FrameRequest::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        on_frame(&shared);
                    }
                }),
            }
        });
        Self { shared }
    }

    /// Starts the page and installs its listeners and observers.
    ///
    /// Starting twice returns [`StartOutcome::AlreadyStarted`] and installs
    /// nothing.
    pub fn start(&self) -> StartOutcome {
        let outcome = {
            let mut state = self.shared.state.borrow_mut();
            let State { page, host } = &mut *state;
            page.start(host)
        };
        realize(&self.shared);
        outcome
    }

    /// Returns `true` once the page has started.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.shared
            .state
            .try_borrow()
            .is_ok_and(|state| state.page.is_started())
    }
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

fn on_event(shared: &Rc<Shared>, listener: ListenTarget, kind: EventKind, event: &Event) {
    let response = {
        let Ok(mut state) = shared.state.try_borrow_mut() else {
            warn!("dropped re-entrant {} event", kind.as_str());
            return;
        };
        let State { page, host } = &mut *state;
        let Some(page_event) = page_event(host, listener, kind, event) else {
            return;
        };
        page.handle(&page_event, host)
    };
    apply(response, event);
    realize(shared);
}

fn on_intersections(shared: &Rc<Shared>, watcher: WatcherId, records: &Array) {
    {
        let Ok(mut state) = shared.state.try_borrow_mut() else {
            warn!("dropped re-entrant intersection batch for {watcher:?}");
            return;
        };
        let State { page, host } = &mut *state;
        let entries = host.entries(records);
        page.handle(&PageEvent::Intersections { watcher, entries }, host);
    }
    realize(shared);
}

fn on_frame(shared: &Rc<Shared>) {
    {
        let Ok(mut state) = shared.state.try_borrow_mut() else {
            warn!("dropped re-entrant animation frame");
            return;
        };
        let State { page, host } = &mut *state;
        page.handle(&PageEvent::AnimationFrame, host);
    }
    realize(shared);
}

fn page_event(
    host: &DomHost,
    listener: ListenTarget,
    kind: EventKind,
    event: &Event,
) -> Option<PageEvent> {
    Some(match kind {
        EventKind::Scroll => PageEvent::Scroll,
        EventKind::Resize => PageEvent::Resize,
        EventKind::Click => PageEvent::Click {
            target: host.event_node(event)?,
            listener,
        },
        EventKind::KeyDown => PageEvent::KeyDown {
            key: event.dyn_ref::<KeyboardEvent>()?.key(),
        },
        EventKind::TouchStart => PageEvent::TouchStart {
            target: host.event_node(event)?,
            listener,
        },
    })
}

fn apply(response: EventResponse, event: &Event) {
    if response.default_prevented {
        event.prevent_default();
    }
    if response.propagation_stopped {
        event.stop_propagation();
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Installs everything the host queued since the last call.
fn realize(shared: &Rc<Shared>) {
    let requests = match shared.state.try_borrow_mut() {
        Ok(mut state) => state.host.take_requests(),
        Err(_) => return,
    };
    for request in requests {
        match request {
            Request::Listen(target, kind) => install_listener(shared, target, kind),
            Request::Observe(watcher, options, targets) => {
                install_observer(shared, watcher, options, &targets);
            }
            Request::Frame => shared.frame.request(),
        }
    }
}

fn install_listener(shared: &Rc<Shared>, listener: ListenTarget, kind: EventKind) {
    let Some(target) = shared.state.borrow().host.event_target(listener) else {
        warn!("no element for {listener:?}; {} listener skipped", kind.as_str());
        return;
    };

    let weak = Rc::downgrade(shared);
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Some(shared) = weak.upgrade() {
            on_event(&shared, listener, kind, &event);
        }
    }) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(kind.is_passive());
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind.as_str(),
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!("addEventListener({}) failed: {err:?}", kind.as_str());
        return;
    }
    shared.listeners.borrow_mut().push(closure);
}

fn install_observer(
    shared: &Rc<Shared>,
    watcher: WatcherId,
    options: ObserverOptions,
    targets: &[NodeId],
) {
    let weak = Rc::downgrade(shared);
    let closure = Closure::wrap(Box::new(move |records: Array, _: IntersectionObserver| {
        if let Some(shared) = weak.upgrade() {
            on_intersections(&shared, watcher, &records);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_css());
    let observer =
        match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver for {watcher:?} failed: {err:?}");
                return;
            }
        };

    shared
        .state
        .borrow_mut()
        .host
        .attach_observer(watcher, observer, targets);
    shared.observers.borrow_mut().push(closure);
}
