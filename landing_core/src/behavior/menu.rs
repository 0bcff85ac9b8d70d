// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile hamburger menu.
//!
//! The menu state lives on the navbar as the `nav-open` class, so the
//! anchor behavior can close the menu through [`close_menu`] without holding
//! a reference to this controller.

use crate::config::LandingConfig;
use crate::event::EventResponse;
use crate::host::Host;
use crate::node::NodeId;
use crate::trace::{MenuEvent, Tracer};

use super::Reason;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Menu hidden.
    Closed,
    /// Menu shown.
    Open,
}

impl MenuState {
    /// Reads the state from the navbar's classes.
    #[must_use]
    pub fn of(host: &dyn Host, navbar: NodeId, class: &str) -> Self {
        if host.has_class(navbar, class) {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// What triggered a menu transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuCause {
    /// The toggle control was activated.
    Toggle,
    /// A click landed outside the navbar.
    OutsideClick,
    /// The cancellation key was pressed.
    EscapeKey,
    /// An anchor link navigated away.
    Navigation,
}

impl MenuCause {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::OutsideClick => "outside-click",
            Self::EscapeKey => "escape",
            Self::Navigation => "navigation",
        }
    }
}

/// Closes the menu on `navbar` if it is open.
///
/// Returns `true` if the menu was open.
pub fn close_menu(
    host: &mut dyn Host,
    navbar: NodeId,
    class: &str,
    cause: MenuCause,
    tracer: &mut Tracer<'_>,
) -> bool {
    if MenuState::of(host, navbar, class) == MenuState::Closed {
        return false;
    }
    host.remove_class(navbar, class);
    tracer.menu(&MenuEvent {
        state: MenuState::Closed,
        cause,
    });
    true
}

/// Controls the menu from the toggle, outside clicks, and the escape key.
#[derive(Clone, Debug)]
pub struct MobileMenu {
    navbar: NodeId,
    toggle: NodeId,
    class: &'static str,
    escape_key: &'static str,
}

impl MobileMenu {
    /// Attaches to the toggle and navbar.
    ///
    /// Fails when either element is missing.
    pub fn attach(
        navbar: Option<NodeId>,
        toggle: Option<NodeId>,
        config: &LandingConfig,
    ) -> Result<Self, Reason> {
        let toggle = toggle.ok_or(Reason::MissingMenuToggle)?;
        let navbar = navbar.ok_or(Reason::MissingNavbar)?;
        Ok(Self {
            navbar,
            toggle,
            class: config.classes.menu_open,
            escape_key: config.escape_key,
        })
    }

    /// The toggle control.
    #[must_use]
    pub fn toggle(&self) -> NodeId {
        self.toggle
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self, host: &dyn Host) -> MenuState {
        MenuState::of(host, self.navbar, self.class)
    }

    /// Flips the menu. The activation must not reach the outside-click
    /// handler, so propagation is stopped.
    pub fn on_toggle(&self, host: &mut dyn Host, tracer: &mut Tracer<'_>) -> EventResponse {
        let state = match self.state(host) {
            MenuState::Open => {
                host.remove_class(self.navbar, self.class);
                MenuState::Closed
            }
            MenuState::Closed => {
                host.add_class(self.navbar, self.class);
                MenuState::Open
            }
        };
        tracer.menu(&MenuEvent {
            state,
            cause: MenuCause::Toggle,
        });
        EventResponse::STOP_PROPAGATION
    }

    /// Closes the open menu when `target` lies outside the navbar.
    pub fn on_document_click(
        &self,
        target: NodeId,
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) {
        if self.state(host) == MenuState::Open && !host.contains(self.navbar, target) {
            close_menu(
                host,
                self.navbar,
                self.class,
                MenuCause::OutsideClick,
                tracer,
            );
        }
    }

    /// Closes the open menu on the cancellation key.
    pub fn on_key_down(&self, key: &str, host: &mut dyn Host, tracer: &mut Tracer<'_>) {
        if key == self.escape_key {
            close_menu(host, self.navbar, self.class, MenuCause::EscapeKey, tracer);
        }
    }
}
