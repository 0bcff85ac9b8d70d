// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar `scrolled` flag.

use crate::config::LandingConfig;
use crate::host::Host;
use crate::node::NodeId;
use crate::trace::{NavbarEvent, Tracer};

use super::Reason;

/// Visual state of the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavbarState {
    /// At or near the top of the page.
    Plain,
    /// Scrolled past the threshold.
    Scrolled,
}

impl NavbarState {
    /// Returns the state for `scroll_y`. The threshold itself is `Plain`.
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Plain
        }
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Scrolled => "scrolled",
        }
    }
}

/// Toggles the navbar's `scrolled` class from the scroll offset.
#[derive(Clone, Debug)]
pub struct NavbarScroll {
    navbar: NodeId,
    threshold: f64,
    class: &'static str,
    state: NavbarState,
}

impl NavbarScroll {
    /// Attaches to `navbar` and applies the state for the current offset
    /// right away.
    pub fn attach(
        navbar: Option<NodeId>,
        config: &LandingConfig,
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, Reason> {
        let navbar = navbar.ok_or(Reason::MissingNavbar)?;
        let scroll_y = host.scroll_y();
        let state = NavbarState::for_offset(scroll_y, config.scroll_threshold);
        let this = Self {
            navbar,
            threshold: config.scroll_threshold,
            class: config.classes.scrolled,
            state,
        };
        this.write(host, tracer, scroll_y);
        Ok(this)
    }

    /// Re-evaluates the state after a scroll.
    pub fn on_scroll(&mut self, host: &mut dyn Host, tracer: &mut Tracer<'_>) {
        let scroll_y = host.scroll_y();
        let state = NavbarState::for_offset(scroll_y, self.threshold);
        if state != self.state {
            self.state = state;
            self.write(host, tracer, scroll_y);
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> NavbarState {
        self.state
    }

    fn write(&self, host: &mut dyn Host, tracer: &mut Tracer<'_>, scroll_y: f64) {
        match self.state {
            NavbarState::Scrolled => host.add_class(self.navbar, self.class),
            NavbarState::Plain => host.remove_class(self.navbar, self.class),
        }
        tracer.navbar(&NavbarEvent {
            state: self.state,
            scroll_y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_plain() {
        assert_eq!(NavbarState::for_offset(0.0, 50.0), NavbarState::Plain);
        assert_eq!(NavbarState::for_offset(50.0, 50.0), NavbarState::Plain);
        assert_eq!(NavbarState::for_offset(50.5, 50.0), NavbarState::Scrolled);
        assert_eq!(NavbarState::for_offset(4000.0, 50.0), NavbarState::Scrolled);
    }

    #[test]
    fn negative_offsets_are_plain() {
        // Overscroll bounce can report negative offsets.
        assert_eq!(NavbarState::for_offset(-12.0, 50.0), NavbarState::Plain);
    }
}
