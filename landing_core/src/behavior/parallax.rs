// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero background parallax.
//!
//! The hero's `background-position-y` follows the scroll offset scaled by
//! the parallax strength. Scroll-driven recomputation is frame-throttled:
//! the first scroll after a render requests one animation frame, and every
//! further scroll before that frame runs collapses into it. Resizes
//! re-evaluate the viewport gate and apply immediately.

use alloc::format;

use crate::config::LandingConfig;
use crate::host::Host;
use crate::node::NodeId;
use crate::trace::{ParallaxEvent, Tracer};

use super::Reason;

/// CSS property carrying the offset.
pub const BACKGROUND_POSITION_Y: &str = "background-position-y";

/// Returns the background offset for `scroll_y`.
#[must_use]
pub fn offset_for(scroll_y: f64, strength: f64) -> f64 {
    scroll_y * strength
}

/// Drives the hero background offset.
#[derive(Clone, Debug)]
pub struct Parallax {
    hero: NodeId,
    strength: f64,
    breakpoint: f64,
    enabled: bool,
    /// A frame has been requested and not yet delivered.
    ticking: bool,
}

impl Parallax {
    /// Attaches to `hero`, evaluates the viewport gate, and applies the
    /// current offset.
    pub fn attach(
        hero: Option<NodeId>,
        config: &LandingConfig,
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) -> Result<Self, Reason> {
        let hero = hero.ok_or(Reason::MissingHero)?;
        let mut this = Self {
            hero,
            strength: config.parallax_strength,
            breakpoint: config.mobile_breakpoint,
            enabled: false,
            ticking: false,
        };
        this.check_viewport(host);
        this.apply(host, tracer);
        Ok(this)
    }

    /// Returns `true` if the viewport is wide enough for parallax.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while a frame request is outstanding.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Requests a frame unless one is already pending.
    pub fn on_scroll(&mut self, host: &mut dyn Host) {
        if !self.ticking {
            host.request_frame();
            self.ticking = true;
        }
    }

    /// Applies the offset for the requested frame.
    pub fn on_frame(&mut self, host: &mut dyn Host, tracer: &mut Tracer<'_>) {
        self.apply(host, tracer);
        self.ticking = false;
    }

    /// Re-evaluates the viewport gate and applies immediately.
    pub fn on_resize(&mut self, host: &mut dyn Host, tracer: &mut Tracer<'_>) {
        self.check_viewport(host);
        self.apply(host, tracer);
    }

    fn check_viewport(&mut self, host: &dyn Host) {
        self.enabled = host.viewport_width() >= self.breakpoint;
    }

    fn apply(&self, host: &mut dyn Host, tracer: &mut Tracer<'_>) {
        let scroll_y = host.scroll_y();
        if !self.enabled {
            host.remove_style(self.hero, BACKGROUND_POSITION_Y);
            tracer.parallax(&ParallaxEvent {
                offset: None,
                scroll_y,
            });
            return;
        }
        let offset = offset_for(scroll_y, self.strength);
        host.set_style(self.hero, BACKGROUND_POSITION_Y, &format!("{offset}px"));
        tracer.parallax(&ParallaxEvent {
            offset: Some(offset),
            scroll_y,
        });
    }
}
