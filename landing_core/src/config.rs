// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior configuration.
//!
//! [`LandingConfig`] gathers every threshold, breakpoint, selector, and class
//! name the behaviors use. The defaults match the landing page's markup and
//! stylesheet; hosts with different markup override individual fields.

use crate::host::{ObserverOptions, RootMargin};

/// Selectors used to resolve the [`ElementCache`](crate::cache::ElementCache).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// The navigation bar container.
    pub navbar: &'static str,
    /// The hamburger menu toggle.
    pub menu_toggle: &'static str,
    /// The hero block carrying the parallax background.
    pub hero: &'static str,
    /// Same-document anchor links.
    pub anchor_links: &'static str,
    /// Sections carrying an identifier.
    pub sections: &'static str,
    /// Elements awaiting an entrance animation.
    pub reveal: &'static str,
    /// Cards toggled by touch.
    pub touch_cards: &'static str,
}

impl Selectors {
    /// Selectors matching the landing page markup.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            navbar: ".navbar",
            menu_toggle: ".navbar-toggle",
            hero: "#hero",
            anchor_links: "a[href^=\"#\"]",
            sections: "section[id]",
            reveal: ".reveal",
            touch_cards: ".weapon-card",
        }
    }
}

/// Class names written by the behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classes {
    /// Set once on a revealed element.
    pub visible: &'static str,
    /// Set on the navbar past the scroll threshold.
    pub scrolled: &'static str,
    /// Set on the navbar while the mobile menu is open.
    pub menu_open: &'static str,
    /// Set on the navigation link of the active section.
    pub active: &'static str,
    /// Set on the touched card.
    pub touch_active: &'static str,
}

impl Classes {
    /// Class names matching the landing page stylesheet.
    #[must_use]
    pub const fn landing() -> Self {
        Self {
            visible: "visible",
            scrolled: "scrolled",
            menu_open: "nav-open",
            active: "active",
            touch_active: "touch-active",
        }
    }
}

/// Configuration for every behavior on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    /// Scroll offset above which the navbar is `scrolled`.
    pub scroll_threshold: f64,
    /// Visible-area fraction that triggers a reveal.
    pub reveal_threshold: f64,
    /// Minimum viewport width with parallax enabled.
    pub mobile_breakpoint: f64,
    /// Multiplier from scroll offset to background offset.
    pub parallax_strength: f64,
    /// Visible-area fraction for section crossings.
    pub section_threshold: f64,
    /// Viewport margins shaping the section trigger band.
    pub section_margin: RootMargin,
    /// Key that closes the mobile menu.
    pub escape_key: &'static str,
    /// Element selectors.
    pub selectors: Selectors,
    /// Class names.
    pub classes: Classes,
}

impl LandingConfig {
    /// Default configuration for the landing page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scroll_threshold: 50.0,
            reveal_threshold: 0.15,
            mobile_breakpoint: 768.0,
            parallax_strength: 0.4,
            section_threshold: 0.3,
            // Band covering 10%–30% of the viewport.
            section_margin: RootMargin::vertical_percent(-10.0, -70.0),
            escape_key: "Escape",
            selectors: Selectors::landing(),
            classes: Classes::landing(),
        }
    }

    /// Observer options for reveal targets.
    #[must_use]
    pub const fn reveal_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.reveal_threshold,
            root_margin: RootMargin::ZERO,
        }
    }

    /// Observer options for sections.
    #[must_use]
    pub const fn section_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.section_threshold,
            root_margin: self.section_margin,
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_page() {
        let config = LandingConfig::default();
        assert_eq!(config.scroll_threshold, 50.0);
        assert_eq!(config.reveal_threshold, 0.15);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.parallax_strength, 0.4);
        assert_eq!(config.classes.menu_open, "nav-open");
        assert_eq!(config.selectors.anchor_links, "a[href^=\"#\"]");
    }

    #[test]
    fn section_options_use_band_margin() {
        let options = LandingConfig::new().section_options();
        assert_eq!(options.threshold, 0.3);
        assert_eq!(options.root_margin.to_css(), "-10% 0px -70% 0px");
    }

    #[test]
    fn reveal_options_have_no_margin() {
        let options = LandingConfig::new().reveal_options();
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.root_margin, RootMargin::ZERO);
    }
}
