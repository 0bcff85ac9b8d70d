// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page behaviors.
//!
//! Each behavior is attached once at startup from the
//! [`ElementCache`](crate::cache::ElementCache). Attaching checks the
//! behavior's preconditions first: when an element it needs is missing, the
//! behavior is skipped entirely and reports [`Attach::NotApplicable`]
//! instead of registering anything with the host.
//!
//! | Behavior | Needs | Writes |
//! |---|---|---|
//! | [`reveal`] | at least one reveal target | `visible` |
//! | [`navbar`] | navbar | `scrolled` |
//! | [`anchor`] | at least one anchor link | history, scroll |
//! | [`menu`] | navbar and menu toggle | `nav-open` |
//! | [`parallax`] | hero | `background-position-y` |
//! | [`highlight`] | sections and anchor links | `active` |
//! | [`touch`] | at least one card | `touch-active` |

pub mod anchor;
pub mod highlight;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod touch;

/// Names one page behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// One-shot entrance animations.
    Reveal,
    /// Navbar `scrolled` flag.
    Navbar,
    /// Smooth same-page anchor navigation.
    Anchors,
    /// Mobile hamburger menu.
    Menu,
    /// Hero background parallax.
    Parallax,
    /// Active-section link highlighting.
    Highlight,
    /// Touch toggling for cards.
    Touch,
}

impl Behavior {
    /// Every behavior, in attach order.
    pub const ALL: [Self; 7] = [
        Self::Reveal,
        Self::Navbar,
        Self::Anchors,
        Self::Menu,
        Self::Parallax,
        Self::Highlight,
        Self::Touch,
    ];

    /// Position of this behavior in [`Behavior::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Navbar => "navbar",
            Self::Anchors => "anchors",
            Self::Menu => "menu",
            Self::Parallax => "parallax",
            Self::Highlight => "highlight",
            Self::Touch => "touch",
        }
    }
}

/// Why a behavior did not attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    /// No navbar element.
    MissingNavbar,
    /// No menu toggle element.
    MissingMenuToggle,
    /// No hero element.
    MissingHero,
    /// No same-document anchor links.
    NoLinks,
    /// No sections with an identifier.
    NoSections,
    /// No elements awaiting a reveal.
    NoRevealTargets,
    /// No touch cards.
    NoCards,
}

impl Reason {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingNavbar => "missing navbar",
            Self::MissingMenuToggle => "missing menu toggle",
            Self::MissingHero => "missing hero",
            Self::NoLinks => "no anchor links",
            Self::NoSections => "no sections",
            Self::NoRevealTargets => "no reveal targets",
            Self::NoCards => "no cards",
        }
    }
}

/// Result of a behavior's precondition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attach {
    /// The behavior registered its listeners and observers.
    Attached,
    /// The behavior was skipped; nothing was registered.
    NotApplicable(Reason),
}

impl Attach {
    /// Returns `true` if the behavior attached.
    #[must_use]
    pub const fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }
}

impl<T> From<&Result<T, Reason>> for Attach {
    fn from(result: &Result<T, Reason>) -> Self {
        match result {
            Ok(_) => Self::Attached,
            Err(reason) => Self::NotApplicable(*reason),
        }
    }
}
