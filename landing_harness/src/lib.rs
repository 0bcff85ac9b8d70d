// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document and deterministic event driver for the landing page
//! behaviors.
//!
//! The browser is replaced by a [`FakeDocument`] whose elements carry a
//! vertical box in document coordinates. Visibility observations are
//! computed from that geometry, so a test can scroll to an offset, render a
//! frame, and assert on exactly the classes, styles, and history entries a
//! visitor would see.
//!
//! ```rust,ignore
//! let (mut harness, landing) = landing_harness::fixture::desktop();
//! harness.scroll_and_render(1000.0);
//! assert!(harness.doc().has_class(landing.navbar, "scrolled"));
//! ```
//!
//! - [`document`]: [`FakeDocument`], the [`Host`](landing_core::host::Host)
//!   implementation, and its call log.
//! - [`harness`]: [`Harness`], which bubbles clicks and touches, runs
//!   animation frames, and records trace events.
//! - [`fixture`]: the landing page markup laid out on a desktop or phone
//!   viewport.

pub mod document;
pub mod fixture;
pub mod harness;
mod selector;

pub use document::{FakeDocument, HostCall};
pub use harness::Harness;
pub use landing_debug::RecordedEvent;
