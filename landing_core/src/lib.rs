// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-independent behaviors for the NovoJogo landing page.
//!
//! `landing_core` holds the visual-state logic that enhances a static landing
//! page: scroll-triggered reveals, the sticky navbar, smooth anchor
//! navigation, the mobile menu, the parallax hero, active-section
//! highlighting, and touch toggling for cards. It is `no_std` compatible
//! (with `alloc`) and never touches a browser API directly; every read,
//! write, and registration goes through the [`Host`](host::Host) trait.
//!
//! # Architecture
//!
//! Control flow is event driven and fans out from a single dispatcher:
//!
//! ```text
//!   Host (document + platform events)
//!       │ PageEvent
//!       ▼
//!   Page::handle() ──► behavior handlers ──► Host writes
//!       │                                   (classes, styles, history)
//!       ▼
//!   EventResponse ──► Host (preventDefault / stopPropagation)
//! ```
//!
//! **[`host`]**: The [`Host`](host::Host) capability trait and the
//! observation/listening vocabulary it speaks.
//!
//! **[`event`]**: [`PageEvent`](event::PageEvent) and
//! [`EventResponse`](event::EventResponse).
//!
//! **[`config`]**: [`LandingConfig`](config::LandingConfig), holding thresholds,
//! breakpoints, selectors, and class names.
//!
//! **[`cache`]**: [`ElementCache`](cache::ElementCache), the element
//! references resolved once at startup.
//!
//! **[`behavior`]**: One module per behavior, each attached once and
//! degrading to a no-op when its elements are missing.
//!
//! **[`page`]**: [`Page`](page::Page), which starts every behavior exactly
//! once and routes events to them.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! developer diagnostics, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod behavior;
pub mod cache;
pub mod config;
pub mod event;
pub mod host;
pub mod node;
pub mod page;
pub mod trace;
