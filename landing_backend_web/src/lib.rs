// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the landing page behaviors.
//!
//! This crate runs a [`Page`](landing_core::page::Page) in the browser:
//!
//! - [`DomHost`]: the [`Host`](landing_core::host::Host) implementation over
//!   a live `Document`
//! - [`PageDriver`]: installs listeners, `IntersectionObserver`s, and
//!   animation frames, and routes their callbacks into the page
//! - [`FrameRequest`]: one-shot `requestAnimationFrame` scheduling
//! - [`LogSink`]: forwards trace events to the [`log`] facade
//!
//! ```rust,ignore
//! let window = web_sys::window().ok_or("no window")?;
//! let page = Page::with_sink(LandingConfig::new(), LogSink::new());
//! let driver = PageDriver::new(page, DomHost::new(window)?);
//! driver.start();
//! // Keep `driver` alive for the lifetime of the document.
//! ```

#![no_std]

extern crate alloc;

mod dom;
mod driver;
mod log_sink;
mod raf;

pub use dom::DomHost;
pub use driver::PageDriver;
pub use log_sink::LogSink;
pub use raf::FrameRequest;
