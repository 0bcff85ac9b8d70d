// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser entry point for the landing page.
//!
//! Load the generated module from the page with a single `<script
//! type="module">`. [`main`] runs on instantiation, installs the panic hook
//! and console logger, and starts the page behaviors once the document has
//! been parsed.

use std::sync::atomic::{AtomicBool, Ordering};

use landing_backend_web::{DomHost, LogSink, PageDriver};
use landing_core::config::LandingConfig;
use landing_core::page::{Page, StartOutcome};
use log::{Level, info, warn};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Window};

static BOOTED: AtomicBool = AtomicBool::new(false);

/// Entry point, called automatically by `wasm_bindgen(start)`.
///
/// # Errors
///
/// Fails when there is no window or document, or when the ready listener
/// cannot be installed.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // A second module instance on the same page already owns the logger.
    let _ = console_log::init_with_level(Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() != "loading" {
        return boot(window);
    }

    let ready = Closure::once(move || {
        if let Err(err) = boot(window) {
            warn!("landing page failed to start: {err:?}");
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        ready.as_ref().unchecked_ref(),
        &options,
    )?;
    // The browser drops the listener after it fires once.
    ready.forget();
    Ok(())
}

/// Starts the behaviors against the live document, at most once per page.
fn boot(window: Window) -> Result<(), JsValue> {
    if BOOTED.swap(true, Ordering::AcqRel) {
        return Ok(());
    }

    let host = DomHost::new(window)?;
    let page = Page::with_sink(LandingConfig::new(), LogSink::new());
    let driver = PageDriver::new(page, host);

    match driver.start() {
        StartOutcome::Started(report) => {
            info!(
                "landing page started: {} of {} behaviors attached",
                report.attached_count(),
                report.iter().count(),
            );
        }
        StartOutcome::AlreadyStarted => info!("landing page already started"),
    }

    // Listeners hold only weak references; the page lives as long as the tab.
    std::mem::forget(driver);
    Ok(())
}
