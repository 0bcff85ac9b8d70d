// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace output through the [`log`] facade.
//!
//! [`LogSink`] reports attach results at `info` and every visual-state
//! transition at `debug`. Anchor clicks whose destination is missing are
//! reported at `warn`, since they leave the visitor on a dead link.

use landing_core::behavior::Attach;
use landing_core::behavior::anchor::AnchorOutcome;
use landing_core::trace::{
    ActiveLinkEvent, AnchorEvent, AttachEvent, MenuEvent, NavbarEvent, ParallaxEvent,
    RevealEvent, TouchEvent, TraceSink,
};
use log::{debug, info, warn};

/// Forwards trace events to the installed logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// Creates a sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TraceSink for LogSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        match e.outcome {
            Attach::Attached => info!("[attach] {}", e.behavior.as_str()),
            Attach::NotApplicable(reason) => {
                info!("[attach] {} skipped: {}", e.behavior.as_str(), reason.as_str());
            }
        }
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        debug!("[reveal] {:?} ratio={:.2}", e.target, e.ratio);
    }

    fn on_navbar(&mut self, e: &NavbarEvent) {
        debug!("[navbar] {} at scroll_y={}", e.state.as_str(), e.scroll_y);
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        debug!("[menu] {} ({})", e.state.as_str(), e.cause.as_str());
    }

    fn on_anchor(&mut self, e: &AnchorEvent<'_>) {
        let href = e.href.unwrap_or("");
        match e.outcome {
            AnchorOutcome::Passed => debug!("[anchor] {href:?} left to the browser"),
            AnchorOutcome::Navigated {
                target,
                closed_menu,
            } => debug!("[anchor] {href:?} -> {target:?} closed_menu={closed_menu}"),
            AnchorOutcome::MissingTarget => {
                warn!("[anchor] {href:?} has no destination; navigation cancelled");
            }
        }
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        match e.offset {
            Some(offset) => debug!("[parallax] offset={offset}px scroll_y={}", e.scroll_y),
            None => debug!("[parallax] cleared"),
        }
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        debug!("[active] {:?} via {:?}", e.link, e.section);
    }

    fn on_touch(&mut self, e: &TouchEvent) {
        match e.active {
            Some(card) => debug!("[touch] {card:?} active"),
            None => debug!("[touch] cleared"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::{String, ToString};
    use std::sync::Mutex;
    use std::vec::Vec;

    use landing_core::behavior::{Behavior, Reason};
    use landing_core::node::NodeId;
    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::*;

    static LINES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    struct Capture;

    impl Log for Capture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut lines) = LINES.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture;

    #[test]
    fn events_reach_the_logger() {
        // Other tests in this binary never log, so a global capture is fine.
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);

        let mut sink = LogSink::new();
        sink.on_attach(&AttachEvent {
            behavior: Behavior::Parallax,
            outcome: Attach::NotApplicable(Reason::MissingHero),
        });
        sink.on_anchor(&AnchorEvent {
            link: NodeId(4),
            href: Some("#missing"),
            outcome: AnchorOutcome::MissingTarget,
        });
        sink.on_touch(&TouchEvent { active: None });

        let lines = LINES.lock().unwrap();
        assert_eq!(
            lines[0],
            (Level::Info, "[attach] parallax skipped: missing hero".to_string())
        );
        assert_eq!(lines[1].0, Level::Warn, "dead links are warnings");
        assert!(lines[1].1.contains("\"#missing\""));
        assert_eq!(lines[2], (Level::Debug, "[touch] cleared".to_string()));
    }
}
