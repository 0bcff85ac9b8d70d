// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use landing_core::behavior::Attach;
use landing_core::behavior::anchor::AnchorOutcome;
use landing_core::trace::{
    ActiveLinkEvent, AnchorEvent, AttachEvent, MenuEvent, NavbarEvent, ParallaxEvent,
    RevealEvent, TouchEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = match e.outcome {
            Attach::Attached => writeln!(self.writer, "[attach] {}", e.behavior.as_str()),
            Attach::NotApplicable(reason) => writeln!(
                self.writer,
                "[attach] {} skipped: {}",
                e.behavior.as_str(),
                reason.as_str(),
            ),
        };
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] node={} ratio={:.2}",
            e.target.0, e.ratio,
        );
    }

    fn on_navbar(&mut self, e: &NavbarEvent) {
        let _ = writeln!(
            self.writer,
            "[navbar] {} scroll_y={}",
            e.state.as_str(),
            e.scroll_y,
        );
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        let _ = writeln!(
            self.writer,
            "[menu] {} cause={}",
            e.state.as_str(),
            e.cause.as_str(),
        );
    }

    fn on_anchor(&mut self, e: &AnchorEvent<'_>) {
        let href = e.href.unwrap_or("");
        let _ = match e.outcome {
            AnchorOutcome::Passed => {
                writeln!(self.writer, "[anchor] link={} {href:?} passed", e.link.0)
            }
            AnchorOutcome::Navigated {
                target,
                closed_menu,
            } => writeln!(
                self.writer,
                "[anchor] link={} {href:?} -> node={} closed_menu={closed_menu}",
                e.link.0, target.0,
            ),
            AnchorOutcome::MissingTarget => writeln!(
                self.writer,
                "[anchor] link={} {href:?} MISSING target",
                e.link.0,
            ),
        };
    }

    fn on_parallax(&mut self, e: &ParallaxEvent) {
        let _ = match e.offset {
            Some(offset) => writeln!(
                self.writer,
                "[parallax] offset={offset}px scroll_y={}",
                e.scroll_y,
            ),
            None => writeln!(self.writer, "[parallax] cleared scroll_y={}", e.scroll_y),
        };
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        let _ = writeln!(
            self.writer,
            "[active] link={} section={}",
            e.link.0, e.section.0,
        );
    }

    fn on_touch(&mut self, e: &TouchEvent) {
        let _ = match e.active {
            Some(card) => writeln!(self.writer, "[touch] card={} active", card.0),
            None => writeln!(self.writer, "[touch] cleared"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::behavior::menu::{MenuCause, MenuState};
    use landing_core::behavior::{Behavior, Reason};
    use landing_core::node::NodeId;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn attach_lines() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_attach(&AttachEvent {
            behavior: Behavior::Reveal,
            outcome: Attach::Attached,
        });
        sink.on_attach(&AttachEvent {
            behavior: Behavior::Touch,
            outcome: Attach::NotApplicable(Reason::NoCards),
        });
        assert_eq!(
            output(sink),
            "[attach] reveal\n[attach] touch skipped: no cards\n"
        );
    }

    #[test]
    fn menu_and_anchor() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_menu(&MenuEvent {
            state: MenuState::Closed,
            cause: MenuCause::EscapeKey,
        });
        sink.on_anchor(&AnchorEvent {
            link: NodeId(5),
            href: Some("#weapons"),
            outcome: AnchorOutcome::Navigated {
                target: NodeId(12),
                closed_menu: true,
            },
        });
        let output = output(sink);
        assert!(output.contains("[menu] closed cause=escape"), "got: {output}");
        assert!(
            output.contains("[anchor] link=5 \"#weapons\" -> node=12 closed_menu=true"),
            "got: {output}"
        );
    }

    #[test]
    fn parallax_cleared() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_parallax(&ParallaxEvent {
            offset: None,
            scroll_y: 300.0,
        });
        assert_eq!(output(sink), "[parallax] cleared scroll_y=300\n");
    }
}
