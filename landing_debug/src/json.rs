// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON event-log exporter.
//!
//! [`export`] writes events captured by a
//! [`RecorderSink`](crate::recorder::RecorderSink) as a pretty-printed JSON
//! array. Each object carries the event `name`, its `cat`egory (the behavior
//! that produced it), a `seq` number, and event-specific `args`.

use std::io::{self, Write};

use serde_json::{Value, json};

use landing_core::behavior::Attach;
use landing_core::behavior::anchor::AnchorOutcome;

use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events
        .iter()
        .enumerate()
        .map(|(seq, event)| to_value(seq, event))
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &values)?;
    writeln!(writer)
}

fn to_value(seq: usize, event: &RecordedEvent) -> Value {
    let (cat, args) = match event {
        RecordedEvent::Attach(e) => {
            let args = match e.outcome {
                Attach::Attached => json!({ "attached": true }),
                Attach::NotApplicable(reason) => json!({
                    "attached": false,
                    "reason": reason.as_str(),
                }),
            };
            (e.behavior.as_str(), args)
        }
        RecordedEvent::Reveal(e) => (
            "reveal",
            json!({ "target": e.target.0, "ratio": e.ratio }),
        ),
        RecordedEvent::Navbar(e) => (
            "navbar",
            json!({ "state": e.state.as_str(), "scroll_y": e.scroll_y }),
        ),
        RecordedEvent::Menu(e) => (
            "menu",
            json!({ "state": e.state.as_str(), "cause": e.cause.as_str() }),
        ),
        RecordedEvent::Anchor {
            link,
            href,
            outcome,
        } => {
            let args = match *outcome {
                AnchorOutcome::Passed => json!({
                    "link": link.0,
                    "href": href,
                    "outcome": "passed",
                }),
                AnchorOutcome::Navigated {
                    target,
                    closed_menu,
                } => json!({
                    "link": link.0,
                    "href": href,
                    "outcome": "navigated",
                    "target": target.0,
                    "closed_menu": closed_menu,
                }),
                AnchorOutcome::MissingTarget => json!({
                    "link": link.0,
                    "href": href,
                    "outcome": "missing-target",
                }),
            };
            ("anchors", args)
        }
        RecordedEvent::Parallax(e) => (
            "parallax",
            json!({ "offset": e.offset, "scroll_y": e.scroll_y }),
        ),
        RecordedEvent::ActiveLink(e) => (
            "highlight",
            json!({ "section": e.section.0, "link": e.link.0 }),
        ),
        RecordedEvent::Touch(e) => ("touch", json!({ "active": e.active.map(|n| n.0) })),
    };
    json!({
        "name": event.name(),
        "cat": cat,
        "seq": seq,
        "args": args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::behavior::{Behavior, Reason};
    use landing_core::node::NodeId;
    use landing_core::trace::{AttachEvent, ParallaxEvent, TouchEvent};

    fn exported(events: &[RecordedEvent]) -> Vec<Value> {
        let mut buf = Vec::new();
        export(events, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn empty_recording_is_empty_array() {
        assert!(exported(&[]).is_empty());
    }

    #[test]
    fn fields_and_sequence() {
        let values = exported(&[
            RecordedEvent::Attach(AttachEvent {
                behavior: Behavior::Highlight,
                outcome: Attach::NotApplicable(Reason::NoSections),
            }),
            RecordedEvent::Anchor {
                link: NodeId(3),
                href: Some("#missing".into()),
                outcome: AnchorOutcome::MissingTarget,
            },
            RecordedEvent::Parallax(ParallaxEvent {
                offset: None,
                scroll_y: 0.0,
            }),
            RecordedEvent::Touch(TouchEvent {
                active: Some(NodeId(8)),
            }),
        ]);

        assert_eq!(values.len(), 4);
        assert_eq!(values[0]["name"], "attach");
        assert_eq!(values[0]["cat"], "highlight");
        assert_eq!(values[0]["args"]["reason"], "no sections");
        assert_eq!(values[1]["seq"], 1);
        assert_eq!(values[1]["args"]["outcome"], "missing-target");
        assert_eq!(values[1]["args"]["href"], "#missing");
        assert!(values[2]["args"]["offset"].is_null());
        assert_eq!(values[3]["args"]["active"], 8);
    }
}
