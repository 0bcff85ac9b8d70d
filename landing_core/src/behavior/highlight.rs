// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section link highlighting.
//!
//! All sections share one observer whose root is a narrow band near the
//! upper third of the viewport. Whenever a section crosses into the band,
//! every link loses the `active` class and the link mapped to that section
//! gains it, so at most one link is ever active.
//!
//! Several crossings in one batch are applied in delivery order and the
//! last one wins. When two sections straddle the band at once the result
//! depends on the platform's delivery order, not on geometry.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::LandingConfig;
use crate::host::{Host, IntersectionEntry};
use crate::node::{NodeId, WatcherId};
use crate::trace::{ActiveLinkEvent, Tracer};

use super::Reason;

/// Maps section crossings to the active navigation link.
#[derive(Clone, Debug)]
pub struct SectionHighlight {
    links: Vec<NodeId>,
    by_section: BTreeMap<String, NodeId>,
    class: &'static str,
    active: Option<NodeId>,
}

impl SectionHighlight {
    /// Builds the section-to-link lookup and starts observing `sections`.
    ///
    /// When several links point at the same section the last one in
    /// document order is highlighted.
    pub fn attach(
        sections: &[NodeId],
        links: &[NodeId],
        config: &LandingConfig,
        host: &mut dyn Host,
    ) -> Result<Self, Reason> {
        if sections.is_empty() {
            return Err(Reason::NoSections);
        }
        if links.is_empty() {
            return Err(Reason::NoLinks);
        }
        let mut by_section = BTreeMap::new();
        for &link in links {
            if let Some(id) = host
                .attribute(link, "href")
                .and_then(|href| href.strip_prefix('#').map(String::from))
            {
                by_section.insert(id, link);
            }
        }
        host.observe(WatcherId::SECTIONS, config.section_options(), sections);
        Ok(Self {
            links: links.to_vec(),
            by_section,
            class: config.classes.active,
            active: None,
        })
    }

    /// Returns the link mapped to section id `id`.
    #[must_use]
    pub fn link_for(&self, id: &str) -> Option<NodeId> {
        self.by_section.get(id).copied()
    }

    /// Returns the currently active link.
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Applies a batch of section observations.
    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry],
        host: &mut dyn Host,
        tracer: &mut Tracer<'_>,
    ) {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(link) = host
                .element_id(entry.target)
                .and_then(|id| self.link_for(&id))
            else {
                continue;
            };
            for &other in &self.links {
                host.remove_class(other, self.class);
            }
            host.add_class(link, self.class);
            self.active = Some(link);
            tracer.active_link(&ActiveLinkEvent {
                section: entry.target,
                link,
            });
        }
    }
}
