// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element references resolved once at startup.

use alloc::vec::Vec;

use crate::config::Selectors;
use crate::host::Host;
use crate::node::NodeId;

/// Cached element references shared by the behaviors.
///
/// Absent elements are tolerated: single references are `None` and sets are
/// empty. Each behavior checks what it needs before attaching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementCache {
    /// The navigation bar container.
    pub navbar: Option<NodeId>,
    /// The hamburger menu toggle.
    pub menu_toggle: Option<NodeId>,
    /// The hero block.
    pub hero: Option<NodeId>,
    /// Same-document anchor links, in document order.
    pub links: Vec<NodeId>,
    /// Sections carrying an identifier, in document order.
    pub sections: Vec<NodeId>,
}

impl ElementCache {
    /// Resolves every reference through `host`.
    pub fn resolve(host: &mut dyn Host, selectors: &Selectors) -> Self {
        Self {
            navbar: host.query(selectors.navbar),
            menu_toggle: host.query(selectors.menu_toggle),
            hero: host.query(selectors.hero),
            links: host.query_all(selectors.anchor_links),
            sections: host.query_all(selectors.sections),
        }
    }
}
