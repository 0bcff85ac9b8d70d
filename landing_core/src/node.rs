// Copyright 2026 the NovoJogo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element and observer identification.
//!
//! [`NodeId`] is a lightweight handle identifying one element of the hosting
//! document. Hosts assign these; core treats them as opaque. [`WatcherId`]
//! names a visibility observer registration.

use core::fmt;

/// Identifies a specific element of the hosting document.
///
/// Hosts assign node IDs when resolving queries or event targets. Core code
/// passes them back to the host without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Identifies one visibility observer.
///
/// Each observer carries its own trigger options; intersection batches are
/// delivered tagged with the watcher that produced them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WatcherId(pub u32);

impl WatcherId {
    /// Observer for elements awaiting their entrance animation.
    pub const REVEAL: Self = Self(0);

    /// Observer for page sections driving the active navigation link.
    pub const SECTIONS: Self = Self(1);
}

impl fmt::Debug for WatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::REVEAL => f.write_str("WatcherId::REVEAL"),
            Self::SECTIONS => f.write_str("WatcherId::SECTIONS"),
            Self(raw) => write!(f, "WatcherId({raw})"),
        }
    }
}
