// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed signals and per-node subscriptions.
//!
//! Callbacks take no arguments and cannot reach the scene. Code that needs to react
//! with mutable access drains [`Scene::take_signals`](crate::Scene::take_signals)
//! after a frame instead; every emission lands there too.

use arbor_tree::NodeId;

/// Everything a node can announce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Content size or child set changed somewhere in the subtree. Travels upward.
    SubtreeChanged,
    /// A button was activated.
    Pressed,
    /// A toggle button flipped.
    Toggled,
    /// A range widget changed its value.
    ValueChanged,
    /// A widget took focus.
    FocusEntered,
    /// A control's size changed.
    Resized,
}

/// One emission, as recorded in the scene outbox.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Emission {
    /// Emitting node.
    pub node: NodeId,
    /// What was emitted.
    pub signal: Signal,
}

type Callback = Box<dyn FnMut()>;

/// Ordered callbacks of one node.
#[derive(Default)]
pub(crate) struct Subscriptions {
    entries: Vec<(Signal, Callback)>,
}

impl core::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscriptions")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Subscriptions {
    pub(crate) fn connect(&mut self, signal: Signal, callback: Callback) {
        self.entries.push((signal, callback));
    }

    /// Run every callback registered for `signal`, in registration order.
    pub(crate) fn emit(&mut self, signal: Signal) {
        for (s, cb) in &mut self.entries {
            if *s == signal {
                cb();
            }
        }
    }

    pub(crate) fn count(&self, signal: Signal) -> usize {
        self.entries.iter().filter(|(s, _)| *s == signal).count()
    }
}
