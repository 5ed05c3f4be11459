// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Produces the order in which nodes of a subtree see an input event.
//! Children are visited in **reverse** insertion order, each child's whole subtree
//! before the next sibling, and a node only after all of its descendants.
//! The last-added child is drawn on top, so it gets the first chance to consume.
//!
//! ## Pruning
//!
//! [`Router::set_prune`] installs a predicate; when it returns `true` for a node, that
//! node's descendants are skipped (the node itself is still visited). Toolkits use this
//! for containers that clip their content, for example when the cursor is outside a
//! scroll viewport.
//!
//! ## Layering
//!
//! The router only computes the traversal order. A higher-level dispatcher delivers the
//! event to each node and applies consumption and mouse-filter policies.

use alloc::vec::Vec;

use crate::types::{ChildLookup, InputEvent};

/// Deterministic input router.
///
/// ## Usage
///
/// - Construct with [`Router::new`] over any [`ChildLookup`].
/// - Call [`Router::route`] per event to get the visit order, then deliver the event
///   along it, or use [`Router::dispatch`] to do both.
pub struct Router<K, C: ChildLookup<K>> {
    pub(crate) children: C,
    pub(crate) prune: Option<fn(&K, &InputEvent) -> bool>,
}

impl<K: Copy + Eq, C: ChildLookup<K>> core::fmt::Debug for Router<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router")
            .field("prune", &self.prune.is_some())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, C: ChildLookup<K>> Router<K, C> {
    /// Create a router with no pruning.
    pub fn new(children: C) -> Self {
        Self {
            children,
            prune: None,
        }
    }

    /// Set an optional prune predicate; see the [module docs](self).
    pub fn set_prune(&mut self, prune: Option<fn(&K, &InputEvent) -> bool>) {
        self.prune = prune;
    }

    /// Access the child lookup.
    pub fn lookup(&self) -> &C {
        &self.children
    }

    /// Visit order for `event` over the subtree rooted at `root`.
    pub fn route(&self, root: K, event: &InputEvent) -> Vec<K> {
        self.route_with(root, |k| self.prune.is_some_and(|f| f(k, event)))
    }

    /// Visit order over the subtree rooted at `root`, with an ad-hoc prune predicate.
    pub fn route_with(&self, root: K, mut prune: impl FnMut(&K) -> bool) -> Vec<K> {
        // Frames of (node, next child index counted from the end).
        let mut out = Vec::new();
        let mut stack: Vec<(K, usize)> = Vec::new();
        let skip_root = prune(&root);
        stack.push((root, if skip_root { usize::MAX } else { 0 }));
        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            let children = self.children.children_of(&node);
            if next < children.len() {
                top.1 += 1;
                let child = children[children.len() - 1 - next];
                let skip = prune(&child);
                stack.push((child, if skip { usize::MAX } else { 0 }));
            } else {
                out.push(node);
                stack.pop();
            }
        }
        out
    }

    /// Route `event` and deliver it to every node in order.
    ///
    /// Delivery continues after consumption so that later handlers can observe
    /// [`InputEvent::is_consumed`] and reset their own state.
    pub fn dispatch(
        &self,
        root: K,
        event: &mut InputEvent,
        mut deliver: impl FnMut(&K, &mut InputEvent),
    ) {
        for node in self.route(root, event) {
            deliver(&node, event);
        }
    }
}
