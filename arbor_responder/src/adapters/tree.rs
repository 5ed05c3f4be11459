// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Arbor Tree.
//!
//! ## Feature
//!
//! Enable with `tree_adapter`.
//!
//! [`TreeChildren`] exposes the child lists of an [`arbor_tree::Tree`] to the
//! [router](crate::router::Router), so input can be routed over the arena directly.

use arbor_tree::{NodeId, Tree};

use crate::router::Router;
use crate::types::ChildLookup;

/// Borrowed child lookup over an [`arbor_tree::Tree`].
#[derive(Debug)]
pub struct TreeChildren<'a, T>(pub &'a Tree<T>);

impl<T> ChildLookup<NodeId> for TreeChildren<'_, T> {
    fn children_of(&self, node: &NodeId) -> &[NodeId] {
        self.0.children(*node)
    }
}

/// Build a router over `tree`.
pub fn router_for<T>(tree: &Tree<T>) -> Router<NodeId, TreeChildren<'_, T>> {
    Router::new(TreeChildren(tree))
}
