// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Tree: a generational node arena for retained UI trees.
//!
//! - Each node exclusively owns its children; removing a node removes its subtree.
//! - Parents are stored as [`NodeId`]s. Ids are generational, so a stale id never aliases a live node.
//! - Fresh nodes are only ever appended under a live parent, and [`Tree::reparent`] refuses to move a
//!   node under its own descendant, so the tree is acyclic by construction.
//!
//! ## Traversal orders
//!
//! - [`Tree::pre_order`]: self, then children in order. Used for update, draw and notification passes.
//! - [`Tree::post_order`]: children in order, then self. Used for teardown.
//!
//! The input order (children in reverse, then self) lives in `arbor_responder`, which can route over
//! this tree through its `tree_adapter` feature.
//!
//! ## Viewports
//!
//! Nodes flagged [`NodeFlags::VIEWPORT`] root an independent coordinate space.
//! [`Tree::viewport_of`] returns the nearest such ancestor.
//!
//! ## Minimal usage
//!
//! ```
//! use arbor_tree::{NodeFlags, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, "root").unwrap();
//! let panel = tree.insert(Some(root), "panel").unwrap();
//! let label = tree.insert(Some(panel), "label").unwrap();
//!
//! assert_eq!(tree.pre_order(root), vec![root, panel, label]);
//! assert_eq!(tree.post_order(root), vec![label, panel, root]);
//!
//! tree.set_flags(panel, NodeFlags::VISIBLE | NodeFlags::VIEWPORT);
//! assert_eq!(tree.viewport_of(label), Some(panel));
//!
//! // Removing a node drops its subtree.
//! tree.remove(panel);
//! assert!(!tree.is_alive(label));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Ancestors, Tree};
pub use types::{NodeFlags, NodeId, TreeError};
