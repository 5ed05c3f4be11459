// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Responder: deterministic, `no_std` input routing for retained UI trees.
//!
//! ## Overview
//!
//! This crate answers one question: in which order do the nodes of a tree see an input event?
//! It does not hit test and it does not run handlers.
//!
//! The order is "topmost wins": a node's children are visited in **reverse** insertion order
//! (the last-added child is drawn on top), each child's whole subtree before its previous sibling,
//! and the node itself last. Combined with the one-way consumption flag on
//! [`InputEvent`](crate::types::InputEvent), this gives the visually topmost widget the first
//! chance to claim an event; every later handler sees it as consumed.
//!
//! ## Workflow
//!
//! 1) Poll the platform and push [`InputEvent`](crate::types::InputEvent)s into an
//!    [`InputQueue`](crate::types::InputQueue).
//! 2) For each event, ask the [`Router`](crate::router::Router) for the visit order and deliver
//!    the event along it. Handlers call [`InputEvent::consume`](crate::types::InputEvent::consume)
//!    when they claim the event and inspect
//!    [`InputEvent::is_consumed`](crate::types::InputEvent::is_consumed) otherwise.
//! 3) Clear the queue once every event was propagated.
//!
//! ```
//! use arbor_responder::router::Router;
//! use arbor_responder::types::{ChildLookup, InputEvent, MouseButton};
//! use kurbo::Point;
//!
//! // 0 has children 1 and 2; 2 is on top.
//! struct Children;
//! const ROOT_CHILDREN: &[u32] = &[1, 2];
//! impl ChildLookup<u32> for Children {
//!     fn children_of(&self, node: &u32) -> &[u32] {
//!         match node {
//!             0 => ROOT_CHILDREN,
//!             _ => &[],
//!         }
//!     }
//! }
//!
//! let router = Router::new(Children);
//! let mut click = InputEvent::mouse_button(MouseButton::Left, true, Point::new(4.0, 4.0));
//! let mut seen = Vec::new();
//! router.dispatch(0, &mut click, |node, ev| {
//!     seen.push((*node, ev.is_consumed()));
//!     ev.consume();
//! });
//! assert_eq!(seen, vec![(2, false), (1, true), (0, true)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod router;
pub mod types;
