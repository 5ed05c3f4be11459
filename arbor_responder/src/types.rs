// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the responder: input events, consumption, the input queue, and child lookup.
//!
//! ## Overview
//!
//! An [`InputEvent`] carries one [`EventKind`] and a `consumed` flag.
//! The flag is one-way: once a handler consumes an event, every later handler in the
//! same propagation pass observes [`InputEvent::is_consumed`] as `true`.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

/// Mouse button identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
    /// Any other button, by platform index.
    Other(u8),
}

/// Platform key code, passed through untouched.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyCode(pub u32);

/// Variant-specific payload of an [`InputEvent`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EventKind {
    /// A mouse button changed state.
    MouseButton {
        /// Which button.
        button: MouseButton,
        /// `true` on press, `false` on release.
        pressed: bool,
        /// Cursor position in window space.
        position: Point,
    },
    /// The cursor moved.
    MouseMotion {
        /// Movement since the previous motion event.
        relative: Vec2,
        /// Cursor position in window space.
        position: Point,
    },
    /// The wheel scrolled. Positive `delta` scrolls towards the user (content moves up).
    MouseScroll {
        /// Scroll amount in wheel steps.
        delta: f64,
        /// Cursor position in window space.
        position: Point,
    },
    /// A key changed state.
    Key {
        /// Which key.
        key: KeyCode,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
}

/// An input event plus its consumption flag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputEvent {
    kind: EventKind,
    consumed: bool,
}

impl InputEvent {
    /// Wrap an event payload. The event starts unconsumed.
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            consumed: false,
        }
    }

    /// Mouse button press or release at `position`.
    pub const fn mouse_button(button: MouseButton, pressed: bool, position: Point) -> Self {
        Self::new(EventKind::MouseButton {
            button,
            pressed,
            position,
        })
    }

    /// Cursor motion to `position`.
    pub const fn mouse_motion(position: Point, relative: Vec2) -> Self {
        Self::new(EventKind::MouseMotion { relative, position })
    }

    /// Wheel scroll at `position`.
    pub const fn mouse_scroll(delta: f64, position: Point) -> Self {
        Self::new(EventKind::MouseScroll { delta, position })
    }

    /// Key press or release.
    pub const fn key(key: KeyCode, pressed: bool) -> Self {
        Self::new(EventKind::Key { key, pressed })
    }

    /// Payload of this event.
    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Cursor position for pointer events, `None` for key events.
    pub fn position(&self) -> Option<Point> {
        match self.kind {
            EventKind::MouseButton { position, .. }
            | EventKind::MouseMotion { position, .. }
            | EventKind::MouseScroll { position, .. } => Some(position),
            EventKind::Key { .. } => None,
        }
    }

    /// Whether some handler already consumed this event.
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Mark the event as handled. Idempotent.
    pub fn consume(&mut self) {
        self.consumed = true;
    }
}

/// Per-frame queue of input events.
///
/// An external poller appends events, the UI propagates each of them once, and the
/// owner clears the queue afterwards.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Queued events, in arrival order.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Queued events, mutably, for propagation.
    pub fn events_mut(&mut self) -> &mut [InputEvent] {
        &mut self.events
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop every queued event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Look up the ordered children of a node.
///
/// The [router](crate::router::Router) walks these in reverse to build the input order.
pub trait ChildLookup<K> {
    /// Children of `node` in insertion order (later children are drawn on top).
    fn children_of(&self, node: &K) -> &[K];
}
