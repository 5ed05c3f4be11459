// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor UI: retained controls over an [`arbor_tree`] arena.
//!
//! A [`Scene`] owns a tree of nodes. Every node carries a [`Widget`] payload; UI-capable
//! kinds also carry [`Control`] state (position, size, minimum size, sizing directive,
//! and pointer policy).
//!
//! - Containers ([`MarginContainer`], [`BoxContainer`], [`ScrollContainer`], and the
//!   generic [`Widget::Container`]) compute their minimum size from their visible
//!   children and distribute their own size among them.
//! - Leaf widgets ([`Button`], [`Label`], [`ProgressBar`], [`SpinBox`], [`TextureRect`])
//!   measure themselves through the scene's [`TextShaper`] and draw through a
//!   [`Painter`].
//! - Input is routed topmost first with [`arbor_responder`]: later siblings see an
//!   event before earlier ones, children before their parent, and the first control
//!   that claims it marks it consumed.
//! - State changes announce themselves as [`Signal`]s, delivered to per-node
//!   callbacks and recorded for [`Scene::take_signals`].
//!
//! ## Frames
//!
//! [`Scene::process`] runs input, then the update pass (which lays out dirty
//! containers), then the draw pass. Structural edits in between only mark layout dirty.
//!
//! ```
//! use arbor_responder::types::{InputEvent, InputQueue, MouseButton};
//! use arbor_ui::{BoxContainer, Button, DisplayList, Scene, Signal};
//! use kurbo::{Point, Size};
//!
//! let mut scene = Scene::new(Size::new(400.0, 100.0));
//! let root = scene.root();
//! let hbox = scene.add_child(root, BoxContainer::horizontal()).unwrap();
//! scene.set_anchor_full_rect(hbox, true);
//! scene.when_window_size_changed(Size::new(400.0, 100.0));
//!
//! let ok = scene.add_child(hbox, Button::new("ok")).unwrap();
//! let cancel = scene.add_child(hbox, Button::new("cancel")).unwrap();
//!
//! // Nothing is laid out until the next frame.
//! let mut input = InputQueue::new();
//! let mut list = DisplayList::new();
//! scene.process(&mut input, 0.0, &mut list);
//!
//! // 16px per character at the default 32px font, 8px apart.
//! assert_eq!(scene.position(ok), Some(Point::new(0.0, 0.0)));
//! assert_eq!(scene.position(cancel), Some(Point::new(40.0, 0.0)));
//! assert_eq!(scene.size(cancel), Some(Size::new(96.0, 100.0)));
//!
//! input.push(InputEvent::mouse_button(MouseButton::Left, true, Point::new(50.0, 10.0)));
//! input.push(InputEvent::mouse_button(MouseButton::Left, false, Point::new(50.0, 10.0)));
//! scene.process(&mut input, 0.016, &mut list);
//! input.clear();
//!
//! assert!(scene
//!     .take_signals()
//!     .iter()
//!     .any(|e| e.node == cancel && e.signal == Signal::Pressed));
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize [`Theme`] and the sizing types, so themes can live in files.

mod containers;
mod element;
mod paint;
mod scene;
mod signal;
mod sizing;
mod text;
mod theme;
pub mod widgets;

pub use arbor_tree::{NodeId, TreeError};
pub use containers::{
    BoxContainer, BoxItem, MarginContainer, ScrollContainer, box_minimum, distribute,
};
pub use element::{Control, MouseFilter, Viewport, Widget, WidgetKind};
pub use paint::{
    DisplayList, DrawCommand, Painter, RenderTargetId, ResourceHandle, Texture, TextureId,
};
pub use scene::Scene;
pub use signal::{Emission, Signal};
pub use sizing::{Axis, ShrinkFlag, SizingDirective};
pub use text::{
    Alignment, FontId, MonospaceShaper, ShapeRequest, ShapedGlyph, ShapedText, TextShaper,
};
pub use theme::{Color, StyleBox, Theme};
pub use widgets::{
    Button, ButtonGroupId, ButtonState, Label, ProgressBar, SpinBox, StretchMode, TextureRect,
};
