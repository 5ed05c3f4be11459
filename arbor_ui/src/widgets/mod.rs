// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf widgets.
//!
//! Widget structs hold state only. The [`Scene`](crate::Scene) owns measurement,
//! drawing, signal emission, and layout invalidation, so every mutation that can
//! change a widget's size goes through a scene method.

mod button;
mod label;
mod progress_bar;
mod spin_box;
mod texture_rect;

pub use button::{Button, ButtonGroupId, ButtonState};
pub use label::Label;
pub use progress_bar::ProgressBar;
pub use spin_box::SpinBox;
pub use texture_rect::{StretchMode, TextureRect};
