// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing directives: how a child asks its container for space.
//!
//! A [`SizingDirective`] lives on the child. Containers read it while distributing
//! their size: the expand flags decide who shares leftover space along the main
//! axis, and the [`ShrinkFlag`]s decide where a child sits inside the slot it got.

use kurbo::{Point, Size};

/// Placement of a child inside the slot a container allotted to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShrinkFlag {
    /// Stretch to the whole slot.
    #[default]
    Fill,
    /// Keep the minimum size, aligned to the start of the slot.
    ShrinkStart,
    /// Keep the minimum size, centered in the slot.
    ShrinkCenter,
    /// Keep the minimum size, aligned to the end of the slot.
    ShrinkEnd,
}

impl ShrinkFlag {
    /// Offset and length of a child with minimum length `min` inside a slot of length `slot`.
    ///
    /// A slot smaller than the minimum places the child at the slot start with its minimum length.
    pub fn place(self, slot: f64, min: f64) -> (f64, f64) {
        let free = (slot - min).max(0.0);
        match self {
            Self::Fill => (0.0, slot.max(min)),
            Self::ShrinkStart => (0.0, min),
            Self::ShrinkCenter => (free / 2.0, min),
            Self::ShrinkEnd => (free, min),
        }
    }
}

/// Per-child sizing request read by containers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SizingDirective {
    /// Take a share of leftover horizontal space.
    pub expand_h: bool,
    /// Take a share of leftover vertical space.
    pub expand_v: bool,
    /// Horizontal placement inside the slot.
    pub flag_h: ShrinkFlag,
    /// Vertical placement inside the slot.
    pub flag_v: ShrinkFlag,
    /// Weight of this child's share of leftover space among expanding siblings.
    pub stretch_ratio: f64,
}

impl Default for SizingDirective {
    fn default() -> Self {
        Self {
            expand_h: false,
            expand_v: false,
            flag_h: ShrinkFlag::Fill,
            flag_v: ShrinkFlag::Fill,
            stretch_ratio: 1.0,
        }
    }
}

impl SizingDirective {
    /// Expanding on both axes, filling the slot.
    pub fn expand() -> Self {
        Self {
            expand_h: true,
            expand_v: true,
            ..Self::default()
        }
    }

    /// Builder: set both shrink flags.
    pub fn with_flags(mut self, flag_h: ShrinkFlag, flag_v: ShrinkFlag) -> Self {
        self.flag_h = flag_h;
        self.flag_v = flag_v;
        self
    }

    /// Builder: set the stretch ratio.
    pub fn with_stretch_ratio(mut self, ratio: f64) -> Self {
        self.stretch_ratio = ratio;
        self
    }

    /// Expand flag along `axis`.
    pub fn expands(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.expand_h,
            Axis::Vertical => self.expand_v,
        }
    }

    /// Shrink flag along `axis`.
    pub fn flag(&self, axis: Axis) -> ShrinkFlag {
        match axis {
            Axis::Horizontal => self.flag_h,
            Axis::Vertical => self.flag_v,
        }
    }
}

/// Layout axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `size` along this axis.
    pub fn of(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Build a size from main and cross components.
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Build a point from main and cross components.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }
}
