// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container state and the pure parts of their layout.
//!
//! A container computes its minimum size bottom-up from its visible children, then
//! hands each child a position and a size top-down. The generic container gives
//! every child its full size; the types here specialize the distribution.

use kurbo::{Insets, Rect, Size};

use crate::paint::RenderTargetId;
use crate::sizing::{Axis, SizingDirective};

/// Insets every child by fixed margins.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MarginContainer {
    pub(crate) margins: Insets,
}

impl MarginContainer {
    /// Margins of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: `x0` is left, `y0` top, `x1` right, `y1` bottom.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Builder: the same margin on every side.
    pub fn with_margin_all(self, margin: f64) -> Self {
        self.with_margins(Insets::uniform(margin))
    }

    /// Current margins.
    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// Total horizontal and vertical margin.
    pub(crate) fn extra(&self) -> Size {
        Size::new(
            self.margins.x0 + self.margins.x1,
            self.margins.y0 + self.margins.y1,
        )
    }
}

/// Stacks children along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxContainer {
    pub(crate) axis: Axis,
    pub(crate) separation: Option<f64>,
}

impl BoxContainer {
    /// Left-to-right stack.
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            separation: None,
        }
    }

    /// Top-to-bottom stack.
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            separation: None,
        }
    }

    /// Builder: override the theme separation.
    pub fn with_separation(mut self, separation: f64) -> Self {
        self.separation = Some(separation.max(0.0));
        self
    }

    /// Stacking axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Explicit separation, `None` when the theme value applies.
    pub fn separation(&self) -> Option<f64> {
        self.separation
    }
}

/// Shows one content child through a scrollable, clipped window.
///
/// Scroll offsets are whole pixels and may be negative, which leaves blank space
/// before the content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollContainer {
    pub(crate) hscroll: i32,
    pub(crate) vscroll: i32,
    pub(crate) horizontal_enabled: bool,
    pub(crate) vertical_enabled: bool,
    pub(crate) render_target: Option<RenderTargetId>,
}

impl Default for ScrollContainer {
    fn default() -> Self {
        Self {
            hscroll: 0,
            vscroll: 0,
            horizontal_enabled: true,
            vertical_enabled: true,
            render_target: None,
        }
    }
}

impl ScrollContainer {
    /// Scrollable on both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: choose the scrolling axes. A disabled axis sizes content to the container.
    pub fn with_enabled(mut self, horizontal: bool, vertical: bool) -> Self {
        self.horizontal_enabled = horizontal;
        self.vertical_enabled = vertical;
        self
    }

    /// Horizontal offset.
    pub fn hscroll(&self) -> i32 {
        self.hscroll
    }

    /// Vertical offset.
    pub fn vscroll(&self) -> i32 {
        self.vscroll
    }

    /// Clip target, assigned when the container joins a scene.
    pub fn render_target(&self) -> Option<RenderTargetId> {
        self.render_target
    }

    /// Content size for a container of `extent` showing content of minimum `content_min`.
    pub(crate) fn content_size(&self, extent: Size, content_min: Size) -> Size {
        Size::new(
            if self.horizontal_enabled {
                content_min.width
            } else {
                extent.width.max(content_min.width)
            },
            if self.vertical_enabled {
                content_min.height
            } else {
                extent.height.max(content_min.height)
            },
        )
    }
}

/// Minimum-size input of one box child.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxItem {
    /// Child minimum size.
    pub min: Size,
    /// Child sizing directive.
    pub sizing: SizingDirective,
}

/// Minimum size of a stack of `mins` along `axis`.
pub fn box_minimum(axis: Axis, separation: f64, mins: impl IntoIterator<Item = Size>) -> Size {
    let mut main = 0.0;
    let mut cross: f64 = 0.0;
    let mut n = 0_usize;
    for m in mins {
        main += axis.of(m);
        cross = cross.max(axis.cross().of(m));
        n += 1;
    }
    if n > 1 {
        main += separation * (n - 1) as f64;
    }
    axis.size(main, cross)
}

/// Child rectangles, local to the container, for a stack of size `size`.
///
/// Leftover main-axis space is shared among children expanding on that axis in
/// proportion to their stretch ratios. With no expanding child it stays unused at
/// the end.
pub fn distribute(axis: Axis, size: Size, separation: f64, items: &[BoxItem]) -> Vec<Rect> {
    let cross_axis = axis.cross();
    let min = box_minimum(axis, separation, items.iter().map(|i| i.min));
    let leftover = (axis.of(size) - axis.of(min)).max(0.0);
    let total_ratio: f64 = items
        .iter()
        .filter(|i| i.sizing.expands(axis))
        .map(|i| i.sizing.stretch_ratio.max(0.0))
        .sum();
    let cross_extent = cross_axis.of(size);

    let mut out = Vec::with_capacity(items.len());
    let mut offset = 0.0;
    for item in items {
        let min_main = axis.of(item.min);
        let share = if item.sizing.expands(axis) && total_ratio > 0.0 {
            leftover * item.sizing.stretch_ratio.max(0.0) / total_ratio
        } else {
            0.0
        };
        let slot = min_main + share;
        let (main_off, main_len) = item.sizing.flag(axis).place(slot, min_main);
        let (cross_off, cross_len) = item
            .sizing
            .flag(cross_axis)
            .place(cross_extent, cross_axis.of(item.min));
        out.push(Rect::from_origin_size(
            axis.point(offset + main_off, cross_off),
            axis.size(main_len, cross_len),
        ));
        offset += slot + separation;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::ShrinkFlag;

    fn item(w: f64, h: f64) -> BoxItem {
        BoxItem {
            min: Size::new(w, h),
            sizing: SizingDirective::default(),
        }
    }

    #[test]
    fn minimum_sums_main_and_maxes_cross() {
        let mins = [Size::new(10.0, 5.0), Size::new(20.0, 8.0), Size::new(5.0, 1.0)];
        assert_eq!(
            box_minimum(Axis::Horizontal, 4.0, mins),
            Size::new(43.0, 8.0)
        );
        assert_eq!(box_minimum(Axis::Vertical, 4.0, mins), Size::new(20.0, 22.0));
        assert_eq!(box_minimum(Axis::Vertical, 4.0, [Size::ZERO; 0]), Size::ZERO);
    }

    #[test]
    fn cross_flags_place_in_cross_extent() {
        let flags = [
            ShrinkFlag::ShrinkStart,
            ShrinkFlag::ShrinkCenter,
            ShrinkFlag::ShrinkCenter,
            ShrinkFlag::ShrinkEnd,
        ];
        let items: Vec<_> = flags
            .iter()
            .map(|f| BoxItem {
                min: Size::new(100.0, 20.0),
                sizing: SizingDirective::default().with_flags(ShrinkFlag::Fill, *f),
            })
            .collect();
        let rects = distribute(Axis::Horizontal, Size::new(800.0, 100.0), 8.0, &items);
        let ys: Vec<f64> = rects.iter().map(|r| r.y0).collect();
        assert_eq!(ys, vec![0.0, 40.0, 40.0, 80.0]);
        let xs: Vec<f64> = rects.iter().map(|r| r.x0).collect();
        assert_eq!(xs, vec![0.0, 108.0, 216.0, 324.0]);
    }

    #[test]
    fn leftover_split_by_stretch_ratio() {
        let mut a = item(10.0, 10.0);
        a.sizing.expand_h = true;
        let mut b = item(10.0, 10.0);
        b.sizing.expand_h = true;
        b.sizing.stretch_ratio = 3.0;
        let rects = distribute(Axis::Horizontal, Size::new(100.0, 10.0), 0.0, &[a, b]);
        assert_eq!(rects[0].width(), 30.0);
        assert_eq!(rects[1].width(), 70.0);
        assert_eq!(rects[1].x0, 30.0);
    }

    #[test]
    fn no_expander_leaves_space_at_end() {
        let rects = distribute(
            Axis::Vertical,
            Size::new(50.0, 500.0),
            2.0,
            &[item(10.0, 10.0), item(10.0, 10.0)],
        );
        assert_eq!(rects[1], Rect::new(0.0, 12.0, 50.0, 22.0));
    }

    #[test]
    fn shrink_flag_on_main_axis_places_inside_slot() {
        let mut a = item(10.0, 10.0);
        a.sizing.expand_h = true;
        a.sizing.flag_h = ShrinkFlag::ShrinkCenter;
        let rects = distribute(Axis::Horizontal, Size::new(50.0, 10.0), 0.0, &[a]);
        assert_eq!(rects[0], Rect::new(20.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn scroll_content_size_per_axis() {
        let s = ScrollContainer::new().with_enabled(false, true);
        assert_eq!(
            s.content_size(Size::new(100.0, 100.0), Size::new(40.0, 400.0)),
            Size::new(100.0, 400.0)
        );
    }
}
