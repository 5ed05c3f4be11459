// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme configuration: colors, style boxes, and layout defaults.
//!
//! [`Theme::default`] is the stock dark look. With the `serde` feature the whole
//! theme can be loaded from, or saved to, any serde format.

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Color from components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray of the given level.
    pub const fn gray(level: u8) -> Self {
        Self::rgba(level, level, level, 255)
    }
}

/// Background and border of a rectangular widget part.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleBox {
    /// Fill color.
    pub bg_color: Color,
    /// Border color.
    pub border_color: Color,
    /// Border width in logical pixels.
    pub border_width: f64,
    /// Corner radius in logical pixels.
    pub corner_radius: f64,
}

impl StyleBox {
    /// Filled box without a border.
    pub const fn flat(bg_color: Color) -> Self {
        Self {
            bg_color,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 0.0,
        }
    }

    /// Builder: set the border.
    pub const fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }
}

/// Look and layout defaults shared by every widget of a scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    /// Button at rest.
    pub button_normal: StyleBox,
    /// Button under the cursor.
    pub button_hovered: StyleBox,
    /// Button held down, or toggled on.
    pub button_pressed: StyleBox,
    /// Progress bar track.
    pub progress_bg: StyleBox,
    /// Progress bar filled portion.
    pub progress_fill: StyleBox,
    /// Spin box without focus.
    pub spin_box_normal: StyleBox,
    /// Spin box with focus, or under the cursor.
    pub spin_box_focused: StyleBox,
    /// Spin box arrow column.
    pub spin_box_arrows: StyleBox,
    /// Font size for labels and widget text.
    pub font_size: f64,
    /// Text color.
    pub font_color: Color,
    /// Gap between box container children unless the container overrides it.
    pub separation: f64,
    /// Pixels scrolled per wheel step.
    pub scroll_step: f64,
    /// Width of the spin box arrow column.
    pub spin_box_arrow_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        let border = Color::gray(163);
        Self {
            button_normal: StyleBox::flat(Color::gray(27)).with_border(Color::gray(100), 2.0),
            button_hovered: StyleBox::flat(Color::gray(27)).with_border(border, 2.0),
            button_pressed: StyleBox::flat(Color::gray(70)).with_border(border, 2.0),
            progress_bg: StyleBox::flat(Color::gray(27)),
            progress_fill: StyleBox::flat(Color::rgba(53, 132, 228, 255)),
            spin_box_normal: StyleBox::flat(Color::gray(27)).with_border(Color::gray(100), 2.0),
            spin_box_focused: StyleBox::flat(Color::gray(27)).with_border(border, 2.0),
            spin_box_arrows: StyleBox::flat(Color::gray(50)),
            font_size: 32.0,
            font_color: Color::WHITE,
            separation: 8.0,
            scroll_step: 32.0,
            spin_box_arrow_width: 24.0,
        }
    }
}
