// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text shaping seam.
//!
//! Widgets never rasterize or shape text themselves. They hand a [`ShapeRequest`] to
//! the scene's [`TextShaper`] and keep the returned [`ShapedText`] for measuring and
//! drawing. [`MonospaceShaper`] is a fixed-advance shaper for tests, tools, and demos.

use core::ops::Range;

use kurbo::{Point, Rect, Size};

/// Opaque font handle, resolved by the shaper.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Placement of content inside a larger box, per axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left or top.
    #[default]
    Begin,
    /// Centered.
    Center,
    /// Right or bottom.
    End,
}

impl Alignment {
    /// Offset of content of length `content` inside a box of length `extent`.
    pub fn offset(self, extent: f64, content: f64) -> f64 {
        match self {
            Self::Begin => 0.0,
            Self::Center => (extent - content) / 2.0,
            Self::End => extent - content,
        }
    }
}

/// Input to a [`TextShaper`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeRequest<'a> {
    /// UTF-8 text; `\n` breaks lines.
    pub text: &'a str,
    /// BCP 47 language tag.
    pub lang: &'a str,
    /// Font to shape with.
    pub font: FontId,
    /// Font size in logical pixels.
    pub font_size: f64,
}

/// One positioned glyph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapedGlyph {
    /// Source character.
    pub ch: char,
    /// Pen position relative to the text origin (top-left of the first line).
    pub origin: Point,
    /// Horizontal advance.
    pub advance: f64,
    /// Ink bounds relative to the text origin.
    pub bounds: Rect,
}

/// Shaped glyphs with their line structure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapedText {
    /// Glyphs in logical order.
    pub glyphs: Vec<ShapedGlyph>,
    /// Glyph index range of each line.
    pub lines: Vec<Range<usize>>,
    /// Extent of the laid out text.
    pub size: Size,
}

/// Turns text into glyph geometry.
pub trait TextShaper {
    /// Shape `request`.
    fn shape(&self, request: &ShapeRequest<'_>) -> ShapedText;
}

/// Shaper giving every character the same advance and every line the font size as height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceShaper {
    /// Advance as a fraction of the font size.
    pub advance_ratio: f64,
}

impl Default for MonospaceShaper {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl TextShaper for MonospaceShaper {
    fn shape(&self, request: &ShapeRequest<'_>) -> ShapedText {
        let advance = request.font_size * self.advance_ratio;
        let line_height = request.font_size;
        let mut out = ShapedText::default();
        let mut width: f64 = 0.0;
        for (line_idx, line) in request.text.split('\n').enumerate() {
            let top = line_height * line_idx as f64;
            let start = out.glyphs.len();
            let mut x = 0.0;
            for ch in line.chars() {
                out.glyphs.push(ShapedGlyph {
                    ch,
                    origin: Point::new(x, top),
                    advance,
                    bounds: Rect::new(x, top, x + advance, top + line_height),
                });
                x += advance;
            }
            width = width.max(x);
            out.lines.push(start..out.glyphs.len());
        }
        out.size = Size::new(width, line_height * out.lines.len() as f64);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> ShapeRequest<'_> {
        ShapeRequest {
            text,
            lang: "en",
            font: FontId(0),
            font_size: 20.0,
        }
    }

    #[test]
    fn monospace_measures_lines() {
        let shaped = MonospaceShaper::default().shape(&request("abcd\nxy"));
        assert_eq!(shaped.size, Size::new(40.0, 40.0));
        assert_eq!(shaped.lines, vec![0..4, 4..6]);
        assert_eq!(shaped.glyphs[4].origin, Point::new(0.0, 20.0));
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let shaped = MonospaceShaper::default().shape(&request(""));
        assert_eq!(shaped.size, Size::new(0.0, 20.0));
        assert_eq!(shaped.lines.len(), 1);
    }

    #[test]
    fn alignment_offsets() {
        assert_eq!(Alignment::Begin.offset(100.0, 40.0), 0.0);
        assert_eq!(Alignment::Center.offset(100.0, 40.0), 30.0);
        assert_eq!(Alignment::End.offset(100.0, 40.0), 60.0);
    }
}
