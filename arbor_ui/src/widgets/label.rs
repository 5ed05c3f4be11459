// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static text.

use kurbo::{Rect, Size, Vec2};

use crate::text::{Alignment, FontId, ShapedText};
use crate::theme::Color;

/// A run of text measured through the scene's shaper.
///
/// A label without a font is never measured; its minimum size is then just its floor.
#[derive(Clone, Debug)]
pub struct Label {
    pub(crate) text: String,
    pub(crate) font: Option<FontId>,
    pub(crate) font_size: Option<f64>,
    pub(crate) color: Option<Color>,
    pub(crate) lang: String,
    pub(crate) h_align: Alignment,
    pub(crate) v_align: Alignment,
    pub(crate) shaped: Option<ShapedText>,
}

impl Label {
    /// A label using the scene's default font and the theme's font size and color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            font_size: None,
            color: None,
            lang: String::from("en"),
            h_align: Alignment::Begin,
            v_align: Alignment::Begin,
            shaped: None,
        }
    }

    /// Builder: shape with `font`.
    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    /// Builder: override the theme font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Builder: set both alignments.
    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.h_align = horizontal;
        self.v_align = vertical;
        self
    }

    /// Builder: language tag passed to the shaper.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font, if any.
    pub fn font(&self) -> Option<FontId> {
        self.font
    }

    /// Horizontal and vertical alignment.
    pub fn alignment(&self) -> (Alignment, Alignment) {
        (self.h_align, self.v_align)
    }

    /// Last shaping result, `None` when unmeasured.
    pub fn shaped(&self) -> Option<&ShapedText> {
        self.shaped.as_ref()
    }

    pub(crate) fn content_size(&self) -> Size {
        self.shaped.as_ref().map(|s| s.size).unwrap_or(Size::ZERO)
    }

    /// Offset of the text inside `rect` according to the alignments.
    pub(crate) fn text_offset(&self, rect: Rect) -> Vec2 {
        let text = self.content_size();
        Vec2::new(
            self.h_align.offset(rect.width(), text.width),
            self.v_align.offset(rect.height(), text.height),
        )
    }

    /// Insert `text` before the character at `position`, clamped to the end.
    pub(crate) fn insert_text(&mut self, position: usize, text: &str) {
        let at = byte_index(&self.text, position);
        self.text.insert_str(at, text);
    }

    /// Remove up to `count` characters starting at character `position`.
    pub(crate) fn remove_text(&mut self, position: usize, count: usize) {
        let start = byte_index(&self.text, position);
        let end = byte_index(&self.text, position.saturating_add(count));
        self.text.replace_range(start..end, "");
    }
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
