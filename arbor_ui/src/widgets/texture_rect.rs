// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image display.

use kurbo::{Point, Rect, Size};

use crate::paint::Texture;

/// How a [`TextureRect`] maps its texture onto its rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StretchMode {
    /// Stretch to the whole rectangle.
    #[default]
    Scale,
    /// Natural size at the top-left corner.
    Keep,
    /// Natural size, centered.
    KeepCentered,
    /// Largest size that fits and keeps the aspect ratio, at the top-left corner.
    KeepAspect,
}

/// Shows a texture.
#[derive(Clone, Debug, Default)]
pub struct TextureRect {
    pub(crate) texture: Option<Texture>,
    pub(crate) stretch_mode: StretchMode,
    pub(crate) expand: bool,
}

impl TextureRect {
    /// An empty texture rect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: show `texture`.
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Builder: set the stretch mode.
    pub fn with_stretch_mode(mut self, mode: StretchMode) -> Self {
        self.stretch_mode = mode;
        self
    }

    /// Builder: ignore the texture size when computing the minimum size.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Current texture.
    pub fn texture(&self) -> Option<Texture> {
        self.texture
    }

    /// Current stretch mode.
    pub fn stretch_mode(&self) -> StretchMode {
        self.stretch_mode
    }

    pub(crate) fn content_size(&self) -> Size {
        match self.texture {
            Some(t) if !self.expand => t.size,
            _ => Size::ZERO,
        }
    }

    /// Where the texture lands inside `rect`, or `None` with nothing to draw.
    pub(crate) fn draw_rect(&self, rect: Rect) -> Option<Rect> {
        let tex = self.texture?.size;
        if tex.width <= 0.0 || tex.height <= 0.0 {
            return None;
        }
        Some(match self.stretch_mode {
            StretchMode::Scale => rect,
            StretchMode::Keep => Rect::from_origin_size(rect.origin(), tex),
            StretchMode::KeepCentered => {
                let origin = Point::new(
                    rect.x0 + (rect.width() - tex.width) / 2.0,
                    rect.y0 + (rect.height() - tex.height) / 2.0,
                );
                Rect::from_origin_size(origin, tex)
            }
            StretchMode::KeepAspect => {
                let scale = (rect.width() / tex.width).min(rect.height() / tex.height);
                Rect::from_origin_size(rect.origin(), tex * scale)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::TextureId;

    fn rect_with(mode: StretchMode) -> TextureRect {
        TextureRect::new()
            .with_texture(Texture::new(TextureId(7), Size::new(20.0, 10.0)))
            .with_stretch_mode(mode)
    }

    #[test]
    fn stretch_modes() {
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(rect_with(StretchMode::Scale).draw_rect(area), Some(area));
        assert_eq!(
            rect_with(StretchMode::Keep).draw_rect(area),
            Some(Rect::new(0.0, 0.0, 20.0, 10.0))
        );
        assert_eq!(
            rect_with(StretchMode::KeepCentered).draw_rect(area),
            Some(Rect::new(40.0, 45.0, 60.0, 55.0))
        );
        assert_eq!(
            rect_with(StretchMode::KeepAspect).draw_rect(area),
            Some(Rect::new(0.0, 0.0, 100.0, 50.0))
        );
    }

    #[test]
    fn expand_drops_texture_size_from_minimum() {
        let t = rect_with(StretchMode::Scale);
        assert_eq!(t.content_size(), Size::new(20.0, 10.0));
        assert_eq!(t.with_expand(true).content_size(), Size::ZERO);
        assert_eq!(TextureRect::new().draw_rect(Rect::ZERO), None);
    }
}
