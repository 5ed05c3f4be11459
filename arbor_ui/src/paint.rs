// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing seam and render resources.
//!
//! The draw pass resolves every widget to a global rectangle and calls a [`Painter`].
//! Backends implement the trait; [`DisplayList`] records the calls instead, which is
//! what tests and tooling use.

use kurbo::{Point, Rect, Size};

use crate::text::ShapedText;
use crate::theme::{Color, StyleBox};

/// Handle of a texture owned by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Handle of an offscreen render target (clip region) owned by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderTargetId(pub u32);

/// A texture reference plus its pixel size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Texture {
    /// Renderer handle.
    pub id: TextureId,
    /// Size in logical pixels.
    pub size: Size,
}

impl Texture {
    /// Create a texture reference.
    pub const fn new(id: TextureId, size: Size) -> Self {
        Self { id, size }
    }
}

/// A renderer resource that is no longer referenced by the tree.
///
/// Collected during cleanup and drained with
/// [`Scene::take_released_resources`](crate::Scene::take_released_resources).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceHandle {
    /// A texture.
    Texture(TextureId),
    /// A render target.
    RenderTarget(RenderTargetId),
}

/// Drawing backend.
pub trait Painter {
    /// Fill and stroke `rect` with `style`.
    fn draw_style_box(&mut self, style: &StyleBox, rect: Rect);
    /// Draw shaped text with its origin at `origin`.
    fn draw_text(&mut self, text: &ShapedText, origin: Point, color: Color);
    /// Draw a texture stretched to `rect`.
    fn draw_texture(&mut self, texture: TextureId, rect: Rect);
    /// Clip everything until the matching [`Painter::pop_clip`] to `rect`, rendering into `target`.
    fn push_clip(&mut self, target: RenderTargetId, rect: Rect);
    /// End the innermost clip.
    fn pop_clip(&mut self);
}

/// One recorded painter call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`Painter::draw_style_box`].
    StyleBox {
        /// Style.
        style: StyleBox,
        /// Global rectangle.
        rect: Rect,
    },
    /// [`Painter::draw_text`].
    Text {
        /// Shaped text.
        text: ShapedText,
        /// Global origin.
        origin: Point,
        /// Color.
        color: Color,
    },
    /// [`Painter::draw_texture`].
    Texture {
        /// Texture.
        texture: TextureId,
        /// Global rectangle.
        rect: Rect,
    },
    /// [`Painter::push_clip`].
    PushClip {
        /// Target.
        target: RenderTargetId,
        /// Global clip rectangle.
        rect: Rect,
    },
    /// [`Painter::pop_clip`].
    PopClip,
}

/// Painter that records every call.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for DisplayList {
    fn draw_style_box(&mut self, style: &StyleBox, rect: Rect) {
        self.commands.push(DrawCommand::StyleBox {
            style: *style,
            rect,
        });
    }

    fn draw_text(&mut self, text: &ShapedText, origin: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.clone(),
            origin,
            color,
        });
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect) {
        self.commands.push(DrawCommand::Texture { texture, rect });
    }

    fn push_clip(&mut self, target: RenderTargetId, rect: Rect) {
        self.commands.push(DrawCommand::PushClip { target, rect });
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
