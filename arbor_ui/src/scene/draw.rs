// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw pass.

use arbor_tree::NodeId;
use kurbo::{Point, Rect, Vec2};

use super::Scene;
use crate::element::Widget;
use crate::paint::Painter;
use crate::widgets::ButtonState;

impl Scene {
    /// Paint the visible tree, parents below children.
    ///
    /// Scroll containers and viewports wrap their children in a clip that renders
    /// into their own render target.
    pub fn propagate_draw(&self, painter: &mut dyn Painter) {
        self.draw_node(self.root, painter);
    }

    fn draw_node(&self, id: NodeId, painter: &mut dyn Painter) {
        if !self.is_visible(id) {
            return;
        }
        let Some(el) = self.tree.get(id) else {
            return;
        };
        if let Some(rect) = self.global_rect(id) {
            self.draw_widget(&el.widget, rect, painter);
        }

        let clip = match &el.widget {
            Widget::Scroll(s) => s.render_target.zip(self.global_rect(id)),
            Widget::Viewport(v) => v
                .render_target
                .map(|t| (t, Rect::from_origin_size(Point::ZERO, v.size))),
            _ => None,
        };
        if let Some((target, rect)) = clip {
            painter.push_clip(target, rect);
        }
        for &child in self.tree.children(id) {
            self.draw_node(child, painter);
        }
        if clip.is_some() {
            painter.pop_clip();
        }
    }

    fn draw_widget(&self, widget: &Widget, rect: Rect, painter: &mut dyn Painter) {
        let theme = &self.theme;
        match widget {
            Widget::Button(b) => {
                let style = match b.state() {
                    ButtonState::Pressed => &theme.button_pressed,
                    ButtonState::Hovered | ButtonState::PressedInside => &theme.button_hovered,
                    ButtonState::Idle => &theme.button_normal,
                };
                painter.draw_style_box(style, rect);
                let mut text_area = rect;
                if let Some(icon) = b.icon {
                    let origin =
                        Point::new(rect.x0, center(rect.y0, rect.height(), icon.size.height));
                    painter.draw_texture(icon.id, Rect::from_origin_size(origin, icon.size));
                    text_area.x0 = (rect.x0 + icon.size.width).min(rect.x1);
                }
                if !b.shaped.glyphs.is_empty() {
                    let size = b.shaped.size;
                    let origin = Point::new(
                        center(text_area.x0, text_area.width(), size.width),
                        center(text_area.y0, text_area.height(), size.height),
                    );
                    painter.draw_text(&b.shaped, origin, theme.font_color);
                }
            }
            Widget::Label(l) => {
                if let Some(shaped) = &l.shaped {
                    let origin = rect.origin() + l.text_offset(rect);
                    painter.draw_text(shaped, origin, l.color.unwrap_or(theme.font_color));
                }
            }
            Widget::ProgressBar(p) => {
                painter.draw_style_box(&theme.progress_bg, rect);
                if p.ratio() > 0.0 {
                    painter.draw_style_box(&theme.progress_fill, p.fill_rect(rect));
                }
                let size = p.shaped.size;
                let origin = Point::new(
                    center(rect.x0, rect.width(), size.width),
                    center(rect.y0, rect.height(), size.height),
                );
                painter.draw_text(&p.shaped, origin, theme.font_color);
            }
            Widget::SpinBox(s) => {
                let style = if s.focused || s.hovered {
                    &theme.spin_box_focused
                } else {
                    &theme.spin_box_normal
                };
                painter.draw_style_box(style, rect);
                let arrows_x = (rect.x1 - theme.spin_box_arrow_width).max(rect.x0);
                painter.draw_style_box(
                    &theme.spin_box_arrows,
                    Rect::new(arrows_x, rect.y0, rect.x1, rect.y1),
                );
                let origin = rect.origin()
                    + Vec2::new(0.0, (rect.height() - s.shaped.size.height) / 2.0);
                painter.draw_text(&s.shaped, origin, theme.font_color);
            }
            Widget::TextureRect(t) => {
                if let (Some(tex), Some(target)) = (t.texture, t.draw_rect(rect)) {
                    painter.draw_texture(tex.id, target);
                }
            }
            _ => {}
        }
    }
}

/// Start of a span of `content` centered in `extent` beginning at `start`.
fn center(start: f64, extent: f64, content: f64) -> f64 {
    start + (extent - content) / 2.0
}
