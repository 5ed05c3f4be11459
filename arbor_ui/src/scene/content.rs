// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget content: measurement and the setters that can change a widget's size.

use arbor_tree::NodeId;
use kurbo::Insets;

use super::Scene;
use crate::element::{MouseFilter, Widget};
use crate::paint::Texture;
use crate::signal::Signal;
use crate::sizing::Axis;
use crate::text::{Alignment, FontId, ShapeRequest};
use crate::theme::Color;
use crate::widgets::StretchMode;

impl Scene {
    /// Re-shape the text of `id`, if it shows any.
    pub(crate) fn measure(&mut self, id: NodeId) {
        let theme = &self.theme;
        let shaper = &*self.shaper;
        let default_font = self.default_font;
        let Some(el) = self.tree.get_mut(id) else {
            return;
        };
        let shape = |text: &str, lang: &str, font: FontId, font_size: f64| {
            shaper.shape(&ShapeRequest {
                text,
                lang,
                font,
                font_size,
            })
        };
        match &mut el.widget {
            Widget::Label(l) => {
                l.shaped = l.font.map(|font| {
                    shape(
                        &l.text,
                        &l.lang,
                        font,
                        l.font_size.unwrap_or(theme.font_size),
                    )
                });
            }
            Widget::Button(b) => {
                b.shaped = default_font
                    .map(|font| shape(&b.text, "en", font, theme.font_size))
                    .unwrap_or_default();
            }
            Widget::ProgressBar(p) => {
                let text = p.percent_text();
                p.shaped = default_font
                    .map(|font| shape(&text, "en", font, theme.font_size))
                    .unwrap_or_default();
            }
            Widget::SpinBox(s) => {
                let text = s.display_text();
                s.shaped = default_font
                    .map(|font| shape(&text, "en", font, theme.font_size))
                    .unwrap_or_default();
            }
            _ => {}
        }
    }

    /// Mutate the widget of `id`, then re-measure it and invalidate layout if its
    /// minimum size moved.
    pub(crate) fn edit<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut Widget) -> Option<R>,
    ) -> Option<R> {
        let before = self.calc_minimum_size(id);
        let out = f(&mut self.tree.get_mut(id)?.widget)?;
        self.measure(id);
        if self.calc_minimum_size(id) != before {
            self.when_subtree_changed(id);
        }
        Some(out)
    }

    /// Mutate a container's configuration and always re-run its layout.
    fn edit_container(&mut self, id: NodeId, f: impl FnOnce(&mut Widget) -> bool) -> bool {
        let Some(el) = self.tree.get_mut(id) else {
            return false;
        };
        if !f(&mut el.widget) {
            return false;
        }
        self.when_subtree_changed(id);
        true
    }

    // --- text ---

    /// Replace the text of a label or button.
    pub fn set_text(&mut self, id: NodeId, text: &str) -> bool {
        self.edit(id, |w| match w {
            Widget::Label(l) => {
                l.text = text.into();
                Some(())
            }
            Widget::Button(b) => {
                b.text = text.into();
                Some(())
            }
            _ => None,
        })
        .is_some()
    }

    /// Text of a label or button.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.widget(id)? {
            Widget::Label(l) => Some(&l.text),
            Widget::Button(b) => Some(&b.text),
            _ => None,
        }
    }

    /// Insert `text` into a label before character `position`.
    pub fn insert_text(&mut self, id: NodeId, position: usize, text: &str) -> bool {
        self.edit(id, |w| match w {
            Widget::Label(l) => {
                l.insert_text(position, text);
                Some(())
            }
            _ => None,
        })
        .is_some()
    }

    /// Remove `count` characters from a label starting at character `position`.
    pub fn remove_text(&mut self, id: NodeId, position: usize, count: usize) -> bool {
        self.edit(id, |w| match w {
            Widget::Label(l) => {
                l.remove_text(position, count);
                Some(())
            }
            _ => None,
        })
        .is_some()
    }

    /// Set or clear a label's font. A label without a font is not measured.
    pub fn set_font(&mut self, id: NodeId, font: Option<FontId>) -> bool {
        self.edit(id, |w| match w {
            Widget::Label(l) => {
                l.font = font;
                Some(())
            }
            _ => None,
        })
        .is_some()
    }

    /// Override a label's font size and color; `None` falls back to the theme.
    pub fn set_text_style(
        &mut self,
        id: NodeId,
        font_size: Option<f64>,
        color: Option<Color>,
    ) -> bool {
        self.edit(id, |w| match w {
            Widget::Label(l) => {
                l.font_size = font_size;
                l.color = color;
                Some(())
            }
            _ => None,
        })
        .is_some()
    }

    /// Set a label's alignment inside its rect.
    pub fn set_alignment(&mut self, id: NodeId, horizontal: Alignment, vertical: Alignment) -> bool {
        match self.tree.get_mut(id).map(|el| &mut el.widget) {
            Some(Widget::Label(l)) => {
                l.h_align = horizontal;
                l.v_align = vertical;
                true
            }
            _ => false,
        }
    }

    // --- buttons ---

    /// Set or clear a button's icon. A replaced icon is released.
    pub fn set_icon(&mut self, id: NodeId, icon: Option<Texture>) -> bool {
        let old = self.edit(id, |w| match w {
            Widget::Button(b) => Some(core::mem::replace(&mut b.icon, icon)),
            _ => None,
        });
        match old {
            Some(old) => {
                self.release_texture(old, icon);
                true
            }
            None => false,
        }
    }

    /// Switch a button between push and toggle behavior.
    pub fn set_toggle_mode(&mut self, id: NodeId, toggle_mode: bool) -> bool {
        match self.tree.get_mut(id).map(|el| &mut el.widget) {
            Some(Widget::Button(b)) => {
                b.toggle_mode = toggle_mode;
                if !toggle_mode {
                    b.pressed = false;
                }
                true
            }
            _ => false,
        }
    }

    // --- ranges ---

    /// Set the value of a progress bar or spin box.
    ///
    /// [`Signal::ValueChanged`] fires only if the stored value changed.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> bool {
        let changed = self.edit(id, |w| match w {
            Widget::ProgressBar(p) => Some(p.set_value(value)),
            Widget::SpinBox(s) => Some(s.set_value(value)),
            _ => None,
        });
        if changed == Some(true) {
            self.emit(id, Signal::ValueChanged);
        }
        changed.is_some()
    }

    /// Value of a progress bar or spin box.
    pub fn value(&self, id: NodeId) -> Option<f64> {
        match self.widget(id)? {
            Widget::ProgressBar(p) => Some(p.value),
            Widget::SpinBox(s) => Some(s.value),
            _ => None,
        }
    }

    /// Set the range of a progress bar, or of a spin box (which then clamps).
    pub fn set_range(&mut self, id: NodeId, min: f64, max: f64) -> bool {
        let changed = self.edit(id, |w| match w {
            Widget::ProgressBar(p) => {
                p.min = min;
                p.max = max.max(min);
                Some(p.set_value(p.value))
            }
            Widget::SpinBox(s) => {
                s.min = min;
                s.max = max.max(min);
                s.clamped = true;
                Some(s.set_value(s.value))
            }
            _ => None,
        });
        if changed == Some(true) {
            self.emit(id, Signal::ValueChanged);
        }
        changed.is_some()
    }

    /// Set the step of a progress bar or spin box.
    pub fn set_step(&mut self, id: NodeId, step: f64) -> bool {
        match self.tree.get_mut(id).map(|el| &mut el.widget) {
            Some(Widget::ProgressBar(p)) => {
                p.step = step.max(0.0);
                true
            }
            Some(Widget::SpinBox(s)) => {
                s.step = step;
                true
            }
            _ => false,
        }
    }

    // --- containers ---

    /// Set a margin container's margins.
    pub fn set_margins(&mut self, id: NodeId, margins: Insets) -> bool {
        self.edit_container(id, |w| match w {
            Widget::Margin(m) => {
                m.margins = margins;
                true
            }
            _ => false,
        })
    }

    /// Set every margin of a margin container to `margin`.
    pub fn set_margin_all(&mut self, id: NodeId, margin: f64) -> bool {
        self.set_margins(id, Insets::uniform(margin))
    }

    /// Set a box container's separation; `None` uses the theme value.
    pub fn set_separation(&mut self, id: NodeId, separation: Option<f64>) -> bool {
        self.edit_container(id, |w| match w {
            Widget::Box(b) => {
                b.separation = separation.map(|s| s.max(0.0));
                true
            }
            _ => false,
        })
    }

    /// Turn a box container into a vertical stack.
    pub fn make_vertical(&mut self, id: NodeId) -> bool {
        self.edit_container(id, |w| match w {
            Widget::Box(b) => {
                b.axis = Axis::Vertical;
                true
            }
            _ => false,
        })
    }

    /// Set a scroll container's horizontal offset.
    pub fn set_hscroll(&mut self, id: NodeId, value: i32) -> bool {
        self.set_scroll(id, Some(value), None)
    }

    /// Set a scroll container's vertical offset.
    pub fn set_vscroll(&mut self, id: NodeId, value: i32) -> bool {
        self.set_scroll(id, None, Some(value))
    }

    pub(crate) fn set_scroll(&mut self, id: NodeId, h: Option<i32>, v: Option<i32>) -> bool {
        match self.tree.get_mut(id) {
            Some(el) => match &mut el.widget {
                Widget::Scroll(s) => {
                    s.hscroll = h.unwrap_or(s.hscroll);
                    s.vscroll = v.unwrap_or(s.vscroll);
                    // The minimum size is unaffected; only this container re-places its content.
                    el.layout_dirty = true;
                    true
                }
                _ => false,
            },
            None => false,
        }
    }

    /// Choose a scroll container's scrolling axes.
    pub fn set_scroll_enabled(&mut self, id: NodeId, horizontal: bool, vertical: bool) -> bool {
        self.edit_container(id, |w| match w {
            Widget::Scroll(s) => {
                s.horizontal_enabled = horizontal;
                s.vertical_enabled = vertical;
                true
            }
            _ => false,
        })
    }

    // --- textures ---

    /// Set or clear a texture rect's texture. A replaced texture is released.
    pub fn set_texture(&mut self, id: NodeId, texture: Option<Texture>) -> bool {
        let old = self.edit(id, |w| match w {
            Widget::TextureRect(t) => Some(core::mem::replace(&mut t.texture, texture)),
            _ => None,
        });
        match old {
            Some(old) => {
                self.release_texture(old, texture);
                true
            }
            None => false,
        }
    }

    /// Set a texture rect's stretch mode.
    pub fn set_stretch_mode(&mut self, id: NodeId, mode: StretchMode) -> bool {
        match self.tree.get_mut(id).map(|el| &mut el.widget) {
            Some(Widget::TextureRect(t)) => {
                t.stretch_mode = mode;
                true
            }
            _ => false,
        }
    }

    /// Whether a texture rect ignores its texture size for its minimum size.
    pub fn set_expand(&mut self, id: NodeId, expand: bool) -> bool {
        self.edit(id, |w| match w {
            Widget::TextureRect(t) => {
                t.expand = expand;
                Some(())
            }
            _ => None,
        })
        .is_some()
    }

    fn release_texture(&mut self, old: Option<Texture>, new: Option<Texture>) {
        if let Some(old) = old
            && new.is_none_or(|n| n.id != old.id)
        {
            self.released
                .push(crate::paint::ResourceHandle::Texture(old.id));
        }
    }

    // --- input policy ---

    /// Set a control's pointer policy.
    pub fn set_mouse_filter(&mut self, id: NodeId, filter: MouseFilter) -> bool {
        let Some(c) = self.control_mut(id) else {
            return false;
        };
        c.mouse_filter = filter;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{ResourceHandle, TextureId};
    use crate::widgets::{Button, Label, ProgressBar, SpinBox, TextureRect};
    use kurbo::Size;

    fn scene() -> Scene {
        Scene::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn label_measures_text_at_theme_size() {
        let mut s = scene();
        let root = s.root();
        let l = s.add_child(root, Label::new("abcd")).unwrap();
        // 4 chars * 32 * 0.5
        assert_eq!(s.calc_minimum_size(l), Size::new(64.0, 32.0));
        s.set_text_style(l, Some(10.0), None);
        assert_eq!(s.calc_minimum_size(l), Size::new(20.0, 10.0));
    }

    #[test]
    fn label_without_font_is_floor_only() {
        let mut s = scene();
        let root = s.root();
        let l = s.add_child(root, Label::new("abcd")).unwrap();
        s.set_minimum_size(l, Size::new(3.0, 3.0));
        s.set_font(l, None);
        assert_eq!(s.calc_minimum_size(l), Size::new(3.0, 3.0));
        assert!(s.label(l).unwrap().shaped().is_none());
    }

    #[test]
    fn text_change_invalidates_only_when_size_moves() {
        let mut s = scene();
        let root = s.root();
        let l = s.add_child(root, Label::new("ab")).unwrap();
        s.propagate_update(0.0);
        s.set_text(l, "cd");
        assert!(!s.is_layout_dirty(l), "same extent");
        s.set_text(l, "abcdef");
        assert!(s.is_layout_dirty(l));
        s.insert_text(l, 0, "x");
        s.remove_text(l, 1, 2);
        assert_eq!(s.text(l), Some("xcdef"));
    }

    #[test]
    fn value_changed_only_on_change() {
        let mut s = scene();
        let root = s.root();
        let bar = s.add_child(root, ProgressBar::new()).unwrap();
        s.take_signals();
        assert!(s.set_value(bar, 50.0));
        assert!(s.take_signals().is_empty());
        s.set_value(bar, 75.0);
        let signals = s.take_signals();
        assert!(signals.iter().any(|e| e.signal == Signal::ValueChanged));
        assert_eq!(s.value(bar), Some(75.0));
    }

    #[test]
    fn spin_box_minimum_includes_arrows() {
        let mut s = scene();
        let root = s.root();
        let spin = s.add_child(root, SpinBox::new().with_integer(true)).unwrap();
        // "0" at 32px is 16 wide, plus the arrow column.
        assert_eq!(s.calc_minimum_size(spin), Size::new(40.0, 32.0));
        s.set_value(spin, 120.0);
        assert_eq!(s.calc_minimum_size(spin), Size::new(72.0, 32.0));
    }

    #[test]
    fn replaced_textures_are_released() {
        let mut s = scene();
        let root = s.root();
        let a = Texture::new(TextureId(1), Size::new(8.0, 8.0));
        let b = Texture::new(TextureId(2), Size::new(16.0, 8.0));
        let t = s.add_child(root, TextureRect::new().with_texture(a)).unwrap();
        assert_eq!(s.calc_minimum_size(t), Size::new(8.0, 8.0));
        s.set_texture(t, Some(b));
        assert_eq!(s.calc_minimum_size(t), Size::new(16.0, 8.0));
        assert_eq!(
            s.take_released_resources(),
            vec![ResourceHandle::Texture(TextureId(1))]
        );
        s.set_expand(t, true);
        assert_eq!(s.calc_minimum_size(t), Size::ZERO);
    }

    #[test]
    fn button_minimum_is_icon_plus_text() {
        let mut s = scene();
        let root = s.root();
        let icon = Texture::new(TextureId(5), Size::new(20.0, 40.0));
        let b = s
            .add_child(root, Button::new("ok").with_icon(icon))
            .unwrap();
        assert_eq!(s.calc_minimum_size(b), Size::new(52.0, 40.0));
        s.set_icon(b, None);
        assert_eq!(s.calc_minimum_size(b), Size::new(32.0, 32.0));
    }

    #[test]
    fn separation_change_relays_out() {
        let mut s = scene();
        let root = s.root();
        let hbox = s
            .add_child(root, crate::containers::BoxContainer::horizontal())
            .unwrap();
        s.propagate_update(0.0);
        assert!(s.set_separation(hbox, Some(2.0)));
        assert!(s.is_layout_dirty(hbox));
        assert!(!s.set_separation(root, Some(2.0)));
    }
}
