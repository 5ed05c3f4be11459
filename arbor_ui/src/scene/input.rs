// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input propagation and button activation.

use arbor_responder::adapters::tree::router_for;
use arbor_responder::types::{EventKind, InputEvent};
use arbor_tree::{NodeFlags, NodeId};
use tracing::trace;

use super::Scene;
use crate::element::{MouseFilter, Widget};
use crate::signal::Signal;

impl Scene {
    /// Deliver `event` to the tree, topmost node first.
    ///
    /// Children are visited in reverse order before their parent. Hidden subtrees are
    /// skipped, and so are the descendants of a clipping node (a scroll container)
    /// when a pointer event lies outside its rect.
    pub fn propagate_input(&mut self, event: &mut InputEvent) {
        let order =
            router_for(&self.tree).route_with(self.root, |&id| self.prunes_input(id, event));
        trace!(kind = ?event.kind(), nodes = order.len(), "propagate input");
        for id in order {
            if self.is_visible(id) {
                self.input_node(id, event);
            }
        }
    }

    fn prunes_input(&self, id: NodeId, event: &InputEvent) -> bool {
        let Some(el) = self.tree.get(id) else {
            return true;
        };
        if !self
            .tree
            .flags(id)
            .is_some_and(|f| f.contains(NodeFlags::VISIBLE))
        {
            return true;
        }
        if el.widget.clips_input()
            && let Some(pos) = event.position()
        {
            return !self.global_rect(id).is_some_and(|r| r.contains(pos));
        }
        false
    }

    fn input_node(&mut self, id: NodeId, event: &mut InputEvent) {
        let Some(filter) = self.control(id).map(|c| c.mouse_filter) else {
            return;
        };
        let Some(rect) = self.global_rect(id) else {
            return;
        };
        let pointer = event.position();
        if pointer.is_some()
            && (filter == MouseFilter::Ignore
                || (event.is_consumed() && filter != MouseFilter::Stop))
        {
            return;
        }

        let mut consume = false;
        let theme_step = self.theme.scroll_step;
        match self.tree.get_mut(id).map(|el| &mut el.widget) {
            Some(Widget::Button(b)) => {
                let was_pressed = b.pressed;
                let response = b.handle_input(event, rect);
                consume = response.consume;
                if response.activated {
                    self.button_activated(id, response.toggled, was_pressed);
                }
            }
            Some(Widget::SpinBox(_)) => {
                let seen: &InputEvent = event;
                let response = self
                    .edit(id, |w| match w {
                        Widget::SpinBox(s) => Some(s.handle_input(seen, rect)),
                        _ => None,
                    })
                    .unwrap_or_default();
                consume = response.consume;
                if response.focus_entered {
                    self.emit(id, Signal::FocusEntered);
                }
                if response.value_changed {
                    self.emit(id, Signal::ValueChanged);
                }
            }
            Some(Widget::Scroll(s)) => {
                if let EventKind::MouseScroll { delta, position } = *event.kind()
                    && !event.is_consumed()
                    && rect.contains(position)
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "Scroll offsets are whole pixels; the value is rounded first."
                    )]
                    let amount = (delta * theme_step).round() as i32;
                    let (h, v) = if s.vertical_enabled {
                        (None, Some(s.vscroll.saturating_add(amount)))
                    } else if s.horizontal_enabled {
                        (Some(s.hscroll.saturating_add(amount)), None)
                    } else {
                        (None, None)
                    };
                    if h.is_some() || v.is_some() {
                        self.set_scroll(id, h, v);
                        consume = true;
                    }
                }
            }
            _ => {}
        }

        let contains = pointer.is_some_and(|p| rect.contains(p));
        let stop_kind = matches!(
            event.kind(),
            EventKind::MouseButton { .. } | EventKind::MouseMotion { .. }
        );
        if filter == MouseFilter::Stop && !event.is_consumed() && stop_kind && contains {
            consume = true;
        }
        if consume && filter != MouseFilter::PassThrough {
            event.consume();
        }
    }

    /// Emit `Pressed`, apply radio semantics without further signals, then emit
    /// `Toggled` if the toggle state ended up different from `was_pressed`.
    fn button_activated(&mut self, id: NodeId, toggled: bool, was_pressed: bool) {
        self.emit(id, Signal::Pressed);
        if let Some(group) = self.button(id).and_then(|b| b.group) {
            let members = self.button_group_members(group).to_vec();
            for m in members {
                if let Some(Widget::Button(b)) = self.tree.get_mut(m).map(|el| &mut el.widget) {
                    b.pressed = m == id;
                }
            }
        }
        if toggled && self.button(id).is_some_and(|b| b.pressed != was_pressed) {
            self.emit(id, Signal::Toggled);
        }
    }

    /// Activate a button as if clicked. Returns `false` if `id` is not a button.
    pub fn press_button(&mut self, id: NodeId) -> bool {
        let (toggled, was_pressed) = match self.tree.get_mut(id).map(|el| &mut el.widget) {
            Some(Widget::Button(b)) => {
                let was_pressed = b.pressed;
                (b.activate(), was_pressed)
            }
            _ => return false,
        };
        self.button_activated(id, toggled, was_pressed);
        true
    }
}
