// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric field adjusted by dragging or scrolling.

use arbor_responder::types::{EventKind, InputEvent, MouseButton};
use kurbo::Rect;

use crate::text::ShapedText;

/// A numeric input field.
///
/// Pressing inside focuses the field and starts a drag; horizontal motion while
/// dragging changes the value by `relative.x * step`. The wheel changes it by one
/// step per notch, upwards (negative delta) increasing it.
#[derive(Clone, Debug)]
pub struct SpinBox {
    pub(crate) value: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) step: f64,
    pub(crate) clamped: bool,
    pub(crate) is_integer: bool,
    pub(crate) rounding_digits: usize,
    pub(crate) focused: bool,
    pub(crate) hovered: bool,
    pub(crate) dragging: bool,
    pub(crate) shaped: ShapedText,
}

impl Default for SpinBox {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            clamped: false,
            is_integer: false,
            rounding_digits: 3,
            focused: false,
            hovered: false,
            dragging: false,
            shaped: ShapedText::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SpinResponse {
    pub(crate) consume: bool,
    pub(crate) focus_entered: bool,
    pub(crate) value_changed: bool,
}

impl SpinBox {
    /// A field at zero with range 0..=100 (unclamped) and step 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the range and clamp to it.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max.max(min);
        self.clamped = true;
        self.set_value(self.value);
        self
    }

    /// Builder: set the drag/scroll step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Builder: round every value to an integer.
    pub fn with_integer(mut self, is_integer: bool) -> Self {
        self.is_integer = is_integer;
        self.set_value(self.value);
        self
    }

    /// Builder: digits shown after the decimal point. Display only.
    pub fn with_rounding_digits(mut self, digits: usize) -> Self {
        self.rounding_digits = digits;
        self
    }

    /// Builder: set the value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Current value, unrounded.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the cursor is over the field.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The value as displayed.
    pub fn display_text(&self) -> String {
        if self.is_integer {
            format!("{:.0}", self.value)
        } else {
            format!("{:.*}", self.rounding_digits, self.value)
        }
    }

    /// Apply integer rounding and clamping. Returns `true` if the value changed.
    pub(crate) fn set_value(&mut self, value: f64) -> bool {
        let mut v = value;
        if self.is_integer {
            v = v.round();
        }
        if self.clamped {
            v = v.clamp(self.min, self.max);
        }
        let changed = v != self.value;
        self.value = v;
        changed
    }

    pub(crate) fn handle_input(&mut self, event: &InputEvent, rect: Rect) -> SpinResponse {
        let mut response = SpinResponse::default();
        let consumed = event.is_consumed();
        match *event.kind() {
            EventKind::MouseButton {
                button: MouseButton::Left,
                pressed: true,
                position,
            } => {
                if !consumed && rect.contains(position) {
                    response.focus_entered = !self.focused;
                    self.focused = true;
                    self.dragging = true;
                    response.consume = true;
                } else {
                    self.focused = false;
                    self.dragging = false;
                }
            }
            EventKind::MouseButton {
                button: MouseButton::Left,
                pressed: false,
                position,
            } => {
                self.dragging = false;
                response.consume = !consumed && rect.contains(position);
            }
            EventKind::MouseMotion { relative, position } => {
                self.hovered = !consumed && rect.contains(position);
                if self.dragging && !consumed {
                    response.value_changed = self.set_value(self.value + relative.x * self.step);
                    response.consume = true;
                } else {
                    response.consume = self.hovered;
                }
            }
            EventKind::MouseScroll { delta, position } => {
                if !consumed && rect.contains(position) && delta != 0.0 {
                    let v = self.value - delta.signum() * self.step;
                    response.value_changed = self.set_value(v);
                    response.consume = true;
                }
            }
            _ => {}
        }
        response
    }
}
