// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal progress indicator with a percentage label.

use kurbo::Rect;

use crate::text::ShapedText;

/// A bar filled in proportion to a value within a range.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    pub(crate) value: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) step: f64,
    pub(crate) shaped: ShapedText,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            value: 50.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            shaped: ShapedText::default(),
        }
    }
}

impl ProgressBar {
    /// A bar at 50 out of 0..=100.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the range; the value is re-clamped.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max.max(min);
        self.set_value(self.value);
        self
    }

    /// Builder: set the step the value snaps to. Zero disables snapping.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step.max(0.0);
        self
    }

    /// Builder: set the value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower and upper bound.
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Filled fraction in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Snap to the step, clamp to the range. Returns `true` if the value changed.
    pub(crate) fn set_value(&mut self, value: f64) -> bool {
        let mut v = value;
        if self.step > 0.0 {
            v = self.min + ((v - self.min) / self.step).round() * self.step;
        }
        let v = v.clamp(self.min, self.max);
        let changed = v != self.value;
        self.value = v;
        changed
    }

    pub(crate) fn percent_text(&self) -> String {
        format!("{:.0}%", self.ratio() * 100.0)
    }

    /// Filled part of `rect`.
    pub(crate) fn fill_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0,
            rect.y0,
            rect.x0 + rect.width() * self.ratio(),
            rect.y1,
        )
    }
}
