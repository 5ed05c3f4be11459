// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push and toggle buttons.

use arbor_responder::types::{EventKind, InputEvent, MouseButton};
use kurbo::{Rect, Size};

use crate::paint::Texture;
use crate::text::ShapedText;

/// Opaque identifier of a radio group, see [`Scene::new_button_group`](crate::Scene::new_button_group).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ButtonGroupId(pub(crate) usize);

/// Visual state of a [`Button`], derived from its flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Not hovered, not held.
    Idle,
    /// Under the cursor.
    Hovered,
    /// Held down after a press that started inside (toggle buttons only show this while held).
    PressedInside,
    /// Pressed (held down, or toggled on).
    Pressed,
}

/// A clickable button with an optional icon left of its text.
#[derive(Clone, Debug)]
pub struct Button {
    pub(crate) text: String,
    pub(crate) icon: Option<Texture>,
    pub(crate) toggle_mode: bool,
    pub(crate) pressed: bool,
    pub(crate) hovered: bool,
    pub(crate) pressed_inside: bool,
    pub(crate) group: Option<ButtonGroupId>,
    pub(crate) shaped: ShapedText,
}

/// What the scene must do after a button saw an event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ButtonResponse {
    pub(crate) consume: bool,
    pub(crate) activated: bool,
    pub(crate) toggled: bool,
}

impl Button {
    /// A push button.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            toggle_mode: false,
            pressed: false,
            hovered: false,
            pressed_inside: false,
            group: None,
            shaped: ShapedText::default(),
        }
    }

    /// Builder: make this a toggle button.
    pub fn with_toggle_mode(mut self, toggle_mode: bool) -> Self {
        self.toggle_mode = toggle_mode;
        self
    }

    /// Builder: show `icon` before the text.
    pub fn with_icon(mut self, icon: Texture) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Button text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Icon, if any.
    pub fn icon(&self) -> Option<Texture> {
        self.icon
    }

    /// Whether presses flip a persistent pressed state.
    pub fn is_toggle_mode(&self) -> bool {
        self.toggle_mode
    }

    /// Pressed flag.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Hover flag.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Radio group membership.
    pub fn group(&self) -> Option<ButtonGroupId> {
        self.group
    }

    /// Derived visual state.
    pub fn state(&self) -> ButtonState {
        if self.pressed {
            ButtonState::Pressed
        } else if self.pressed_inside {
            ButtonState::PressedInside
        } else if self.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        }
    }

    /// Icon and text side by side.
    pub(crate) fn content_size(&self) -> Size {
        let icon = self.icon.map(|t| t.size).unwrap_or(Size::ZERO);
        Size::new(
            icon.width + self.shaped.size.width,
            icon.height.max(self.shaped.size.height),
        )
    }

    /// Complete an activation. Returns `true` if the toggle state flipped.
    pub(crate) fn activate(&mut self) -> bool {
        self.pressed_inside = false;
        if self.toggle_mode {
            self.pressed = !self.pressed;
            true
        } else {
            self.pressed = false;
            false
        }
    }

    /// Run the press/hover state machine for one event. `rect` is the global rect.
    pub(crate) fn handle_input(&mut self, event: &InputEvent, rect: Rect) -> ButtonResponse {
        let mut response = ButtonResponse::default();
        match *event.kind() {
            EventKind::MouseMotion { position, .. } => {
                if !event.is_consumed() && rect.contains(position) {
                    self.hovered = true;
                    response.consume = true;
                } else {
                    self.hovered = false;
                    if !self.toggle_mode {
                        self.pressed = false;
                    }
                    self.pressed_inside = false;
                }
            }
            EventKind::MouseButton {
                button: MouseButton::Left,
                pressed,
                position,
            } => {
                if event.is_consumed() || !rect.contains(position) {
                    if !pressed {
                        if !self.toggle_mode {
                            self.pressed = false;
                        }
                        self.pressed_inside = false;
                    }
                } else if pressed {
                    if !self.toggle_mode {
                        self.pressed = true;
                    }
                    self.pressed_inside = true;
                    response.consume = true;
                } else {
                    if self.pressed_inside {
                        response.activated = true;
                        response.toggled = self.activate();
                    } else if !self.toggle_mode {
                        self.pressed = false;
                    }
                    response.consume = true;
                }
            }
            _ => {}
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Vec2};

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 40.0);

    fn click(button: &mut Button, at: Point) -> (ButtonResponse, ButtonResponse) {
        let down = InputEvent::mouse_button(MouseButton::Left, true, at);
        let up = InputEvent::mouse_button(MouseButton::Left, false, at);
        (button.handle_input(&down, RECT), button.handle_input(&up, RECT))
    }

    #[test]
    fn push_button_activates_on_release_inside() {
        let mut b = Button::new("ok");
        let down = InputEvent::mouse_button(MouseButton::Left, true, Point::new(5.0, 5.0));
        assert!(b.handle_input(&down, RECT).consume);
        assert_eq!(b.state(), ButtonState::Pressed);
        let up = InputEvent::mouse_button(MouseButton::Left, false, Point::new(5.0, 5.0));
        let r = b.handle_input(&up, RECT);
        assert!(r.activated && !r.toggled && r.consume);
        assert!(!b.is_pressed());
    }

    #[test]
    fn release_elsewhere_cancels() {
        let mut b = Button::new("ok");
        let down = InputEvent::mouse_button(MouseButton::Left, true, Point::new(5.0, 5.0));
        b.handle_input(&down, RECT);
        let up = InputEvent::mouse_button(MouseButton::Left, false, Point::new(500.0, 5.0));
        let r = b.handle_input(&up, RECT);
        assert!(!r.activated);
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn consumed_release_cancels() {
        let mut b = Button::new("ok");
        let down = InputEvent::mouse_button(MouseButton::Left, true, Point::new(5.0, 5.0));
        b.handle_input(&down, RECT);
        let mut up = InputEvent::mouse_button(MouseButton::Left, false, Point::new(5.0, 5.0));
        up.consume();
        assert!(!b.handle_input(&up, RECT).activated);
        assert!(!b.is_pressed());
    }

    #[test]
    fn toggle_flips_on_each_click() {
        let mut b = Button::new("t").with_toggle_mode(true);
        let (down, up) = click(&mut b, Point::new(1.0, 1.0));
        assert!(down.consume && up.activated && up.toggled);
        assert!(b.is_pressed());
        let (_, up) = click(&mut b, Point::new(1.0, 1.0));
        assert!(up.toggled);
        assert!(!b.is_pressed());
    }

    #[test]
    fn hover_follows_unconsumed_motion() {
        let mut b = Button::new("h").with_toggle_mode(true);
        b.pressed = true;
        let inside = InputEvent::mouse_motion(Point::new(3.0, 3.0), Vec2::ZERO);
        assert!(b.handle_input(&inside, RECT).consume);
        assert!(b.is_hovered());
        let mut covered = inside;
        covered.consume();
        b.handle_input(&covered, RECT);
        assert!(!b.is_hovered());
        assert!(b.is_pressed(), "toggle state survives leaving");
    }

    #[test]
    fn content_is_icon_then_text() {
        let mut b = Button::new("x").with_icon(Texture::new(
            crate::paint::TextureId(1),
            Size::new(16.0, 16.0),
        ));
        b.shaped.size = Size::new(30.0, 12.0);
        assert_eq!(b.content_size(), Size::new(46.0, 16.0));
    }
}
