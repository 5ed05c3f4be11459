// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio buttons: a group of toggle buttons where clicking one releases the others.
//!
//! Run:
//! - `cargo run -p arbor_demos --example button_group`

use std::cell::Cell;
use std::rc::Rc;

use arbor_responder::types::{InputEvent, InputQueue, MouseButton};
use arbor_ui::{BoxContainer, Button, DisplayList, Scene, Signal};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = Scene::new(Size::new(300.0, 40.0));
    let root = scene.root();
    let hbox = scene.add_child(root, BoxContainer::horizontal()).unwrap();
    scene.set_anchor_full_rect(hbox, true);
    scene.when_window_size_changed(Size::new(300.0, 40.0));

    let group = scene.new_button_group();
    let toggles = Rc::new(Cell::new(0_u32));
    let mut buttons = Vec::new();
    for text in ["low", "mid", "high"] {
        let b = scene
            .add_child(hbox, Button::new(text).with_toggle_mode(true))
            .unwrap();
        scene.set_button_group(b, Some(group));
        let toggles = Rc::clone(&toggles);
        scene.connect(b, Signal::Toggled, move || toggles.set(toggles.get() + 1));
        buttons.push(b);
    }

    let mut input = InputQueue::new();
    let mut list = DisplayList::new();
    scene.process(&mut input, 0.0, &mut list);

    for &target in buttons.iter().rev() {
        let rect = scene.global_rect(target).unwrap();
        let at = Point::new(rect.center().x, rect.center().y);
        input.push(InputEvent::mouse_button(MouseButton::Left, true, at));
        input.push(InputEvent::mouse_button(MouseButton::Left, false, at));
        scene.process(&mut input, 0.016, &mut list);
        input.clear();

        let pressed = scene.pressed_in_group(group).map(|id| scene.text(id).unwrap_or_default());
        println!("clicked {:<5} -> pressed {:?}", scene.text(target).unwrap_or_default(), pressed);
        assert_eq!(scene.pressed_in_group(group), Some(target));
    }
    println!("toggled signals: {}", toggles.get());
    assert_eq!(toggles.get(), 3);
}
