// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scroll container showing a tall column of labels.
//!
//! Wheel events over the container move the content by the theme's scroll step.
//! Clicks outside the visible area never reach the content.
//!
//! Run:
//! - `cargo run -p arbor_demos --example scroll`

use arbor_responder::types::{InputEvent, InputQueue};
use arbor_ui::{BoxContainer, DisplayList, DrawCommand, Label, ScrollContainer, Scene, Widget};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = Scene::new(Size::new(240.0, 160.0));
    let root = scene.root();
    let scroll = scene
        .add_child(root, ScrollContainer::new().with_enabled(false, true))
        .unwrap();
    scene.set_anchor_full_rect(scroll, true);
    scene.when_window_size_changed(Size::new(240.0, 160.0));

    let column = scene.add_child(scroll, BoxContainer::vertical()).unwrap();
    for i in 0..20 {
        scene.add_child(column, Label::new(format!("line {i:02}"))).unwrap();
    }

    let mut input = InputQueue::new();
    let mut list = DisplayList::new();
    scene.process(&mut input, 0.0, &mut list);
    println!("content size {:?}", scene.size(column).unwrap_or_default());

    for _ in 0..3 {
        input.push(InputEvent::mouse_scroll(1.0, Point::new(120.0, 80.0)));
        list.clear();
        scene.process(&mut input, 0.016, &mut list);
        input.clear();

        let offset = match scene.widget(scroll) {
            Some(Widget::Scroll(s)) => s.vscroll(),
            _ => 0,
        };
        let clips = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::PushClip { .. }))
            .count();
        println!(
            "vscroll {offset:>4}, column at {:?}, {clips} clip(s)",
            scene.position(column).unwrap_or_default()
        );
    }
}
