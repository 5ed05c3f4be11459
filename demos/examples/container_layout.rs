// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box container distribution with sizing flags.
//!
//! Four buttons share an 800x100 horizontal box. One keeps its minimum size, two
//! expand (one of them twice as hard), and one shrinks to the vertical center of
//! its slot. Then the same buttons are stacked in a 200x300 vertical box.
//!
//! Run:
//! - `RUST_LOG=arbor_ui=debug cargo run -p arbor_demos --example container_layout`

use arbor_responder::types::InputQueue;
use arbor_ui::{
    BoxContainer, Button, DisplayList, NodeId, Scene, ShrinkFlag, SizingDirective,
};
use kurbo::Size;
use tracing_subscriber::EnvFilter;

fn report(scene: &Scene, title: &str, ids: &[NodeId]) {
    println!("== {title} ==");
    for &id in ids {
        println!(
            "  {:<28} pos {:?} size {:?}",
            scene.node_path(id),
            scene.position(id).unwrap_or_default(),
            scene.size(id).unwrap_or_default(),
        );
    }
}

fn populate(scene: &mut Scene, parent: NodeId) -> Vec<NodeId> {
    let plain = scene.add_child(parent, Button::new("plain")).unwrap();
    let wide = scene.add_child(parent, Button::new("wide")).unwrap();
    scene.set_sizing(wide, SizingDirective::expand().with_stretch_ratio(2.0));
    let even = scene.add_child(parent, Button::new("even")).unwrap();
    scene.set_sizing(even, SizingDirective::expand());
    let centered = scene.add_child(parent, Button::new("mid")).unwrap();
    scene.set_sizing(
        centered,
        SizingDirective::default().with_flags(ShrinkFlag::ShrinkCenter, ShrinkFlag::ShrinkCenter),
    );
    vec![plain, wide, even, centered]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = Scene::new(Size::new(800.0, 100.0));
    let root = scene.root();
    let hbox = scene.add_child(root, BoxContainer::horizontal()).unwrap();
    scene.set_anchor_full_rect(hbox, true);
    scene.when_window_size_changed(Size::new(800.0, 100.0));
    let buttons = populate(&mut scene, hbox);

    let mut input = InputQueue::new();
    let mut list = DisplayList::new();
    scene.process(&mut input, 0.0, &mut list);
    report(&scene, "horizontal 800x100", &buttons);

    // Same children, stacked.
    scene.make_vertical(hbox);
    scene.when_window_size_changed(Size::new(200.0, 300.0));
    scene.process(&mut input, 0.0, &mut list);
    report(&scene, "vertical 200x300", &buttons);

    tracing::info!(commands = list.commands().len(), "frame recorded");
}
