// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use arbor_responder::types::{InputEvent, InputQueue, MouseButton};
use arbor_tree::TreeError;
use kurbo::{Point, Size, Vec2};

use super::Scene;
use crate::containers::{BoxContainer, ScrollContainer};
use crate::element::{MouseFilter, Viewport, Widget};
use crate::paint::{DisplayList, RenderTargetId, ResourceHandle, Texture, TextureId};
use crate::signal::{Emission, Signal};
use crate::widgets::{Button, Label, SpinBox, TextureRect};

fn scene() -> Scene {
    Scene::new(Size::new(400.0, 300.0))
}

fn click(scene: &mut Scene, at: Point) {
    scene.propagate_input(&mut InputEvent::mouse_button(MouseButton::Left, true, at));
    scene.propagate_input(&mut InputEvent::mouse_button(MouseButton::Left, false, at));
}

/// Emissions other than the bookkeeping ones layout produces.
fn user_signals(scene: &mut Scene) -> Vec<Emission> {
    scene
        .take_signals()
        .into_iter()
        .filter(|e| !matches!(e.signal, Signal::SubtreeChanged | Signal::Resized))
        .collect()
}

fn button_at(scene: &mut Scene, button: Button, at: Point) -> arbor_tree::NodeId {
    let root = scene.root();
    let id = scene.add_child(root, button).unwrap();
    scene.set_position(id, at);
    scene.set_size(id, Size::new(100.0, 40.0));
    id
}

#[test]
fn topmost_sibling_claims_the_click() {
    let mut s = scene();
    let _a = button_at(&mut s, Button::new("a"), Point::ZERO);
    let _b = button_at(&mut s, Button::new("b"), Point::ZERO);
    let c = button_at(&mut s, Button::new("c"), Point::ZERO);
    s.take_signals();

    click(&mut s, Point::new(10.0, 10.0));
    assert_eq!(
        user_signals(&mut s),
        vec![Emission {
            node: c,
            signal: Signal::Pressed,
        }]
    );
}

#[test]
fn consumed_event_still_reaches_later_handlers() {
    let mut s = scene();
    let a = button_at(&mut s, Button::new("a"), Point::ZERO);
    let _b = button_at(&mut s, Button::new("b"), Point::ZERO);
    let mut motion = InputEvent::mouse_motion(Point::new(5.0, 5.0), Vec2::ZERO);
    s.propagate_input(&mut motion);
    assert!(motion.is_consumed());
    assert!(
        !s.button(a).unwrap().is_hovered(),
        "the covered button saw the event as consumed"
    );
}

#[test]
fn toggle_button_flips_per_click() {
    let mut s = scene();
    let b = button_at(&mut s, Button::new("t").with_toggle_mode(true), Point::ZERO);
    s.take_signals();

    let at = Point::new(10.0, 10.0);
    click(&mut s, at);
    assert!(s.button(b).unwrap().is_pressed());
    click(&mut s, at);
    assert!(!s.button(b).unwrap().is_pressed());

    let signals: Vec<Signal> = user_signals(&mut s).into_iter().map(|e| e.signal).collect();
    assert_eq!(
        signals,
        vec![
            Signal::Pressed,
            Signal::Toggled,
            Signal::Pressed,
            Signal::Toggled
        ]
    );
}

#[test]
fn button_group_keeps_one_pressed() {
    let mut s = scene();
    let group = s.new_button_group();
    let buttons: Vec<_> = (0..3)
        .map(|i| {
            let b = button_at(
                &mut s,
                Button::new(format!("{i}")).with_toggle_mode(true),
                Point::new(0.0, 50.0 * i as f64),
            );
            assert!(s.set_button_group(b, Some(group)));
            b
        })
        .collect();
    assert_eq!(s.button_group_members(group), buttons.as_slice());

    click(&mut s, Point::new(10.0, 10.0));
    assert_eq!(s.pressed_in_group(group), Some(buttons[0]));
    s.take_signals();

    click(&mut s, Point::new(10.0, 60.0));
    let pressed: Vec<bool> = buttons
        .iter()
        .map(|&b| s.button(b).unwrap().is_pressed())
        .collect();
    assert_eq!(pressed, vec![false, true, false]);
    let fired: Vec<Emission> = user_signals(&mut s)
        .into_iter()
        .filter(|e| e.signal == Signal::Pressed)
        .collect();
    assert_eq!(
        fired,
        vec![Emission {
            node: buttons[1],
            signal: Signal::Pressed,
        }],
        "members forced down fire nothing"
    );
}

#[test]
fn reclicking_the_pressed_group_member_does_not_toggle() {
    let mut s = scene();
    let group = s.new_button_group();
    let one = button_at(&mut s, Button::new("1").with_toggle_mode(true), Point::ZERO);
    let two = button_at(
        &mut s,
        Button::new("2").with_toggle_mode(true),
        Point::new(0.0, 50.0),
    );
    s.set_button_group(one, Some(group));
    s.set_button_group(two, Some(group));
    click(&mut s, Point::new(10.0, 10.0));
    s.take_signals();

    click(&mut s, Point::new(10.0, 10.0));
    assert!(s.button(one).unwrap().is_pressed());
    let signals: Vec<Signal> = user_signals(&mut s).into_iter().map(|e| e.signal).collect();
    assert_eq!(signals, vec![Signal::Pressed]);

    // Outside a group the same click still flips.
    s.set_button_group(one, None);
    click(&mut s, Point::new(10.0, 10.0));
    assert!(!s.button(one).unwrap().is_pressed());
    let signals: Vec<Signal> = user_signals(&mut s).into_iter().map(|e| e.signal).collect();
    assert_eq!(signals, vec![Signal::Pressed, Signal::Toggled]);
}

#[test]
fn copied_buttons_do_not_carry_group_membership() {
    let mut s = scene();
    let root = s.root();
    let group = s.new_button_group();
    let b = s.add_child(root, Button::new("x")).unwrap();
    s.set_button_group(b, Some(group));
    let copy = s.button(b).unwrap().clone();
    assert_eq!(copy.group(), Some(group));

    let mut other = scene();
    let other_root = other.root();
    let moved = other.add_child(other_root, copy.clone()).unwrap();
    assert_eq!(other.button(moved).unwrap().group(), None);
    assert!(other.set_button_group(moved, None));

    let again = s.add_child(root, copy).unwrap();
    assert_eq!(s.button(again).unwrap().group(), None);
    assert_eq!(s.button_group_members(group), &[b]);
}

#[test]
fn press_button_is_programmatic_activation() {
    let mut s = scene();
    let root = s.root();
    let b = s.add_child(root, Button::new("go")).unwrap();
    let l = s.add_child(root, Label::new("x")).unwrap();
    s.take_signals();

    assert!(s.press_button(b));
    assert!(!s.press_button(l));
    assert_eq!(
        user_signals(&mut s),
        vec![Emission {
            node: b,
            signal: Signal::Pressed,
        }]
    );
}

#[test]
fn callbacks_run_in_registration_order() {
    let mut s = scene();
    let root = s.root();
    let b = s.add_child(root, Button::new("go")).unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in [1, 2] {
        let log = Rc::clone(&log);
        assert!(s.connect(b, Signal::Pressed, move || log.borrow_mut().push(tag)));
    }
    assert_eq!(s.connections(b, Signal::Pressed), 2);
    assert_eq!(s.connections(b, Signal::Toggled), 0);

    s.press_button(b);
    s.press_button(b);
    assert_eq!(*log.borrow(), vec![1, 2, 1, 2]);
}

#[test]
fn wheel_scrolls_the_container() {
    let mut s = scene();
    let root = s.root();
    let scroll = s.add_child(root, ScrollContainer::new()).unwrap();
    let content = s.add_child(scroll, Widget::Control).unwrap();
    s.set_minimum_size(content, Size::new(100.0, 400.0));
    s.set_size(scroll, Size::new(100.0, 100.0));
    s.propagate_update(0.0);

    let mut wheel = InputEvent::mouse_scroll(1.0, Point::new(50.0, 50.0));
    s.propagate_input(&mut wheel);
    assert!(wheel.is_consumed());
    match s.widget(scroll) {
        Some(Widget::Scroll(sc)) => assert_eq!(sc.vscroll(), 32),
        other => panic!("unexpected widget {other:?}"),
    }
    assert!(s.is_layout_dirty(scroll));

    s.propagate_update(0.0);
    assert_eq!(s.position(content), Some(Point::new(0.0, -32.0)));

    let mut outside = InputEvent::mouse_scroll(1.0, Point::new(250.0, 50.0));
    s.propagate_input(&mut outside);
    assert!(!outside.is_consumed());
}

#[test]
fn scroll_prunes_pointer_input_outside_its_rect() {
    let mut s = scene();
    let root = s.root();
    let scroll = s.add_child(root, ScrollContainer::new()).unwrap();
    let button = s.add_child(scroll, Button::new("wide")).unwrap();
    s.set_minimum_size(button, Size::new(300.0, 40.0));
    s.set_size(scroll, Size::new(100.0, 100.0));
    s.propagate_update(0.0);
    assert_eq!(s.size(button), Some(Size::new(300.0, 40.0)));
    s.take_signals();

    // Inside the button but outside the visible area.
    click(&mut s, Point::new(150.0, 10.0));
    assert!(user_signals(&mut s).is_empty());

    click(&mut s, Point::new(50.0, 10.0));
    assert_eq!(
        user_signals(&mut s),
        vec![Emission {
            node: button,
            signal: Signal::Pressed,
        }]
    );
}

#[test]
fn mouse_filters() {
    let mut s = scene();
    let root = s.root();
    let button = button_at(&mut s, Button::new("under"), Point::ZERO);
    let label = s.add_child(root, Label::new("over")).unwrap();
    s.set_size(label, Size::new(100.0, 40.0));
    let pass = s.add_child(root, Widget::Container).unwrap();
    s.set_size(pass, Size::new(100.0, 40.0));
    s.take_signals();

    // Ignore and PassThrough on top leave the click to the button.
    click(&mut s, Point::new(10.0, 10.0));
    assert_eq!(user_signals(&mut s).len(), 1);

    // A stopping control on top claims it.
    assert!(s.set_mouse_filter(pass, MouseFilter::Stop));
    click(&mut s, Point::new(10.0, 10.0));
    assert!(user_signals(&mut s).is_empty());
    assert!(!s.button(button).unwrap().is_pressed());
}

#[test]
fn spin_box_signals_through_the_scene() {
    let mut s = scene();
    let root = s.root();
    let spin = s.add_child(root, SpinBox::new()).unwrap();
    s.set_size(spin, Size::new(120.0, 40.0));
    s.take_signals();

    let at = Point::new(10.0, 10.0);
    s.propagate_input(&mut InputEvent::mouse_button(MouseButton::Left, true, at));
    s.propagate_input(&mut InputEvent::mouse_motion(
        Point::new(13.0, 10.0),
        Vec2::new(3.0, 0.0),
    ));
    assert_eq!(s.value(spin), Some(3.0));
    assert!(s.spin_box(spin).unwrap().is_focused());
    let signals: Vec<Signal> = user_signals(&mut s).into_iter().map(|e| e.signal).collect();
    assert_eq!(signals, vec![Signal::FocusEntered, Signal::ValueChanged]);
}

#[test]
fn removal_bounds_and_root() {
    let mut s = scene();
    let root = s.root();
    let b = s.add_child(root, Button::new("x")).unwrap();
    assert!(!s.remove_child(root, 1));
    assert!(!s.remove(root));
    assert!(s.remove_child(root, 0));
    assert!(!s.is_alive(b));
    assert!(s.children(root).is_empty());
}

#[test]
fn cleanup_releases_resources_children_first() {
    let mut s = scene();
    let root = s.root();
    let scroll = s.add_child(root, ScrollContainer::new()).unwrap();
    let tex = Texture::new(TextureId(5), Size::new(8.0, 8.0));
    s.add_child(scroll, TextureRect::new().with_texture(tex))
        .unwrap();

    assert!(s.remove(scroll));
    assert_eq!(
        s.take_released_resources(),
        vec![
            ResourceHandle::Texture(TextureId(5)),
            ResourceHandle::RenderTarget(RenderTargetId(0)),
        ]
    );
    assert!(s.take_released_resources().is_empty());
}

#[test]
fn removed_buttons_leave_their_group() {
    let mut s = scene();
    let root = s.root();
    let b = s.add_child(root, Button::new("x")).unwrap();
    let group = s.new_button_group();
    s.set_button_group(b, Some(group));
    s.remove(b);
    assert!(s.button_group_members(group).is_empty());
}

#[test]
fn node_paths_use_names_or_kinds() {
    let mut s = scene();
    let root = s.root();
    let hbox = s.add_child(root, BoxContainer::horizontal()).unwrap();
    let b = s.add_child(hbox, Button::new("ok")).unwrap();
    assert_eq!(s.node_path(root), "/root");
    assert_eq!(s.node_path(b), "/root/BoxContainer/Button");
    s.set_name(b, Some("ok"));
    assert_eq!(s.node_path(b), "/root/BoxContainer/ok");
    assert_eq!(s.name(b), Some("ok"));
}

#[test]
fn viewport_lookup_and_size() {
    let mut s = scene();
    let root = s.root();
    let outside = s.add_child(root, Button::new("a")).unwrap();
    assert_eq!(s.get_viewport(outside), None);
    assert_eq!(s.viewport_size(outside), Size::new(400.0, 300.0));

    let vp = s
        .add_child(root, Viewport::new(Size::new(64.0, 32.0)))
        .unwrap();
    let hbox = s.add_child(vp, BoxContainer::horizontal()).unwrap();
    let inside = s.add_child(hbox, Button::new("b")).unwrap();
    assert_eq!(s.get_viewport(inside), Some(vp));
    assert_eq!(s.viewport_size(inside), Size::new(64.0, 32.0));
}

#[test]
fn subtree_change_travels_to_the_root() {
    let mut s = scene();
    let root = s.root();
    let outer = s.add_child(root, BoxContainer::vertical()).unwrap();
    let inner = s.add_child(outer, BoxContainer::horizontal()).unwrap();
    s.take_signals();

    s.add_child(inner, Label::new("x")).unwrap();
    let changed: Vec<_> = s
        .take_signals()
        .into_iter()
        .filter(|e| e.signal == Signal::SubtreeChanged)
        .map(|e| e.node)
        .collect();
    assert_eq!(changed, vec![inner, outer, root]);
    assert!(s.is_layout_dirty(outer));
}

#[test]
fn notify_visits_parents_first() {
    let mut s = scene();
    let root = s.root();
    let vbox = s.add_child(root, BoxContainer::vertical()).unwrap();
    let a = s.add_child(vbox, Button::new("a")).unwrap();
    let b = s.add_child(vbox, Button::new("b")).unwrap();
    s.take_signals();

    s.propagate_notify(vbox, Signal::FocusEntered);
    let nodes: Vec<_> = s.take_signals().into_iter().map(|e| e.node).collect();
    assert_eq!(nodes, vec![vbox, a, b]);
}

#[test]
fn reparent_rejects_cycles() {
    let mut s = scene();
    let root = s.root();
    let outer = s.add_child(root, BoxContainer::vertical()).unwrap();
    let inner = s.add_child(outer, BoxContainer::vertical()).unwrap();
    assert!(matches!(
        s.reparent(outer, inner),
        Err(TreeError::WouldCycle { .. })
    ));
    let other = s.add_child(root, Widget::Container).unwrap();
    s.reparent(inner, other).unwrap();
    assert_eq!(s.parent(inner), Some(other));
}

#[test]
fn hidden_nodes_see_no_input() {
    let mut s = scene();
    let b = button_at(&mut s, Button::new("x"), Point::ZERO);
    s.set_visible(b, false);
    assert!(!s.is_visible_in_tree(b));
    s.take_signals();
    click(&mut s, Point::new(10.0, 10.0));
    assert!(user_signals(&mut s).is_empty());
}

#[test]
fn process_runs_input_update_and_draw() {
    let mut s = scene();
    let root = s.root();
    let hbox = s.add_child(root, BoxContainer::horizontal()).unwrap();
    s.set_anchor_full_rect(hbox, true);
    s.when_window_size_changed(Size::new(400.0, 300.0));
    let b = s.add_child(hbox, Button::new("go")).unwrap();
    assert!(s.is_layout_dirty(hbox));

    let mut queue = InputQueue::new();
    queue.push(InputEvent::mouse_button(
        MouseButton::Left,
        true,
        Point::new(5.0, 5.0),
    ));
    queue.push(InputEvent::mouse_button(
        MouseButton::Left,
        false,
        Point::new(5.0, 5.0),
    ));
    let mut list = DisplayList::new();
    s.take_signals();
    s.process(&mut queue, 0.016, &mut list);

    // The button had no size yet when the click arrived; layout ran afterwards.
    assert!(user_signals(&mut s).is_empty());
    assert!(!s.is_layout_dirty(hbox));
    assert_eq!(s.size(b), Some(Size::new(32.0, 300.0)));
    assert!(!list.commands().is_empty());
    assert_eq!(queue.len(), 2, "the owner clears the queue");
    assert!((s.elapsed() - 0.016).abs() < 1e-12);

    list.clear();
    queue.clear();
    queue.push(InputEvent::mouse_button(
        MouseButton::Left,
        true,
        Point::new(5.0, 5.0),
    ));
    queue.push(InputEvent::mouse_button(
        MouseButton::Left,
        false,
        Point::new(5.0, 5.0),
    ));
    s.process(&mut queue, 0.016, &mut list);
    assert_eq!(
        user_signals(&mut s),
        vec![Emission {
            node: b,
            signal: Signal::Pressed,
        }]
    );
}
