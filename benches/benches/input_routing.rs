// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_responder::adapters::tree::router_for;
use arbor_responder::types::{InputEvent, MouseButton};
use arbor_tree::{NodeId, Tree};
use arbor_ui::{Button, Scene};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

/// A complete tree of the given depth and fan-out.
fn gen_tree(depth: usize, fanout: usize) -> (Tree<u32>, NodeId) {
    let mut tree = Tree::new();
    let root = tree.insert(None, 0).unwrap();
    let mut level = vec![root];
    let mut next_payload = 1_u32;
    for _ in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fanout);
        for &parent in &level {
            for _ in 0..fanout {
                next.push(tree.insert(Some(parent), next_payload).unwrap());
                next_payload += 1;
            }
        }
        level = next;
    }
    (tree, root)
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");
    for &(depth, fanout) in &[(3usize, 8usize), (4, 8), (6, 4)] {
        let (tree, root) = gen_tree(depth, fanout);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(format!("depth{depth}_fanout{fanout}"), |b| {
            let router = router_for(&tree);
            b.iter(|| black_box(router.route_with(root, |_| false).len()));
        });
    }
    group.finish();
}

/// `n` by `n` grid of 40px buttons directly under the root.
fn button_grid(n: usize) -> Scene {
    let mut scene = Scene::new(Size::new(40.0 * n as f64, 40.0 * n as f64));
    let root = scene.root();
    for y in 0..n {
        for x in 0..n {
            let b = scene.add_child(root, Button::new("")).unwrap();
            scene.set_position(b, Point::new(40.0 * x as f64, 40.0 * y as f64));
            scene.set_size(b, Size::new(40.0, 40.0));
        }
    }
    scene
}

fn bench_propagate(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate_input");
    for &n in &[8usize, 32] {
        let mut scene = button_grid(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("motion_grid_n{n}"), |b| {
            b.iter(|| {
                let mut ev = InputEvent::mouse_motion(Point::new(20.0, 20.0), Vec2::new(1.0, 0.0));
                scene.propagate_input(&mut ev);
                black_box(ev.is_consumed());
            });
        });
        group.bench_function(format!("click_grid_n{n}"), |b| {
            b.iter_batched(
                || button_grid(n),
                |mut scene| {
                    let at = Point::new(20.0, 20.0);
                    scene.propagate_input(&mut InputEvent::mouse_button(MouseButton::Left, true, at));
                    scene.propagate_input(&mut InputEvent::mouse_button(MouseButton::Left, false, at));
                    black_box(scene.take_signals().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_route, bench_propagate);
criterion_main!(benches);
