// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arbor_ui::{BoxContainer, Button, Label, NodeId, Scene, SizingDirective};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

/// A window-filling vertical box of `rows` horizontal boxes with `cols` buttons each.
///
/// Returns the scene and one label per row.
fn build_grid(rows: usize, cols: usize) -> (Scene, Vec<NodeId>) {
    let mut scene = Scene::new(Size::new(1920.0, 1080.0));
    let root = scene.root();
    let vbox = scene.add_child(root, BoxContainer::vertical()).unwrap();
    scene.set_anchor_full_rect(vbox, true);
    scene.when_window_size_changed(Size::new(1920.0, 1080.0));
    let mut labels = Vec::with_capacity(rows);
    for r in 0..rows {
        let hbox = scene.add_child(vbox, BoxContainer::horizontal()).unwrap();
        scene.set_sizing(hbox, SizingDirective::expand());
        labels.push(scene.add_child(hbox, Label::new(format!("row {r}"))).unwrap());
        for c in 0..cols {
            let b = scene.add_child(hbox, Button::new(format!("{c}"))).unwrap();
            if c % 2 == 0 {
                scene.set_sizing(b, SizingDirective::expand());
            }
        }
    }
    (scene, labels)
}

fn bench_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_layout");
    for &(rows, cols) in &[(8usize, 8usize), (32, 16), (64, 32)] {
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_function(format!("grid_{rows}x{cols}"), |b| {
            b.iter_batched(
                || build_grid(rows, cols).0,
                |mut scene| {
                    scene.propagate_update(0.0);
                    black_box(scene.take_signals().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_incremental_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_layout");
    for &(rows, cols) in &[(32usize, 16usize), (64, 32)] {
        let (mut scene, labels) = build_grid(rows, cols);
        scene.propagate_update(0.0);
        let mut i = 0_usize;
        group.bench_function(format!("one_label_{rows}x{cols}"), |b| {
            b.iter(|| {
                i += 1;
                let label = labels[i % labels.len()];
                // Alternate lengths so the minimum size really changes.
                let text = if i % 2 == 0 { "short" } else { "a longer label" };
                scene.set_text(label, text);
                scene.propagate_update(0.0);
                black_box(scene.size(label));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_layout, bench_incremental_layout);
criterion_main!(benches);
