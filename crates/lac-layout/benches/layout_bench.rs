//! Benchmarks for container solving.
//!
//! Run with: cargo bench -p lac-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use lac_layout::{Container, Direction, Rect, Stack};

/// Balanced tree of alternating stacks, `fanout` children per level.
fn nested_stacks(depth: usize, fanout: usize, prefix: &str) -> Container {
    let mut node = if depth % 2 == 0 {
        Container::vstack(prefix)
    } else {
        Container::hstack(prefix)
    };
    node.set_gap(2.0);
    node.set_padding(1.0).expect("padding");
    for i in 0..fanout {
        let id = format!("{prefix}.{i}");
        let child = if depth == 0 {
            Container::leaf(id)
        } else {
            nested_stacks(depth - 1, fanout, &id)
        };
        node.add(child, (i % 3 + 1) as u32);
    }
    node
}

fn bench_stack_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/split");
    let area = Rect::from_size(1920.0, 1080.0);
    for n in [2usize, 8, 32, 128] {
        let weights: Vec<u32> = (0..n).map(|i| (i % 5 + 1) as u32).collect();
        let stack = Stack::new(Direction::Horizontal, 4.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &weights, |b, w| {
            b.iter(|| black_box(stack.split(black_box(area), w)))
        });
    }
    group.finish();
}

fn bench_tree_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("container/update");
    for (depth, fanout) in [(2usize, 4usize), (3, 4), (4, 4)] {
        let mut root = nested_stacks(depth, fanout, "n");
        root.set_size(1920.0, 1080.0);
        group.throughput(Throughput::Elements(root.node_count() as u64));
        group.bench_function(BenchmarkId::new("depth", depth), |b| {
            b.iter(|| {
                root.update().expect("update");
                black_box(&root);
            })
        });
    }
    group.finish();
}

fn bench_grid_update(c: &mut Criterion) {
    let mut grid = Container::grid("g", 16, 16).expect("grid");
    grid.set_size(1920.0, 1080.0);
    grid.set_gaps(2.0, 3.0);
    for i in 0..256 {
        grid.add_child(Container::leaf(format!("c{i}")));
    }
    c.bench_function("grid/update/16x16", |b| {
        b.iter(|| {
            grid.update().expect("update");
            black_box(&grid);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut root = nested_stacks(3, 4, "n");
    root.set_size(1920.0, 1080.0);
    root.update().expect("update");
    c.bench_function("container/layout/depth3", |b| {
        b.iter(|| black_box(root.layout()))
    });
}

criterion_group!(
    benches,
    bench_stack_split,
    bench_tree_update,
    bench_grid_update,
    bench_snapshot
);
criterion_main!(benches);
