// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_roving::position::TreePath;
use understory_roving::{Direction, Item, RovingFocus};

type Roving = RovingFocus<u32, (), TreePath>;

fn mounted(len: u32) -> Roving {
    let root = TreePath::root(0);
    let mut roving = Roving::new();
    for id in 0..len {
        roving
            .register(
                Item::new(id, (), root.child(id)).with_search_label(label(id)),
                &mut (),
            )
            .unwrap();
    }
    roving
}

fn label(id: u32) -> String {
    let letter = char::from(b'a' + (id % 26) as u8);
    format!("{letter}item{id}")
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/register");

    // Every registration re-sorts, so mount order matters: in-order mounts
    // hit the already-sorted fast path, reverse mounts move every item.
    for len in [16u32, 128, 512] {
        let root = TreePath::root(0);
        let forward: Vec<TreePath> = (0..len).map(|i| root.child(i)).collect();
        let reverse: Vec<TreePath> = forward.iter().rev().cloned().collect();
        group.throughput(Throughput::Elements(u64::from(len)));

        for (name, positions) in [("in_order", &forward), ("reverse", &reverse)] {
            group.bench_with_input(BenchmarkId::new(name, len), positions, |b, positions| {
                b.iter_batched(
                    || positions.clone(),
                    |positions| {
                        let mut roving = Roving::new();
                        for (id, position) in (0_u32..).zip(positions) {
                            roving.register(Item::new(id, (), position), &mut ()).unwrap();
                        }
                        black_box(roving);
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_unregister_focused(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/unregister_focused");

    for len in [128u32, 2_048] {
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter_batched(
                || mounted(len),
                |mut roving| {
                    // Focus is on the first item; removing it reassigns passively.
                    black_box(roving.unregister(&0, &mut ()));
                    black_box(roving.focused().copied());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/navigation");
    let len = 2_048u32;

    group.throughput(Throughput::Elements(u64::from(len)));
    group.bench_function("sweep_next", |b| {
        b.iter_batched(
            || mounted(len),
            |mut roving| {
                while roving.move_relative(Direction::Next, &mut ()) {}
                black_box(roving.focused().copied());
            },
            BatchSize::LargeInput,
        );
    });

    let mut roving = mounted(len);
    group.bench_function("type_ahead", |b| {
        b.iter(|| {
            roving.move_to_start(&mut ());
            black_box(roving.move_to_character(black_box('z'), &mut ()));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_register,
    bench_unregister_focused,
    bench_navigation
);
criterion_main!(benches);
