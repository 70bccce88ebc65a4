// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hextree_map::{Position, TileMap};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_position(&mut self, extent: u16) -> Position {
        let r = self.next_u64();
        Position::new(
            (r % u64::from(extent)) as u16,
            ((r >> 20) % u64::from(extent)) as u16,
            ((r >> 40) & 15) as u8,
        )
    }
}

fn dense_block(side: u16) -> TileMap {
    let mut map = TileMap::new();
    for x in 0..side {
        for y in 0..side {
            map.create_tile(Position::new(x, y, 7));
        }
    }
    map
}

fn scattered(count: usize, extent: u16) -> TileMap {
    let mut map = TileMap::new();
    let mut rng = Rng::new(0xDEAD_BEEF_CAFE_F00D);
    while map.tile_count() < count {
        map.create_tile(rng.next_position(extent));
    }
    map
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");
    for side in [32_u16, 128] {
        let tiles = u64::from(side) * u64::from(side);
        group.throughput(Throughput::Elements(tiles));
        group.bench_function(format!("dense_{side}x{side}"), |b| {
            b.iter_batched(
                TileMap::new,
                |mut map| {
                    for x in 0..side {
                        for y in 0..side {
                            map.create_tile(Position::new(x, y, 7));
                        }
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let map = scattered(10_000, 60_000);
    let mut group = c.benchmark_group("lookup");

    group.bench_function("hit_and_miss", |b| {
        let mut rng = Rng::new(42);
        b.iter(|| {
            let pos = rng.next_position(60_000);
            black_box(map.tile(black_box(pos)).is_some())
        });
    });

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    let dense = dense_block(128);
    group.throughput(Throughput::Elements(dense.tile_count() as u64));
    group.bench_function("dense_128x128", |b| {
        b.iter(|| black_box(dense.iter().count()));
    });

    let sparse = scattered(10_000, 60_000);
    group.throughput(Throughput::Elements(sparse.tile_count() as u64));
    group.bench_function("scattered_10k", |b| {
        b.iter(|| black_box(sparse.iter().count()));
    });

    group.finish();
}

criterion_group!(benches, bench_create, bench_lookup, bench_iterate);
criterion_main!(benches);
