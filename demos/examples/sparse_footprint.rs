// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse footprint.
//!
//! Shows that memory tracks touched regions, not the address space: a single
//! tile in the far corner costs one branch of nodes and one floor, while a
//! dense town block shares most of its structure.
//!
//! Run:
//! - `cargo run -p hextree_examples --example sparse_footprint`

use hextree_map::{Position, TileMap};

fn main() {
    let mut map = TileMap::new();
    println!("empty map: {} nodes, {} floors", map.node_count(), map.floor_count());

    // One tile at the far corner of the 65000x65000x16 space.
    map.create_tile(Position::new(64999, 64999, 15));
    println!(
        "after far-corner tile: {} nodes, {} floors",
        map.node_count(),
        map.floor_count()
    );

    // A 32x32 town block at ground level.
    for x in 1000..1032_u16 {
        for y in 1000..1032_u16 {
            map.create_tile(Position::new(x, y, 7));
        }
    }
    println!(
        "after 32x32 block: {} nodes, {} floors, {} tiles",
        map.node_count(),
        map.floor_count(),
        map.tile_count()
    );
}
