// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map basics.
//!
//! Populate a small region, query it, iterate the occupied set, and clear.
//!
//! Run:
//! - `cargo run -p hextree_examples --example map_basics`

use hextree_map::{Item, Position, TileMap};

fn main() {
    let mut map = TileMap::new();

    // Lay a little ground on floor 7.
    for x in 100..110_u16 {
        for y in 100..105_u16 {
            let tile = map.create_tile(Position::new(x, y, 7));
            tile.ground = Some(Item::new(4526));
        }
    }
    println!("tiles: {}", map.tile_count());
    println!("map: {map:?}");

    // Point queries.
    let hit = Position::new(104, 102, 7);
    let miss = Position::new(104, 102, 6);
    println!("tile at {hit:?}: {}", map.tile(hit).is_some());
    println!("tile at {miss:?}: {}", map.tile(miss).is_some());

    // Attach collaborator metadata to a slot without a tile.
    map.create_location(Position::new(200, 200, 7))
        .increment_waypoint_count();

    // Iterate every occupied location; metadata-only slots are skipped.
    let visited = map.iter().count();
    println!("iterated {visited} occupied locations");
    assert_eq!(visited, map.tile_count());

    map.clear();
    println!("after clear: {map:?}");
    assert!(map.is_empty());
}
