// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hextree Map: sparse spatial tile storage for a huge tile-based world.
//!
//! Hextree Map is the storage engine under a map editor: every other subsystem
//! (rendering, selection, brushes, persistence) addresses tiles by `(x, y, z)`
//! through this crate.
//!
//! - Stores tiles across a 65000×65000×16 address space with memory
//!   proportional only to the regions actually touched.
//! - A 16-ary spatial tree over X/Y (two bits of each coordinate per level,
//!   seven levels deep) ends in leaves holding one lazily created 4×4
//!   [`Floor`] per Z layer.
//! - Position-indexed get/create/set/swap of tiles, bulk clear, and a
//!   resumable forward iterator over all occupied locations.
//! - A pluggable [`TileAllocator`] policy so undo/redo and copy-buffer layers
//!   can substitute their own tile allocation strategy.
//!
//! ## Shape of the structure
//!
//! Ownership is strictly tree-shaped. A [`TileMap`] owns an arena of nodes;
//! internal nodes hold sixteen child handles, leaf nodes hold sixteen
//! optional [`Floor`]s (one per Z layer). A floor embeds sixteen permanent
//! [`TileLocation`] slots covering a 4×4 patch, and each slot exclusively
//! owns its optional [`Tile`]. Nothing is allocated for untouched regions:
//! the first write to a far corner materializes only the O(depth) branch
//! covering it.
//!
//! Reads never allocate. `tile`/`location` return `None` for anything never
//! created, which is the normal sparse case and not an error. The `create_*`
//! operations force the branch into existence instead.
//!
//! ## API overview
//!
//! - [`TileMap`]: the map itself (arena, allocation policy, running count).
//! - [`Position`]: `(x, y, z)` value type ordered by `(z, y, x)`.
//! - [`Tile`] and [`Item`]: the payload stored at an occupied position.
//! - [`TileLocation`]: the permanent per-position slot; carries spawn and
//!   waypoint counters and house-exit bookkeeping for collaborators.
//! - [`Tiles`]: explicit-stack iterator over occupied locations.
//! - [`TileAllocator`] / [`HeapAllocator`]: the allocation seam.
//!
//! Key operations:
//! - [`TileMap::create_tile`] → `&mut Tile` (idempotent get-or-create)
//! - [`TileMap::set_tile`] / [`TileMap::swap_tile`] / [`TileMap::take_tile`]
//! - [`TileMap::clear`] — bulk wipe, freeing tiles through the allocator
//! - [`TileMap::iter`] — deterministic traversal of every occupied location
//!
//! Iterators borrow the map, so the compiler enforces that no structural
//! mutation happens mid-traversal and that an iterator never outlives its
//! map. Any number of read-only iterators may walk the same map at once;
//! each keeps its own private traversal stack.
//!
//! ### Minimal usage
//!
//! ```
//! use hextree_map::{Position, TileMap};
//!
//! let mut map = TileMap::new();
//!
//! // Touching a position materializes only the branch covering it.
//! let pos = Position::new(100, 200, 7);
//! map.create_tile(pos).house_id = 4;
//! assert_eq!(map.tile_count(), 1);
//! assert_eq!(map.tile(pos).unwrap().house_id, 4);
//!
//! // Iteration visits every occupied location exactly once.
//! assert_eq!(map.iter().count(), 1);
//!
//! map.clear();
//! assert!(map.is_empty());
//! ```
//!
//! ### Swapping tiles for undo-style callers
//!
//! ```
//! use hextree_map::{Position, Tile, TileMap};
//!
//! let mut map = TileMap::new();
//! let pos = Position::new(12, 34, 5);
//! map.create_tile(pos);
//!
//! // The previous occupant comes back to the caller instead of being freed.
//! let old = map.swap_tile(pos, Some(Box::new(Tile::new(pos)))).unwrap();
//! assert_eq!(old.position(), pos);
//! assert_eq!(map.tile_count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod allocator;
pub mod floor;
pub mod iter;
pub mod location;
pub mod map;
mod node;
pub mod tile;
pub mod types;

pub use allocator::{HeapAllocator, TileAllocator};
pub use floor::Floor;
pub use iter::Tiles;
pub use location::TileLocation;
pub use map::{TileMap, TileMapGeneric};
pub use tile::{Item, Tile, TileFlags};
pub use types::{FLOOR_COUNT, MAP_MAX_HEIGHT, MAP_MAX_WIDTH, Position};
