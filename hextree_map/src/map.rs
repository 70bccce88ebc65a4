// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The map: tree arena, allocation policy, and the tile CRUD surface.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::allocator::{HeapAllocator, TileAllocator};
use crate::iter::Tiles;
use crate::location::TileLocation;
use crate::node::NodeArena;
use crate::tile::Tile;
use crate::types::Position;

/// A sparse tile map parameterized by its allocation policy.
///
/// Owns the spatial tree, the injected [`TileAllocator`], and a running count
/// of occupied positions. The count is maintained incrementally by the single
/// place occupancy changes; it is never recomputed by traversal.
pub struct TileMapGeneric<A: TileAllocator> {
    arena: NodeArena,
    allocator: A,
    tile_count: usize,
    floor_count: usize,
}

/// The default map, allocating tiles and floors straight from the heap.
pub type TileMap = TileMapGeneric<HeapAllocator>;

impl<A: TileAllocator + Default> TileMapGeneric<A> {
    /// Create an empty map using the policy's default constructor.
    pub fn new() -> Self {
        Self::with_allocator(A::default())
    }
}

impl<A: TileAllocator + Default> Default for TileMapGeneric<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: TileAllocator> TileMapGeneric<A> {
    /// Create an empty map with an explicit allocation policy.
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            arena: NodeArena::new(),
            allocator,
            tile_count: 0,
            floor_count: 0,
        }
    }

    /// The injected allocation policy.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// The injected allocation policy, mutably.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Number of occupied positions. O(1): the count is maintained on every
    /// occupancy change.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// True if no position holds a tile.
    pub fn is_empty(&self) -> bool {
        self.tile_count == 0
    }

    /// Number of tree nodes materialized so far (including the root).
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of floors materialized so far.
    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    /// The tile at `position`, if one exists. Never allocates.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.location(position)?.get()
    }

    /// The tile at `position`, mutably. Never allocates.
    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        let leaf = self.arena.leaf(position.x, position.y)?;
        self.arena
            .floor_mut(leaf, position.z)?
            .location_mut(position.x, position.y)
            .get_mut()
    }

    /// The location slot for `position`, if its floor was ever created.
    /// The slot may exist and still be empty; absence only means the region
    /// was never touched.
    pub fn location(&self, position: Position) -> Option<&TileLocation> {
        let leaf = self.arena.leaf(position.x, position.y)?;
        Some(
            self.arena
                .floor(leaf, position.z)?
                .location(position.x, position.y),
        )
    }

    /// The location slot for `position`, materializing the branch and floor
    /// covering it if needed. Used when metadata (waypoints, spawns, house
    /// exits) must attach to a slot that holds no tile yet.
    pub fn create_location(&mut self, position: Position) -> &mut TileLocation {
        let Self {
            arena,
            allocator,
            floor_count,
            ..
        } = self;
        let leaf = arena.leaf_force(position.x, position.y);
        let (floor, created) = arena.floor_force(leaf, position.x, position.y, position.z, allocator);
        if created {
            *floor_count += 1;
        }
        floor.location_mut(position.x, position.y)
    }

    /// The tile at `position`, creating one through the allocator if the slot
    /// is empty. Idempotent: an existing tile is returned untouched and the
    /// count does not move.
    pub fn create_tile(&mut self, position: Position) -> &mut Tile {
        let Self {
            arena,
            allocator,
            tile_count,
            floor_count,
        } = self;
        let leaf = arena.leaf_force(position.x, position.y);
        let (floor, created) = arena.floor_force(leaf, position.x, position.y, position.z, allocator);
        if created {
            *floor_count += 1;
        }
        let location = floor.location_mut(position.x, position.y);
        if location.get().is_none() {
            let tile = allocator.allocate_tile(location);
            let old = Self::exchange(location, Some(tile), tile_count);
            debug_assert!(old.is_none(), "slot was empty");
        }
        location.get_mut().expect("slot holds a tile")
    }

    /// Put `tile` at `position`, freeing any previous occupant through the
    /// allocator. The tile's recorded position must equal `position`; a
    /// mismatch is a caller bug, checked in debug builds only.
    pub fn set_tile(&mut self, position: Position, tile: Box<Tile>) {
        if let Some(old) = self.swap_tile(position, Some(tile)) {
            self.allocator.free_tile(old);
        }
    }

    /// Exchange the occupant of `position` for `tile`, returning the previous
    /// occupant to the caller. Undo/redo and brush layers use this to keep
    /// replaced tiles alive for later restoration.
    ///
    /// Passing `None` removes without materializing: an untouched region
    /// stays untouched and yields `None`.
    pub fn swap_tile(&mut self, position: Position, tile: Option<Box<Tile>>) -> Option<Box<Tile>> {
        if let Some(tile) = &tile {
            debug_assert_eq!(
                tile.position(),
                position,
                "tile must record the position it is placed at"
            );
        }
        let Self {
            arena,
            allocator,
            tile_count,
            floor_count,
        } = self;
        match tile {
            Some(_) => {
                let leaf = arena.leaf_force(position.x, position.y);
                let (floor, created) =
                    arena.floor_force(leaf, position.x, position.y, position.z, allocator);
                if created {
                    *floor_count += 1;
                }
                Self::exchange(floor.location_mut(position.x, position.y), tile, tile_count)
            }
            None => {
                let leaf = arena.leaf(position.x, position.y)?;
                let floor = arena.floor_mut(leaf, position.z)?;
                Self::exchange(floor.location_mut(position.x, position.y), None, tile_count)
            }
        }
    }

    /// Take the tile at `position` out of the map, leaving the slot (and its
    /// metadata) in place.
    pub fn take_tile(&mut self, position: Position) -> Option<Box<Tile>> {
        self.swap_tile(position, None)
    }

    /// Remove and free the tile at `position`. Returns whether a tile was
    /// there.
    pub fn remove_tile(&mut self, position: Position) -> bool {
        match self.take_tile(position) {
            Some(old) => {
                self.allocator.free_tile(old);
                true
            }
            None => false,
        }
    }

    /// Remove and free every tile. Slot metadata and the tree structure stay.
    pub fn clear(&mut self) {
        // Two passes: snapshot the occupied positions first, so removal never
        // walks a tree that is changing under the iterator.
        let occupied: Vec<Position> = self.positions().collect();
        for position in occupied {
            self.remove_tile(position);
        }
        debug_assert_eq!(self.tile_count, 0, "clear leaves no occupied slots");
    }

    /// Iterate over every occupied location, in the deterministic traversal
    /// order described on [`Tiles`].
    pub fn iter(&self) -> Tiles<'_> {
        Tiles::new(&self.arena)
    }

    /// Positions of every occupied location, in traversal order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().map(TileLocation::position)
    }

    /// The single place slot occupancy changes, so the running tile count can
    /// never drift from the tree contents.
    fn exchange(
        location: &mut TileLocation,
        tile: Option<Box<Tile>>,
        tile_count: &mut usize,
    ) -> Option<Box<Tile>> {
        let adding = tile.is_some();
        let old = location.replace_tile(tile);
        match (old.is_some(), adding) {
            (false, true) => *tile_count += 1,
            (true, false) => *tile_count -= 1,
            _ => {}
        }
        old
    }
}

impl<'a, A: TileAllocator> IntoIterator for &'a TileMapGeneric<A> {
    type Item = &'a TileLocation;
    type IntoIter = Tiles<'a>;

    fn into_iter(self) -> Tiles<'a> {
        self.iter()
    }
}

impl<A: TileAllocator> core::fmt::Debug for TileMapGeneric<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TileMap")
            .field("tiles", &self.tile_count)
            .field("nodes", &self.arena.len())
            .field("floors", &self.floor_count)
            .finish_non_exhaustive()
    }
}
