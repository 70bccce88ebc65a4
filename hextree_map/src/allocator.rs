// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The allocation seam: pluggable policy for tiles and floors.

use alloc::boxed::Box;

use crate::floor::Floor;
use crate::location::TileLocation;
use crate::tile::Tile;

/// Allocation strategy injected into a map at construction.
///
/// The map routes every tile and floor allocation (and every tile it frees)
/// through this trait, so undo/redo and copy-buffer layers can substitute
/// pooling or copy-on-write policies without touching the tree logic.
/// [`HeapAllocator`] is the plain-heap default.
///
/// Tree nodes are not part of the seam: they live in the map's own arena and
/// are observable through [`TileMap::node_count`](crate::TileMap::node_count).
pub trait TileAllocator {
    /// Allocate the tile that will occupy `location`.
    fn allocate_tile(&mut self, location: &TileLocation) -> Box<Tile> {
        Box::new(Tile::new(location.position()))
    }

    /// Release a tile the map has removed.
    fn free_tile(&mut self, tile: Box<Tile>) {
        drop(tile);
    }

    /// Allocate the floor covering `(x, y)` at layer `z`.
    fn allocate_floor(&mut self, x: u16, y: u16, z: u8) -> Box<Floor> {
        Box::new(Floor::new(x, y, z))
    }

    /// Release a floor. The map itself never prunes floors, but pooling
    /// policies recycle through this when a map is dropped wholesale.
    fn free_floor(&mut self, floor: Box<Floor>) {
        drop(floor);
    }
}

/// The default policy: plain heap allocation, nothing recycled.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapAllocator;

impl TileAllocator for HeapAllocator {}
