// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile payloads: stacked items and per-tile state flags.

use alloc::vec::Vec;

use crate::types::Position;

bitflags::bitflags! {
    /// Per-tile state flags.
    ///
    /// The zone bits mirror what the persisted map format records; `SELECTED`
    /// and `MODIFIED` are editor working state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TileFlags: u16 {
        /// Tile lies inside a protection zone.
        const PROTECTION_ZONE = 1 << 0;
        /// PvP is disabled on this tile.
        const NO_PVP = 1 << 1;
        /// Logging out is blocked on this tile.
        const NO_LOGOUT = 1 << 2;
        /// Tile lies inside a forced-PvP zone.
        const PVP_ZONE = 1 << 3;
        /// Tile is part of the current selection.
        const SELECTED = 1 << 4;
        /// Tile has edits not yet written out.
        const MODIFIED = 1 << 5;
    }
}

/// A single item on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Item type id from the item definitions.
    pub id: u16,
    /// Stack count or charge, for types that use one.
    pub subtype: Option<u8>,
}

impl Item {
    /// Create an item of the given type with no subtype.
    pub const fn new(id: u16) -> Self {
        Self { id, subtype: None }
    }
}

/// The payload stored at one occupied map position.
///
/// A tile records the position of the slot that owns it; the map checks the
/// two agree whenever a caller supplies a tile for a given position. The
/// position is fixed at construction, like the slot's own.
#[derive(Clone, Debug)]
pub struct Tile {
    position: Position,
    /// Ground item, if any.
    pub ground: Option<Item>,
    /// Items stacked above the ground, bottom first.
    pub items: Vec<Item>,
    /// State flags.
    pub flags: TileFlags,
    /// Owning house id, or 0 when the tile belongs to no house.
    pub house_id: u32,
}

impl Tile {
    /// Create an empty tile for `position`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ground: None,
            items: Vec::new(),
            flags: TileFlags::empty(),
            house_id: 0,
        }
    }

    /// The position this tile occupies.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Number of items on the tile, counting the ground.
    pub fn size(&self) -> usize {
        self.items.len() + usize::from(self.ground.is_some())
    }
}
