// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floors: 4×4 patches of tile locations at one Z layer.

use crate::location::TileLocation;
use crate::types::{Position, floor_slot};

/// A 4×4 patch of [`TileLocation`]s at one Z layer.
///
/// Floors are created lazily by the leaf that owns them, the first time
/// anything touches the patch on that layer. Every slot's position is
/// computed once here and never changes.
#[derive(Debug)]
pub struct Floor {
    locations: [TileLocation; Self::SLOTS],
}

impl Floor {
    /// Locations per floor.
    pub const SLOTS: usize = 16;

    /// Create the floor covering the 4×4 patch containing `(x, y)` at layer
    /// `z`. The base coordinates are truncated to a multiple of four.
    pub fn new(x: u16, y: u16, z: u8) -> Self {
        let base_x = x & !3;
        let base_y = y & !3;
        Self {
            locations: core::array::from_fn(|slot| {
                #[allow(clippy::cast_possible_truncation, reason = "slot is in 0..16")]
                let slot = slot as u16;
                TileLocation::new(Position::new(base_x + (slot >> 2), base_y + (slot & 3), z))
            }),
        }
    }

    /// North-west corner of the patch.
    pub fn base(&self) -> Position {
        self.locations[0].position()
    }

    pub(crate) fn location(&self, x: u16, y: u16) -> &TileLocation {
        &self.locations[floor_slot(x, y)]
    }

    pub(crate) fn location_mut(&mut self, x: u16, y: u16) -> &mut TileLocation {
        &mut self.locations[floor_slot(x, y)]
    }

    pub(crate) fn slot(&self, slot: usize) -> &TileLocation {
        &self.locations[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_truncated_to_patch_origin() {
        let floor = Floor::new(103, 57, 7);
        assert_eq!(floor.base(), Position::new(100, 56, 7));
        // Any coordinate inside the patch builds the same floor.
        assert_eq!(Floor::new(100, 56, 7).base(), floor.base());
    }

    #[test]
    fn slot_positions_match_lookup() {
        let floor = Floor::new(8, 4, 2);
        for x in 8..12_u16 {
            for y in 4..8_u16 {
                let location = floor.location(x, y);
                assert_eq!(location.position(), Position::new(x, y, 2));
            }
        }
    }

    #[test]
    fn slot_index_agrees_with_coordinate_lookup() {
        let floor = Floor::new(0, 0, 0);
        for slot in 0..Floor::SLOTS {
            let pos = floor.slot(slot).position();
            assert!(core::ptr::eq(floor.slot(slot), floor.location(pos.x, pos.y)));
        }
    }
}
