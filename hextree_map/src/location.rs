// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-position slots: tile ownership plus collaborator bookkeeping.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::tile::Tile;
use crate::types::Position;

/// The permanent slot for one map position.
///
/// A location's position is fixed when its floor is created and never changes,
/// even as the tile occupying it churns. Collaborators (spawn and waypoint
/// managers, the house list) attach small per-position counters here without
/// duplicating position bookkeeping of their own.
///
/// There is no public tile setter: occupancy only changes through the owning
/// map, which keeps the running tile count correct in one place.
#[derive(Debug)]
pub struct TileLocation {
    position: Position,
    tile: Option<Box<Tile>>,
    spawn_count: usize,
    waypoint_count: usize,
    house_exits: Vec<u32>,
}

impl TileLocation {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            tile: None,
            spawn_count: 0,
            waypoint_count: 0,
            house_exits: Vec::new(),
        }
    }

    /// The position of this slot.
    pub fn position(&self) -> Position {
        self.position
    }

    /// X coordinate of this slot.
    pub fn x(&self) -> u16 {
        self.position.x
    }

    /// Y coordinate of this slot.
    pub fn y(&self) -> u16 {
        self.position.y
    }

    /// Z layer of this slot.
    pub fn z(&self) -> u8 {
        self.position.z
    }

    /// The current occupant, if any.
    pub fn get(&self) -> Option<&Tile> {
        self.tile.as_deref()
    }

    /// The current occupant, mutably. The tile itself may be edited freely;
    /// occupancy still only changes through the map.
    pub fn get_mut(&mut self) -> Option<&mut Tile> {
        self.tile.as_deref_mut()
    }

    /// How much this location carries: items on the tile plus collaborator
    /// counters. Used to decide whether a location is interesting for
    /// selection and pruning passes.
    pub fn size(&self) -> usize {
        self.tile.as_ref().map_or(0, |tile| tile.size())
            + self.spawn_count
            + self.waypoint_count
            + usize::from(!self.house_exits.is_empty())
    }

    /// True if nothing at all is recorded here.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of spawns covering this position.
    pub fn spawn_count(&self) -> usize {
        self.spawn_count
    }

    /// Record one more spawn covering this position.
    pub fn increment_spawn_count(&mut self) {
        self.spawn_count += 1;
    }

    /// Record one less spawn covering this position.
    pub fn decrement_spawn_count(&mut self) {
        debug_assert!(self.spawn_count > 0, "spawn count underflow");
        self.spawn_count -= 1;
    }

    /// Number of waypoints at this position.
    pub fn waypoint_count(&self) -> usize {
        self.waypoint_count
    }

    /// Record one more waypoint at this position.
    pub fn increment_waypoint_count(&mut self) {
        self.waypoint_count += 1;
    }

    /// Record one less waypoint at this position.
    pub fn decrement_waypoint_count(&mut self) {
        debug_assert!(self.waypoint_count > 0, "waypoint count underflow");
        self.waypoint_count -= 1;
    }

    /// Houses whose exit is at this position. Empty until the first exit is
    /// registered; the list allocates nothing before then.
    pub fn house_exits(&self) -> &[u32] {
        &self.house_exits
    }

    /// Register a house exit at this position.
    pub fn add_house_exit(&mut self, house_id: u32) {
        self.house_exits.push(house_id);
    }

    /// Remove one registration of `house_id` from this position.
    pub fn remove_house_exit(&mut self, house_id: u32) {
        if let Some(i) = self.house_exits.iter().position(|&id| id == house_id) {
            self.house_exits.remove(i);
        }
    }

    /// Swap the occupant. Only the map calls this, through its single
    /// count-maintaining primitive.
    pub(crate) fn replace_tile(&mut self, tile: Option<Box<Tile>>) -> Option<Box<Tile>> {
        if let Some(tile) = &tile {
            debug_assert_eq!(
                tile.position(),
                self.position,
                "tile position must match its slot"
            );
        }
        core::mem::replace(&mut self.tile, tile)
    }
}
