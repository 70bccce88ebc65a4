// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positions, map extents, and the bit-slicing helpers used by the tree.

use core::cmp::Ordering;

/// Maximum addressable X coordinate (inclusive).
pub const MAP_MAX_WIDTH: u16 = 65000;

/// Maximum addressable Y coordinate (inclusive).
pub const MAP_MAX_HEIGHT: u16 = 65000;

/// Number of Z layers in a map column.
pub const FLOOR_COUNT: u8 = 16;

/// Internal levels of the spatial tree.
///
/// Each level consumes two bits of X and two bits of Y, so seven levels route
/// the top 14 bits of each 16-bit coordinate and a leaf covers the remaining
/// 4×4 patch.
pub(crate) const TREE_DEPTH: u32 = 7;

/// A map position.
///
/// Plain value type with no identity beyond its fields. The total order is
/// lexicographic by `(z, y, x)`, so sorting a batch of positions groups whole
/// floors together; the spatial tree itself routes by raw bit-slicing of
/// `x`/`y` instead.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// West-east coordinate, `0..=MAP_MAX_WIDTH`.
    pub x: u16,
    /// North-south coordinate, `0..=MAP_MAX_HEIGHT`.
    pub y: u16,
    /// Layer, `0..FLOOR_COUNT`.
    pub z: u8,
}

impl Position {
    /// Create a position.
    pub const fn new(x: u16, y: u16, z: u8) -> Self {
        Self { x, y, z }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.z, self.y, self.x).cmp(&(other.z, other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Child slot selected by the top two bits of each of the remaining `x` and
/// `y`. Callers shift both coordinates left by two after each level.
#[inline]
pub(crate) const fn child_index(x: u16, y: u16) -> usize {
    ((((x >> 14) & 3) << 2) | ((y >> 14) & 3)) as usize
}

/// Slot of `(x, y)` within its floor's 4×4 location array.
#[inline]
pub(crate) const fn floor_slot(x: u16, y: u16) -> usize {
    ((x & 3) * 4 + (y & 3)) as usize
}
