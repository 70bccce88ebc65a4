// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit-stack iteration over every occupied location of a map.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::floor::Floor;
use crate::location::TileLocation;
use crate::node::{FANOUT, Node, NodeArena, NodeId};
use crate::types::TREE_DEPTH;

/// Iterator over the occupied [`TileLocation`]s of a map.
///
/// A depth-first walk over the spatial tree driven by an explicit stack of
/// `(node, next-child)` frames plus a `(z, slot)` cursor inside the leaf
/// being scanned, so the traversal can pause between calls and several
/// independent iterators can walk the same map at once. Absent branches are
/// skipped without being materialized.
///
/// The order is deterministic: ascending child index at every level, then
/// ascending Z layer, then ascending slot within the floor. Child indices
/// interleave X and Y bits, so this order does not correlate with coordinate
/// magnitude; callers needing coordinate order sort the positions instead.
pub struct Tiles<'a> {
    arena: &'a NodeArena,
    stack: Vec<Frame>,
    cursor: Option<Cursor>,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    node: NodeId,
    next_child: usize,
}

#[derive(Clone, Copy, Debug)]
struct Cursor {
    leaf: NodeId,
    z: usize,
    slot: usize,
}

impl<'a> Tiles<'a> {
    pub(crate) fn new(arena: &'a NodeArena) -> Self {
        let mut stack = Vec::with_capacity(TREE_DEPTH as usize);
        stack.push(Frame {
            node: NodeArena::ROOT,
            next_child: 0,
        });
        Self {
            arena,
            stack,
            cursor: None,
        }
    }
}

impl<'a> Iterator for Tiles<'a> {
    type Item = &'a TileLocation;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            // Finish the leaf being scanned before touching the stack.
            if let Some(cursor) = &mut self.cursor {
                if let Node::Leaf { floors } = arena.node(cursor.leaf) {
                    while cursor.z < floors.len() {
                        if let Some(floor) = &floors[cursor.z] {
                            while cursor.slot < Floor::SLOTS {
                                let location = floor.slot(cursor.slot);
                                cursor.slot += 1;
                                if location.get().is_some() {
                                    return Some(location);
                                }
                            }
                        }
                        cursor.z += 1;
                        cursor.slot = 0;
                    }
                }
                self.cursor = None;
            }

            let frame = self.stack.last_mut()?;
            if frame.next_child == FANOUT {
                self.stack.pop();
                continue;
            }
            let child_slot = frame.next_child;
            frame.next_child += 1;

            let Node::Internal { children } = arena.node(frame.node) else {
                unreachable!("only internal nodes are pushed on the stack");
            };
            let Some(child) = children[child_slot] else {
                continue;
            };
            match arena.node(child) {
                Node::Internal { .. } => self.stack.push(Frame {
                    node: child,
                    next_child: 0,
                }),
                Node::Leaf { .. } => {
                    self.cursor = Some(Cursor {
                        leaf: child,
                        z: 0,
                        slot: 0,
                    });
                }
            }
        }
    }
}

impl FusedIterator for Tiles<'_> {}

impl core::fmt::Debug for Tiles<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tiles")
            .field("stack_depth", &self.stack.len())
            .field("in_leaf", &self.cursor.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    use crate::map::TileMap;
    use crate::types::Position;

    // Same floor, same leaf, neighbouring leaf, far branches, other layers.
    fn scattered_positions() -> [Position; 7] {
        [
            Position::new(0, 0, 0),
            Position::new(3, 3, 0),
            Position::new(4, 0, 0),
            Position::new(16384, 0, 0),
            Position::new(16384, 0, 15),
            Position::new(64999, 64999, 7),
            Position::new(1000, 1000, 7),
        ]
    }

    #[test]
    fn visits_every_occupied_location_exactly_once() {
        let mut map = TileMap::new();
        let expected: BTreeSet<Position> = scattered_positions().into_iter().collect();
        for &pos in &expected {
            map.create_tile(pos);
        }

        let mut seen = BTreeSet::new();
        for location in &map {
            assert!(location.get().is_some(), "only occupied slots are yielded");
            assert!(seen.insert(location.position()), "no duplicates");
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn skips_locations_that_hold_only_metadata() {
        let mut map = TileMap::new();
        map.create_tile(Position::new(5, 5, 5));
        // A slot with a waypoint but no tile exists in the tree yet is not
        // part of the occupied set.
        map.create_location(Position::new(6, 5, 5))
            .increment_waypoint_count();

        let seen: Vec<Position> = map.positions().collect();
        assert_eq!(seen.as_slice(), &[Position::new(5, 5, 5)]);
    }

    #[test]
    fn empty_map_yields_nothing() {
        let map = TileMap::new();
        assert_eq!(map.iter().count(), 0);
        assert!(map.iter().next().is_none());
    }

    #[test]
    fn independent_iterators_agree() {
        let mut map = TileMap::new();
        for pos in scattered_positions() {
            map.create_tile(pos);
        }

        let first: Vec<Position> = map.positions().collect();

        // Interleave two live iterators; each keeps a private stack, so
        // neither disturbs the other.
        let mut a = map.iter();
        let mut b = map.iter();
        let mut from_a = Vec::new();
        let mut from_b = Vec::new();
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) => {
                    from_a.push(x.position());
                    from_b.push(y.position());
                }
                (None, None) => break,
                _ => panic!("iterators disagree on length"),
            }
        }
        assert_eq!(from_a, first);
        assert_eq!(from_b, first);
        assert_eq!(from_a.len(), map.tile_count());
    }

    #[test]
    fn order_is_stable_across_runs() {
        let mut map = TileMap::new();
        for pos in scattered_positions() {
            map.create_tile(pos);
        }
        let first: Vec<Position> = map.positions().collect();
        let second: Vec<Position> = map.positions().collect();
        assert_eq!(first, second);
    }
}
