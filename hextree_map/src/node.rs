// Copyright 2025 the Hextree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed nodes of the 16-ary spatial tree.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::allocator::TileAllocator;
use crate::floor::Floor;
use crate::types::{FLOOR_COUNT, TREE_DEPTH, child_index};

/// Children per internal node.
pub(crate) const FANOUT: usize = 16;

/// Handle of a node in a [`NodeArena`].
///
/// Plain index, not generational: floors and tiles churn but nodes are never
/// freed, so a handle stays valid for the life of its map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// One node of the spatial tree.
///
/// Whether a node is internal or a leaf is decided at creation from its depth
/// and never changes.
#[derive(Debug)]
pub(crate) enum Node {
    /// Two more bits of each of X and Y select one of sixteen children.
    Internal {
        children: [Option<NodeId>; FANOUT],
    },
    /// Bottom of the X/Y descent: one optional floor per Z layer.
    Leaf {
        floors: [Option<Box<Floor>>; FLOOR_COUNT as usize],
    },
}

impl Node {
    fn internal() -> Self {
        Self::Internal {
            children: [None; FANOUT],
        }
    }

    fn leaf() -> Self {
        Self::Leaf {
            floors: core::array::from_fn(|_| None),
        }
    }
}

/// All nodes of one map, owned contiguously. Parent-child edges are handles
/// into this vector; slot 0 is the root.
#[derive(Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new() -> Self {
        let mut nodes = Vec::new();
        nodes.push(Node::internal());
        Self { nodes }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "node handles are 32-bit by design"
        )]
        NodeId(id as u32)
    }

    /// Read-only descent: the leaf covering `(x, y)`, or `None` the moment a
    /// child on the path is missing. Never allocates.
    pub(crate) fn leaf(&self, x: u16, y: u16) -> Option<NodeId> {
        let (mut x, mut y) = (x, y);
        let mut node = Self::ROOT;
        for _ in 0..TREE_DEPTH {
            let Node::Internal { children } = self.node(node) else {
                unreachable!("descent reached a leaf early");
            };
            node = children[child_index(x, y)]?;
            x <<= 2;
            y <<= 2;
        }
        Some(node)
    }

    /// Allocating descent: the leaf covering `(x, y)`, with every missing
    /// node on the path created. Never fails.
    pub(crate) fn leaf_force(&mut self, x: u16, y: u16) -> NodeId {
        let (mut x, mut y) = (x, y);
        let mut node = Self::ROOT;
        for level in 0..TREE_DEPTH {
            let slot = child_index(x, y);
            let Node::Internal { children } = self.node(node) else {
                unreachable!("descent reached a leaf early");
            };
            node = match children[slot] {
                Some(child) => child,
                None => {
                    let child = self.push(if level + 1 == TREE_DEPTH {
                        Node::leaf()
                    } else {
                        Node::internal()
                    });
                    let Node::Internal { children } = &mut self.nodes[node.idx()] else {
                        unreachable!("descent reached a leaf early");
                    };
                    children[slot] = Some(child);
                    child
                }
            };
            x <<= 2;
            y <<= 2;
        }
        node
    }

    fn floors(&self, leaf: NodeId) -> &[Option<Box<Floor>>; FLOOR_COUNT as usize] {
        match self.node(leaf) {
            Node::Leaf { floors } => floors,
            Node::Internal { .. } => unreachable!("handle does not name a leaf"),
        }
    }

    fn floors_mut(&mut self, leaf: NodeId) -> &mut [Option<Box<Floor>>; FLOOR_COUNT as usize] {
        match &mut self.nodes[leaf.idx()] {
            Node::Leaf { floors } => floors,
            Node::Internal { .. } => unreachable!("handle does not name a leaf"),
        }
    }

    pub(crate) fn floor(&self, leaf: NodeId, z: u8) -> Option<&Floor> {
        debug_assert!(z < FLOOR_COUNT, "z layer out of range");
        self.floors(leaf)[usize::from(z)].as_deref()
    }

    pub(crate) fn floor_mut(&mut self, leaf: NodeId, z: u8) -> Option<&mut Floor> {
        debug_assert!(z < FLOOR_COUNT, "z layer out of range");
        self.floors_mut(leaf)[usize::from(z)].as_deref_mut()
    }

    /// Existing floor for `z` on this leaf, or one freshly built through
    /// `allocator`. The second value reports whether a floor was created.
    pub(crate) fn floor_force<A: TileAllocator>(
        &mut self,
        leaf: NodeId,
        x: u16,
        y: u16,
        z: u8,
        allocator: &mut A,
    ) -> (&mut Floor, bool) {
        debug_assert!(z < FLOOR_COUNT, "z layer out of range");
        let slot = &mut self.floors_mut(leaf)[usize::from(z)];
        let created = slot.is_none();
        let floor = slot.get_or_insert_with(|| allocator.allocate_floor(x, y, z));
        (&mut **floor, created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::HeapAllocator;
    use crate::types::Position;

    #[test]
    fn read_descent_never_allocates() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1, "fresh arena holds only the root");
        assert!(arena.leaf(0, 0).is_none());
        assert!(arena.leaf(65000, 65000).is_none());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn forced_descent_builds_exactly_one_branch() {
        let mut arena = NodeArena::new();
        let leaf = arena.leaf_force(64999, 64999);
        // Root plus six internals plus the leaf.
        assert_eq!(arena.len(), 8);
        // The branch is now permanently visible to read-only descent.
        assert_eq!(arena.leaf(64999, 64999), Some(leaf));
        // Forcing the same path again creates nothing.
        assert_eq!(arena.leaf_force(64999, 64999), leaf);
        assert_eq!(arena.len(), 8);
    }

    #[test]
    fn neighbouring_patches_get_distinct_leaves() {
        let mut arena = NodeArena::new();
        let a = arena.leaf_force(0, 0);
        let b = arena.leaf_force(4, 0);
        let c = arena.leaf_force(3, 3);
        assert_ne!(a, b, "x=4 starts the next 4x4 patch");
        assert_eq!(a, c, "x,y in 0..4 share a leaf");
    }

    #[test]
    fn floors_are_per_layer_and_lazy() {
        let mut arena = NodeArena::new();
        let mut policy = HeapAllocator;
        let leaf = arena.leaf_force(10, 10);
        assert!(arena.floor(leaf, 7).is_none());

        let (floor, created) = arena.floor_force(leaf, 10, 10, 7, &mut policy);
        assert!(created);
        assert_eq!(floor.base(), Position::new(8, 8, 7));

        let (_, created) = arena.floor_force(leaf, 11, 9, 7, &mut policy);
        assert!(!created, "same layer reuses the floor");
        assert!(arena.floor(leaf, 7).is_some());
        assert!(arena.floor(leaf, 6).is_none(), "other layers stay empty");
    }
}
