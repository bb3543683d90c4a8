//! Rotations and the two fixup procedures that restore the red-black properties after a node is
//! linked in or spliced out.
//!
//! Both fixups are the textbook (CLRS) algorithms. Each case comes in two mirror images depending
//! on which side of its parent the node being fixed hangs, so they're written once in terms of
//! that [`Side`] and its opposite.

use super::node::{Color, NodeId};
use super::Tree;
use crate::util::Side;

impl<K, V, P> Tree<K, V, P> {
    /// Color of a possibly absent node. Missing children count as black.
    pub(super) fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.nodes[id].color)
    }

    /// Which child of `parent` the node `child` is.
    pub(super) fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.nodes[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `replacement` where `old` hangs from its parent (or at the root). `old` keeps its own
    /// links, the caller decides what happens to it.
    pub(super) fn transplant(&mut self, old: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes[old].parent;
        match parent {
            None => self.root = replacement,
            Some(p) => {
                let side = self.side_of(old, p);
                *self.nodes[p].child_mut(side) = replacement;
            }
        }
        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }
    }

    /// Rotates the subtree rooted at `id` towards `side`. `Side::Left` is a left rotation: the
    /// right child moves up into `id`'s place and `id` becomes its left child.
    ///
    /// ## Panics
    ///
    /// When `id` has no child on the opposite side of `side`.
    ///
    /// # Diagram
    ///
    /// A left rotation (a right rotation is the same picture read right to left):
    ///
    /// ```text
    ///      parent                  parent
    ///        |                       |
    ///        x                       y
    ///       / \      rotate ->      / \
    ///      a   y                   x   c
    ///         / \                 / \
    ///        b   c               a   b
    /// ```
    pub(super) fn rotate(&mut self, id: NodeId, side: Side) {
        log::trace!("rotating {side:?} at {id:?}");
        let other = side.opposite();
        let pivot = self.nodes[id]
            .child(other)
            .expect("Rotation requires a child to lift");

        let inner = self.nodes[pivot].child(side);
        *self.nodes[id].child_mut(other) = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }

        self.transplant(id, Some(pivot));
        *self.nodes[pivot].child_mut(side) = Some(id);
        self.nodes[id].parent = Some(pivot);
    }

    /// Restores the red-black properties after `id` was linked in as a new red leaf.
    pub(super) fn insert_fixup(&mut self, mut id: NodeId) {
        while let Some(parent) = self.nodes[id]
            .parent
            .filter(|&p| self.nodes[p].color == Color::Red)
        {
            let grandparent = self.nodes[parent]
                .parent
                .expect("A red node is never the root");
            let side = self.side_of(parent, grandparent);
            let uncle = self.nodes[grandparent].child(side.opposite());

            if self.color(uncle) == Color::Red {
                log::trace!("insert fixup: red uncle, recoloring at {grandparent:?}");
                let uncle = uncle.expect("Red implies present");
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                id = grandparent;
                continue;
            }

            // An inner grandchild is first rotated to the outside so the single rotation below
            // finishes the job.
            if self.side_of(id, parent) != side {
                log::trace!("insert fixup: inner child {id:?}");
                id = parent;
                self.rotate(id, side);
            }

            let parent = self.nodes[id].parent.expect("Rotated node has a parent");
            let grandparent = self.nodes[parent]
                .parent
                .expect("Rotated node has a grandparent");
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root.expect("Fixing up an insert implies a root");
        self.nodes[root].color = Color::Black;
    }

    /// Restores the red-black properties after a black node was spliced out from under
    /// `parent`. `id` is the node that took its place and carries the extra black; it may be
    /// absent when the removed node had no children.
    pub(super) fn erase_fixup(&mut self, mut id: Option<NodeId>, mut parent: Option<NodeId>) {
        while id != self.root && self.color(id) == Color::Black {
            let Some(p) = parent else {
                break;
            };
            // `id` may be `None` here, but then the sibling is present so comparing against the
            // left link still tells us which side we're on.
            let side = if self.nodes[p].left == id {
                Side::Left
            } else {
                Side::Right
            };
            let other = side.opposite();
            let mut sibling = self.nodes[p]
                .child(other)
                .expect("A doubly black node always has a sibling");

            if self.nodes[sibling].color == Color::Red {
                log::trace!("erase fixup: red sibling {sibling:?}");
                self.nodes[sibling].color = Color::Black;
                self.nodes[p].color = Color::Red;
                self.rotate(p, side);
                sibling = self.nodes[p]
                    .child(other)
                    .expect("A doubly black node always has a sibling");
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(other);
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                log::trace!("erase fixup: black nephews, pushing the extra black up");
                self.nodes[sibling].color = Color::Red;
                id = Some(p);
                parent = self.nodes[p].parent;
                continue;
            }

            if self.color(far) == Color::Black {
                log::trace!("erase fixup: red near nephew under {sibling:?}");
                let near = near.expect("Red implies present");
                self.nodes[near].color = Color::Black;
                self.nodes[sibling].color = Color::Red;
                self.rotate(sibling, other);
                sibling = self.nodes[p]
                    .child(other)
                    .expect("A doubly black node always has a sibling");
            }

            log::trace!("erase fixup: red far nephew under {sibling:?}");
            self.nodes[sibling].color = self.nodes[p].color;
            self.nodes[p].color = Color::Black;
            if let Some(far) = self.nodes[sibling].child(other) {
                self.nodes[far].color = Color::Black;
            }
            self.rotate(p, side);
            id = self.root;
            parent = None;
        }

        if let Some(id) = id {
            self.nodes[id].color = Color::Black;
        }
    }
}
