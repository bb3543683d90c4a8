use std::mem;
use std::ops::{Index, IndexMut};

use crate::util::Side;

/// Address of a [`Node`] inside an [`Arena`]. Only meaningful for the arena that handed it out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A single entry of the tree.
///
/// `left` and `right` are the owning links: every node is the child of exactly one other node
/// (or the root). `parent` is the inverse of those links and is only used to walk back up the
/// tree, it never decides when a node is released.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// New nodes are always red leaves.
    pub(crate) fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Storage for every node of one tree. Released slots are kept on a free list and reused by the
/// next allocation so a tree that sees as many erases as inserts doesn't keep growing.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot. The caller must already have unlinked it from the tree.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id.0]
            .take()
            .expect("Releasing a node implies it is allocated");
        self.free.push(id);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Exchanges the keys and values of two distinct nodes, leaving colors and links in place.
    pub(crate) fn swap_payload(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (low, high) = (a.0.min(b.0), a.0.max(b.0));
        let (head, tail) = self.slots.split_at_mut(high);
        let first = head[low].as_mut().expect("Swapping implies allocated");
        let second = tail[0].as_mut().expect("Swapping implies allocated");

        mem::swap(&mut first.key, &mut second.key);
        mem::swap(&mut first.value, &mut second.value);
    }

    pub(crate) fn entry(&self, id: NodeId) -> (&K, &V) {
        let node = &self[id];
        (&node.key, &node.value)
    }

    /// Follows `side` links from `id` until there are none left. With `Side::Left` this is the
    /// smallest node of the subtree rooted at `id`.
    pub(crate) fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(child) = self[id].child(side) {
            id = child;
        }
        id
    }

    /// The in-order neighbor of `id`: its successor for `Side::Right`, its predecessor for
    /// `Side::Left`. Only node links are used, no stack of visited nodes is needed.
    pub(crate) fn neighbor(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self[id].child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        // Climb until we come up out of the subtree on the other side of some ancestor.
        let mut current = id;
        let mut parent = self[id].parent;
        while let Some(p) = parent {
            if self[p].child(side) != Some(current) {
                return Some(p);
            }
            current = p;
            parent = self[p].parent;
        }
        None
    }

    /// Ids of the subtree rooted at `root`, smallest key first.
    pub(crate) fn in_order(&self, root: Option<NodeId>) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut current = root.map(|root| self.extreme(root, Side::Left));
        while let Some(id) = current {
            order.push(id);
            current = self.neighbor(id, Side::Right);
        }
        order
    }

    /// Splits every occupied slot into a shared key and a unique value, indexed by slot.
    pub(crate) fn entries_mut(&mut self) -> Vec<Option<(&K, &mut V)>> {
        self.slots
            .iter_mut()
            .map(|slot| slot.as_mut().map(|node| (&node.key, &mut node.value)))
            .collect()
    }

    /// Number of slots, allocated or free.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0]
            .as_ref()
            .expect("Linked node ids always point at allocated slots")
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0]
            .as_mut()
            .expect("Linked node ids always point at allocated slots")
    }
}
