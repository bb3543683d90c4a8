//! Iterators over a [`Tree`][crate::tree::Tree] in key order.
//!
//! [`Iter`] walks the tree through node links alone: the first entry is the leftmost node, and
//! each step goes to the leftmost node of the right subtree or, failing that, climbs parent links
//! until it leaves a left subtree. No stack of ancestors is kept. Because it borrows the tree, the
//! tree can't change shape underneath it.

use std::iter::FusedIterator;
use std::vec;

use crate::tree::node::Arena;
use crate::tree::NodeId;
use crate::util::Side;

/// Borrowing iterator over `(&K, &V)` in ascending key order. Created by
/// [`Tree::iter`][crate::tree::Tree::iter].
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(nodes: &'a Arena<K, V>, root: Option<NodeId>, len: usize) -> Self {
        Self {
            nodes,
            front: root.map(|root| nodes.extreme(root, Side::Left)),
            back: root.map(|root| nodes.extreme(root, Side::Right)),
            remaining: len,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        // `front` and `back` meet in the middle when iterating from both ends.
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.nodes.neighbor(id, Side::Right);
        Some(self.nodes.entry(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.nodes.neighbor(id, Side::Left);
        Some(self.nodes.entry(id))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over `(&K, &mut V)` in ascending key order. Created by
/// [`Tree::iter_mut`][crate::tree::Tree::iter_mut].
///
/// Unlike [`Iter`] this isn't a lazy cursor. Creating one records the in-order sequence of node
/// ids and splits every arena slot (released ones included) into a key and a mutable value, so
/// setup is `O(capacity)` even if only the first entry is ever taken.
pub struct IterMut<'a, K, V> {
    // Indexed by slot. Each entry is taken exactly once, in the order given by `order`.
    entries: Vec<Option<(&'a K, &'a mut V)>>,
    order: vec::IntoIter<NodeId>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(nodes: &'a mut Arena<K, V>, root: Option<NodeId>) -> Self {
        let order = nodes.in_order(root).into_iter();
        Self {
            entries: nodes.entries_mut(),
            order,
        }
    }

    fn take(&mut self, id: NodeId) -> (&'a K, &'a mut V) {
        self.entries[id.index()]
            .take()
            .expect("Every node is visited once")
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        Some(self.take(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.order.next_back()?;
        Some(self.take(id))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over `(K, V)` in ascending key order.
///
/// Each step unlinks the smallest (or, from the back, largest) remaining node. That node never has
/// a child on the side being consumed, so splicing it out is a single re-link and no rebalancing is
/// needed: the remaining nodes only have to stay in order, not balanced.
pub struct IntoIter<K, V> {
    nodes: Arena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(nodes: Arena<K, V>, root: Option<NodeId>, len: usize) -> Self {
        Self {
            front: root.map(|root| nodes.extreme(root, Side::Left)),
            back: root.map(|root| nodes.extreme(root, Side::Right)),
            nodes,
            remaining: len,
        }
    }

    /// Splices out the extreme node on `side` and moves the cursor for that side to the next one.
    fn pop(&mut self, side: Side) -> Option<(K, V)> {
        if self.remaining == 0 {
            return None;
        }
        let cursor = match side {
            Side::Left => &mut self.front,
            Side::Right => &mut self.back,
        };
        let id = (*cursor)?;

        // The extreme node hangs on the `side` link of its parent.
        let child = self.nodes[id].child(side.opposite());
        let parent = self.nodes[id].parent;
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        if let Some(parent) = parent {
            *self.nodes[parent].child_mut(side) = child;
        }

        *cursor = match child {
            Some(child) => Some(self.nodes.extreme(child, side)),
            None => parent,
        };
        self.remaining -= 1;

        let node = self.nodes.release(id);
        Some((node.key, node.value))
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.pop(Side::Left)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.pop(Side::Right)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// Iterator over the keys of a tree in ascending order.
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of a tree, ordered by their keys.
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator over the keys of a tree in ascending order.
pub struct IntoKeys<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}
impl<K, V> FusedIterator for IntoKeys<K, V> {}

#[cfg(test)]
mod tests {
    use crate::tree::{Multi, Tree};

    #[test]
    fn iterates_in_order() {
        let tree: Tree<_, _> = [50, 20, 80, 10, 30, 70, 90, 60]
            .into_iter()
            .map(|k| (k, k * 10))
            .collect();

        let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [10, 20, 30, 50, 60, 70, 80, 90]);

        let values: Vec<_> = tree.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, [100, 200, 300, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = Tree::<i32, ()>::new();
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn both_ends_meet_in_the_middle() {
        let tree: Tree<_, _> = (1..=5).map(|k| (k, ())).collect();
        let mut iter = tree.iter();

        assert_eq!(iter.next().map(|(k, _)| *k), Some(1));
        assert_eq!(iter.next_back().map(|(k, _)| *k), Some(5));
        assert_eq!(iter.next_back().map(|(k, _)| *k), Some(4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().map(|(k, _)| *k), Some(2));
        assert_eq!(iter.next().map(|(k, _)| *k), Some(3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iteration_is_restartable() {
        let tree: Tree<_, _> = (0..20).map(|k| (k, ())).collect();
        let mut iter = tree.iter();
        iter.nth(10);

        let restarted = tree.iter();
        assert_eq!(restarted.len(), 20);
        assert_eq!(iter.len(), 9);
    }

    #[test]
    fn iter_mut_updates_values_in_order() {
        let mut tree: Tree<_, _> = [3, 1, 2].into_iter().map(|k| (k, 0)).collect();

        for (i, (_, value)) in tree.iter_mut().enumerate() {
            *value = i;
        }

        let entries: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, [(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn iter_mut_after_erase_skips_released_slots() {
        let mut tree: Tree<_, _> = (0..10).map(|k| (k, k)).collect();
        for key in [0, 4, 9] {
            tree.erase(&key);
        }

        let mut seen = Vec::new();
        for (key, value) in tree.iter_mut().rev() {
            *value += 100;
            seen.push(*key);
        }

        assert_eq!(seen, [8, 7, 6, 5, 3, 2, 1]);
        assert_eq!(tree.get(&5), Some((&5, &105)));
    }

    #[test]
    fn into_iter_keeps_duplicates_in_insertion_order() {
        let tree: Tree<_, _, Multi> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]
            .into_iter()
            .collect();

        let entries: Vec<_> = tree.into_iter().collect();
        assert_eq!(entries, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn into_iter_from_both_ends_after_erase() {
        let mut tree: Tree<_, _> = (0..32).map(|k| (k, k.to_string())).collect();
        for key in (0..32).step_by(3) {
            tree.erase(&key);
        }
        let expected: Vec<_> = (0..32).filter(|k| k % 3 != 0).collect();

        let mut iter = tree.into_iter();
        assert_eq!(iter.len(), expected.len());

        // Alternate ends so both cursors splice around each other.
        let mut front = Vec::new();
        let mut back = Vec::new();
        while let Some((key, value)) = iter.next() {
            assert_eq!(value, key.to_string());
            front.push(key);
            if let Some((key, _)) = iter.next_back() {
                back.push(key);
            }
        }
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next_back(), None);

        back.reverse();
        front.extend(back);
        assert_eq!(front, expected);
    }

    #[test]
    fn into_iter_can_be_dropped_half_way() {
        let tree: Tree<_, _> = (0..100).map(|k| (k, vec![k; 3])).collect();
        let mut iter = tree.into_iter();

        assert_eq!(iter.nth(49).map(|(k, _)| k), Some(49));
        assert_eq!(iter.next_back().map(|(k, _)| k), Some(99));
        assert_eq!(iter.len(), 49);
    }
}
