//! The red-black tree shared by every container in this crate.
//!
//! A [`Tree`] stores keys with associated values. The key-only containers use `()` for the value.
//! Whether equal keys may be stored more than once is decided by the [`DuplicatePolicy`] type
//! parameter: [`Unique`] rejects them, [`Multi`] keeps each copy to the right of the equal keys
//! already in the tree so they're iterated in insertion order.
//!
//! # Examples
//!
//! ```
//! use rbtree::tree::{Multi, Tree};
//!
//! let mut tree = Tree::<_, _>::new();
//! assert!(tree.insert(1, "one"));
//! // Equal keys are rejected by default.
//! assert!(!tree.insert(1, "uno"));
//! assert_eq!(tree.get(&1), Some((&1, &"one")));
//!
//! let mut multi = Tree::<_, _, Multi>::new();
//! assert!(multi.insert(1, "one"));
//! assert!(multi.insert(1, "uno"));
//! assert_eq!(multi.count(&1), 2);
//! assert!(multi.is_red_black_tree());
//! ```

mod balance;
pub(crate) mod node;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, InvariantViolation};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::util::Side;
use node::{Arena, Color, Node};

pub(crate) use node::NodeId;

/// Decides what [`Tree::insert`] does with a key equal to one already stored.
pub trait DuplicatePolicy {
    /// `true` if equal keys are stored side by side, `false` if the later insert is rejected.
    const ALLOW_DUPLICATES: bool;
}

/// Equal keys are rejected. Used by sets and maps.
#[derive(Debug)]
pub enum Unique {}

/// Equal keys are all kept. Used by multisets.
#[derive(Debug)]
pub enum Multi {}

impl DuplicatePolicy for Unique {
    const ALLOW_DUPLICATES: bool = false;
}

impl DuplicatePolicy for Multi {
    const ALLOW_DUPLICATES: bool = true;
}

/// What [`Tree::insert_with`] did with a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Inserted {
    /// A node was created for the key.
    New(NodeId),
    /// An equal key was already stored here and the policy is [`Unique`]. Nothing changed.
    Existing(NodeId),
}

impl Inserted {
    pub(crate) fn id(self) -> NodeId {
        match self {
            Self::New(id) | Self::Existing(id) => id,
        }
    }
}

/// A red-black tree mapping keys of type `K` to values of type `V`.
pub struct Tree<K, V, P = Unique> {
    nodes: Arena<K, V>,
    root: Option<NodeId>,
    len: usize,
    _policy: PhantomData<fn() -> P>,
}

impl<K, V, P> Default for Tree<K, V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> Clone for Tree<K, V, P>
where
    K: Clone,
    V: Clone,
{
    // Node ids are slot indices so a copy of the arena is a copy of the tree.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            len: self.len,
            _policy: PhantomData,
        }
    }
}

impl<K, V, P> fmt::Debug for Tree<K, V, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Structural equality: both trees have the same shape and hold equal keys and values at every
/// position. Node colors aren't compared. Two trees holding the same entries in a different shape
/// are *not* equal, compare their iterators for that.
impl<K, V, P> PartialEq for Tree<K, V, P>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.subtree_eq(self.root, other, other.root)
    }
}

impl<K: Eq, V: Eq, P> Eq for Tree<K, V, P> {}

impl<K, V, P> Tree<K, V, P> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            _policy: PhantomData,
        }
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} entries", self.len);
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Iterates over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::tree::Tree;
    ///
    /// let tree: Tree<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    ///
    /// let entries: Vec<_> = tree.iter().collect();
    /// assert_eq!(entries, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    ///
    /// let backwards: Vec<_> = tree.iter().rev().map(|(k, _)| *k).collect();
    /// assert_eq!(backwards, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.root, self.len)
    }

    /// Iterates over the entries in ascending key order with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.nodes, self.root)
    }

    /// The entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{tree::Tree, Error};
    ///
    /// let mut tree = Tree::<_, _>::new();
    /// assert_eq!(tree.min(), Err(Error::EmptyTree));
    ///
    /// tree.insert(2, ());
    /// tree.insert(1, ());
    /// assert_eq!(tree.min(), Ok((&1, &())));
    /// ```
    pub fn min(&self) -> Result<(&K, &V), Error> {
        self.extreme(Side::Left)
    }

    /// The entry with the largest key.
    pub fn max(&self) -> Result<(&K, &V), Error> {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Result<(&K, &V), Error> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(self.nodes.entry(self.nodes.extreme(root, side)))
    }

    pub(crate) fn value_mut(&mut self, id: NodeId) -> &mut V {
        &mut self.nodes[id].value
    }

    fn subtree_eq(&self, mine: Option<NodeId>, other: &Self, theirs: Option<NodeId>) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        match (mine, theirs) {
            (None, None) => true,
            (Some(mine), Some(theirs)) => {
                let (a, b) = (&self.nodes[mine], &other.nodes[theirs]);
                a.key == b.key
                    && a.value == b.value
                    && self.subtree_eq(a.left, other, b.left)
                    && self.subtree_eq(a.right, other, b.right)
            }
            _ => false,
        }
    }

    /// Black height of the subtree at `id`, counting the null links at the bottom as black.
    fn black_height(&self, id: Option<NodeId>) -> Result<usize, InvariantViolation> {
        let Some(id) = id else {
            return Ok(1);
        };
        let node = &self.nodes[id];
        for child in [node.left, node.right].into_iter().flatten() {
            if self.nodes[child].parent != Some(id) {
                return Err(InvariantViolation::BrokenParentLink);
            }
            if node.color == Color::Red && self.nodes[child].color == Color::Red {
                return Err(InvariantViolation::RedRedEdge);
            }
        }

        let left = self.black_height(node.left)?;
        let right = self.black_height(node.right)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl<K, V, P> Tree<K, V, P>
where
    K: Ord,
    P: DuplicatePolicy,
{
    /// Inserts `key` with `value`. Returns `false`, leaving the tree untouched, if the key is
    /// already present and the policy is [`Unique`].
    pub fn insert(&mut self, key: K, value: V) -> bool {
        matches!(self.insert_with(key, || value), Inserted::New(_))
    }

    /// Links a new node for `key` into the tree and rebalances. `make_value` is only called when
    /// a node is actually created. Under [`Unique`] an equal key already in the tree is reported
    /// as [`Inserted::Existing`] instead.
    ///
    /// Detecting the duplicate happens during the same descent that finds the insertion point so
    /// there's no window between checking and inserting.
    pub(crate) fn insert_with(
        &mut self,
        key: K,
        make_value: impl FnOnce() -> V,
    ) -> Inserted {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(id) = current {
            parent = Some(id);
            side = match key.cmp(&self.nodes[id].key) {
                Ordering::Less => Side::Left,
                Ordering::Equal if !P::ALLOW_DUPLICATES => return Inserted::Existing(id),
                // Ties go right so equal keys stay in insertion order.
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            current = self.nodes[id].child(side);
        }

        let id = self.nodes.alloc(Node::new(key, make_value(), parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => *self.nodes[parent].child_mut(side) = Some(id),
        }
        self.len += 1;

        self.insert_fixup(id);
        self.assert_invariants();
        Inserted::New(id)
    }

    /// Removes an entry with the given key and returns it. Under [`Multi`] only one of the equal
    /// entries is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::tree::Tree;
    ///
    /// let mut tree = Tree::<_, _>::new();
    /// tree.insert(1, "one");
    ///
    /// assert_eq!(tree.erase(&1), Some((1, "one")));
    /// assert_eq!(tree.erase(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find(key)?;
        Some(self.remove_node(id))
    }

    fn remove_node(&mut self, id: NodeId) -> (K, V) {
        // A node with two children trades places (payload only) with its successor, which has
        // no left child. Either way the node we unlink has at most one child.
        let unlinked = match (self.nodes[id].left, self.nodes[id].right) {
            (Some(_), Some(right)) => {
                let successor = self.nodes.extreme(right, Side::Left);
                self.nodes.swap_payload(id, successor);
                successor
            }
            _ => id,
        };

        let child = self.nodes[unlinked].left.or(self.nodes[unlinked].right);
        let parent = self.nodes[unlinked].parent;
        self.transplant(unlinked, child);

        let node = self.nodes.release(unlinked);
        self.len -= 1;
        if node.color == Color::Black {
            self.erase_fixup(child, parent);
        }

        self.assert_invariants();
        (node.key, node.value)
    }

    /// Finds a node holding `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            current = match key.cmp(self.nodes[id].key.borrow()) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => self.nodes[id].right,
            };
        }
        None
    }

    /// The first node, in order, whose key is not less than `key`.
    fn lower_bound<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut candidate = None;
        let mut current = self.root;
        while let Some(id) = current {
            current = match key.cmp(self.nodes[id].key.borrow()) {
                Ordering::Greater => self.nodes[id].right,
                Ordering::Less | Ordering::Equal => {
                    candidate = Some(id);
                    self.nodes[id].left
                }
            };
        }
        candidate
    }

    /// Potentially finds the entry stored at `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| self.nodes.entry(id))
    }

    /// Potentially finds the value stored at `key` for modification.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|id| self.value_mut(id))
    }

    /// Returns `true` if an entry with `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// The number of entries whose key equals `key`. Never more than one under [`Unique`].
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut count = 0;
        let mut current = self.lower_bound(key);
        while let Some(id) = current {
            if key.cmp(self.nodes[id].key.borrow()) != Ordering::Equal {
                break;
            }
            count += 1;
            current = self.nodes.neighbor(id, Side::Right);
        }
        count
    }

    /// Verifies every red-black and binary search tree property and returns the black height of
    /// the tree (null links included). Meant for tests, this walks the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::tree::Tree;
    ///
    /// let tree: Tree<_, _> = (0..100).map(|k| (k, ())).collect();
    /// let black_height = tree.check().unwrap();
    /// assert!(black_height >= 4);
    /// ```
    pub fn check(&self) -> Result<usize, InvariantViolation> {
        let result = self.check_all();
        if let Err(violation) = &result {
            log::debug!("red-black check failed: {violation}");
        }
        result
    }

    /// Returns `true` if [`check`][Tree::check] finds nothing wrong.
    pub fn is_red_black_tree(&self) -> bool {
        self.check().is_ok()
    }

    fn check_all(&self) -> Result<usize, InvariantViolation> {
        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return Err(InvariantViolation::BrokenParentLink);
            }
            if self.nodes[root].color == Color::Red {
                return Err(InvariantViolation::RedRoot);
            }
        }

        let black_height = self.black_height(self.root)?;

        let mut keys = self.iter().map(|(k, _)| k);
        if let Some(mut previous) = keys.next() {
            for key in keys {
                let in_order = match previous.cmp(key) {
                    Ordering::Less => true,
                    Ordering::Equal => P::ALLOW_DUPLICATES,
                    Ordering::Greater => false,
                };
                if !in_order {
                    return Err(InvariantViolation::OutOfOrder);
                }
                previous = key;
            }
        }

        Ok(black_height)
    }

    /// In tests (or with the `invariant-checks` feature), assert that a mutation left a valid
    /// red-black tree behind.
    fn assert_invariants(&self) {
        if cfg!(any(test, feature = "invariant-checks")) {
            if let Err(violation) = self.check() {
                panic!("red-black invariant violated: {violation}");
            }
        }
    }
}

impl<K, V, P> FromIterator<(K, V)> for Tree<K, V, P>
where
    K: Ord,
    P: DuplicatePolicy,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, P> Extend<(K, V)> for Tree<K, V, P>
where
    K: Ord,
    P: DuplicatePolicy,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, P> IntoIterator for Tree<K, V, P> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.root, self.len)
    }
}

impl<'a, K, V, P> IntoIterator for &'a Tree<K, V, P> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
