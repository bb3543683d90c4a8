//! An ordered map from unique keys to values.
//!
//! # Examples
//!
//! ```
//! use rbtree::{Error, Map};
//!
//! let mut map = Map::new();
//!
//! // Nothing in here yet.
//! assert_eq!(map.at(&1), Err(Error::KeyNotFound));
//!
//! map.insert(1, 2);
//! assert_eq!(map.at(&1), Ok(&2));
//!
//! // `insert` never overwrites...
//! assert!(!map.insert(1, 3));
//! assert_eq!(map[&1], 2);
//!
//! // ...but `insert_or_assign` does.
//! assert_eq!(map.insert_or_assign(1, 3), Some(2));
//! assert_eq!(map[&1], 3);
//!
//! // Missing keys can be filled in with a default value.
//! *map.get_or_insert_default(7) += 1;
//! assert_eq!(map.at(&7), Ok(&1));
//!
//! // Erasing an entry returns its value.
//! assert_eq!(map.erase(&1), Some(3));
//! assert!(!map.contains(&1));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::mem;
use std::ops::Index;

use crate::error::Error;
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values};
use crate::tree::{Tree, Unique};

/// An ordered map backed by a red-black tree.
pub struct Map<K, V> {
    tree: Tree<K, V, Unique>,
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

/// Two maps are equal when they hold the same entries. See [`Map::same_structure`] for comparing
/// the shape of the trees as well.
impl<K: PartialEq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for Map<K, V> {}

impl<K, V> Map<K, V> {
    /// Generates a new, empty `Map`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Iterates over the entries in ascending key order, allowing the values to be changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Map;
    ///
    /// let mut map: Map<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [10, 20]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.tree.iter_mut()
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.tree.iter())
    }

    /// Iterates over the values in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.tree.iter())
    }

    /// The entry with the smallest key.
    pub fn min(&self) -> Result<(&K, &V), Error> {
        self.tree.min()
    }

    /// The entry with the largest key.
    pub fn max(&self) -> Result<(&K, &V), Error> {
        self.tree.max()
    }

    /// Returns `true` if both maps have identically shaped trees holding equal entries at every
    /// position. Maps built by different sequences of operations can be equal (`==`) without
    /// having the same structure.
    pub fn same_structure(&self, other: &Self) -> bool
    where
        K: PartialEq,
        V: PartialEq,
    {
        self.tree == other.tree
    }
}

impl<K: Ord, V> Map<K, V> {
    /// Inserts `value` at `key` if the key isn't present yet. Returns `false`, keeping the old
    /// value, if it is.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(key, value)
    }

    /// Inserts `value` at `key`, replacing and returning any value already stored there.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
        match self.tree.get_mut(&key) {
            Some(old) => Some(mem::replace(old, value)),
            None => {
                self.tree.insert(key, value);
                None
            }
        }
    }

    /// Inserts each entry in turn and reports, for each, whether it was added.
    pub fn insert_many<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) -> Vec<bool> {
        entries
            .into_iter()
            .map(|(key, value)| self.insert(key, value))
            .collect()
    }

    /// Returns the value at `key`, first inserting `V::default()` if the key is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Map;
    ///
    /// let mut counts: Map<&str, i32> = Map::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    ///
    /// assert_eq!(counts[&"a"], 2);
    /// assert_eq!(counts[&"b"], 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let id = self.tree.insert_with(key, V::default).id();
        self.tree.value_mut(id)
    }

    /// The value at `key`, or [`Error::KeyNotFound`]. Never inserts.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// The value at `key` for modification, or [`Error::KeyNotFound`]. Never inserts.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Potentially finds the value at `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key).map(|(_, value)| value)
    }

    /// Potentially finds the value at `key` for modification.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_mut(key)
    }

    /// Returns `true` if an entry with `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Removes the entry at `key` and returns its value.
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(key).map(|(_, value)| value)
    }

    /// Returns `true` if the backing tree satisfies every red-black property.
    pub fn is_red_black_tree(&self) -> bool {
        self.tree.is_red_black_tree()
    }
}

impl<K, V, Q> Index<&Q> for Map<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Returns the value at `key`.
    ///
    /// ## Panics
    ///
    /// When `key` is not in the map. Use [`Map::at`] or [`Map::get`] to handle that case.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tree: Tree::from_iter(iter),
        }
    }
}

impl<K: Ord, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Map<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
