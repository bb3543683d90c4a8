//! An ordered multiset: like [`Set`][crate::Set] but every insert succeeds, so a value can be
//! stored any number of times.
//!
//! # Examples
//!
//! ```
//! use rbtree::Multiset;
//!
//! let mut bag = Multiset::new();
//! bag.insert("apple");
//! bag.insert("pear");
//! bag.insert("apple");
//!
//! assert_eq!(bag.len(), 3);
//! assert_eq!(bag.count(&"apple"), 2);
//!
//! // Erasing takes out one copy at a time.
//! assert!(bag.erase(&"apple"));
//! assert_eq!(bag.count(&"apple"), 1);
//!
//! let values: Vec<_> = bag.iter().collect();
//! assert_eq!(values, [&"apple", &"pear"]);
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::error::Error;
use crate::iter::{IntoKeys, Keys};
use crate::tree::{Multi, Tree};

/// Iterator over the values of a [`Multiset`] in ascending order.
pub type Iter<'a, T> = Keys<'a, T, ()>;

/// Owning iterator over the values of a [`Multiset`] in ascending order.
pub type IntoIter<T> = IntoKeys<T, ()>;

/// An ordered multiset backed by a red-black tree. Equal values are iterated in the order they
/// were inserted.
pub struct Multiset<T> {
    tree: Tree<T, (), Multi>,
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Multiset<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two multisets are equal when their sorted sequences of values, duplicates included, are.
impl<T: PartialEq> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Multiset<T> {}

impl<T> Multiset<T> {
    /// Generates a new, empty `Multiset`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The number of values in the multiset, counting every copy.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multiset holds no values.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Keys(self.tree.iter())
    }

    /// The smallest value.
    pub fn min(&self) -> Result<&T, Error> {
        self.tree.min().map(|(value, _)| value)
    }

    /// The largest value.
    pub fn max(&self) -> Result<&T, Error> {
        self.tree.max().map(|(value, _)| value)
    }
}

impl<T: Ord> Multiset<T> {
    /// Adds another copy of `value`.
    pub fn insert(&mut self, value: T) {
        let inserted = self.tree.insert(value, ());
        debug_assert!(inserted);
    }

    /// Inserts each value in turn. Every insert into a multiset succeeds, so the returned flags
    /// are all `true`; they line up with [`Set::insert_many`][crate::Set::insert_many].
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Multiset;
    ///
    /// let mut bag = Multiset::new();
    /// assert_eq!(bag.insert_many([3, 1, 3]), [true, true, true]);
    /// assert_eq!(bag.count(&3), 2);
    /// ```
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> Vec<bool> {
        values
            .into_iter()
            .map(|value| {
                self.insert(value);
                true
            })
            .collect()
    }

    /// Removes one copy of `value`. Returns `false` if there was none.
    pub fn erase<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(value).is_some()
    }

    /// Removes every copy of `value` and returns how many there were.
    pub fn erase_all<Q>(&mut self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut erased = 0;
        while self.tree.erase(value).is_some() {
            erased += 1;
        }
        erased
    }

    /// Returns `true` if at least one copy of `value` is stored.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(value)
    }

    /// How many copies of `value` are stored.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.count(value)
    }

    /// Potentially finds a stored value equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(value).map(|(value, _)| value)
    }

    /// Finds a stored value equal to `value` or fails with [`Error::KeyNotFound`].
    pub fn find<Q>(&self, value: &Q) -> Result<&T, Error>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the backing tree satisfies every red-black property.
    pub fn is_red_black_tree(&self) -> bool {
        self.tree.is_red_black_tree()
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(iter);
        multiset
    }
}

impl<T: Ord> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Multiset<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoKeys(self.tree.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
