//! An ordered set of unique values.
//!
//! # Examples
//!
//! ```
//! use rbtree::Set;
//!
//! let mut set = Set::new();
//!
//! // Nothing in here yet.
//! assert!(!set.contains(&1));
//!
//! assert!(set.insert(1));
//! assert!(set.contains(&1));
//!
//! // Inserting the same value again doesn't do anything.
//! assert!(!set.insert(1));
//! assert_eq!(set.len(), 1);
//!
//! assert!(set.erase(&1));
//! assert!(set.is_empty());
//! ```

use std::borrow::Borrow;
use std::fmt;

use crate::error::Error;
use crate::iter::{IntoKeys, Keys};
use crate::tree::{Tree, Unique};

/// Iterator over the values of a [`Set`] in ascending order.
pub type Iter<'a, T> = Keys<'a, T, ()>;

/// Owning iterator over the values of a [`Set`] in ascending order.
pub type IntoIter<T> = IntoKeys<T, ()>;

/// An ordered set backed by a red-black tree. Every value is stored at most once.
pub struct Set<T> {
    tree: Tree<T, (), Unique>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal when they hold the same values, regardless of how their trees are shaped.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T> Set<T> {
    /// Generates a new, empty `Set`.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set holds no values.
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
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Error, Set};
    ///
    /// let mut set = Set::new();
    /// assert_eq!(set.min(), Err(Error::EmptyTree));
    ///
    /// set.extend([10, 5, 15, 3, 7, 12, 20]);
    /// assert_eq!(set.min(), Ok(&3));
    /// assert_eq!(set.max(), Ok(&20));
    /// ```
    pub fn min(&self) -> Result<&T, Error> {
        self.tree.min().map(|(value, _)| value)
    }

    /// The largest value.
    pub fn max(&self) -> Result<&T, Error> {
        self.tree.max().map(|(value, _)| value)
    }
}

impl<T: Ord> Set<T> {
    /// Adds `value` to the set. Returns `false` if an equal value was already present, in which
    /// case the set is left as it was.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value, ())
    }

    /// Inserts each value in turn and reports, for each, whether it was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Set;
    ///
    /// let mut set = Set::new();
    /// assert_eq!(set.insert_many([3, 1, 3, 2]), [true, true, false, true]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> Vec<bool> {
        values.into_iter().map(|value| self.insert(value)).collect()
    }

    /// Removes `value` from the set. Returns `false` if it wasn't there.
    pub fn erase<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(value).is_some()
    }

    /// Returns `true` if the set holds `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(value)
    }

    /// Potentially finds the stored value equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(value).map(|(value, _)| value)
    }

    /// Finds the stored value equal to `value` or fails with [`Error::KeyNotFound`].
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

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoKeys(self.tree.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
