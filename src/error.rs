//! # Errors
//!
//! [`Error`] is returned by lookups that can't be answered: asking for a key that isn't there or
//! for the smallest/largest element of an empty tree.
//!
//! [`InvariantViolation`] is only ever produced by [`Tree::check`][crate::tree::Tree::check]. A
//! violation means the balancing code is broken, it is not something callers are expected to
//! recover from.

use thiserror::Error;

/// Lookup error.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// No element with the requested key is stored in the tree.
    #[error("The key was not found in the tree.")]
    KeyNotFound,
    /// The operation needs at least one element but the tree is empty.
    #[error("The tree is empty.")]
    EmptyTree,
}

/// A red-black or binary search tree property that doesn't hold.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("The root node is red.")]
    RedRoot,
    /// A red node has a red child.
    #[error("A red node has a red child.")]
    RedRedEdge,
    /// Two sibling subtrees have a different number of black nodes on their paths to a leaf.
    #[error("Black heights differ: {left} on the left, {right} on the right.")]
    BlackHeightMismatch {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// The in-order sequence of keys isn't sorted (or has duplicates when they're rejected).
    #[error("The keys are not in order.")]
    OutOfOrder,
    /// A child's `parent` link doesn't point back at the node holding it.
    #[error("A parent link does not match its child link.")]
    BrokenParentLink,
}
