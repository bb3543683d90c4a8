//! This crate provides ordered containers built on a single red-black tree.
//!
//! ## Red-Black Trees
//!
//! A red-black tree is a Binary Search Tree (BST): every `Node` stores a key and, for every
//! `Node`, the keys in its left subtree come before its own key and the keys in its right subtree
//! come after it. That ordering is what makes searching take `O(height)` steps and what lets the
//! tree be iterated in sorted order by visiting the left subtree, then the node, then the right
//! subtree.
//!
//! A plain BST can degrade into a linked list (insert keys in ascending order and watch). A
//! red-black tree prevents that by coloring every `Node` red or black and maintaining:
//!
//! 1. The root is black.
//! 2. A red `Node` never has a red child.
//! 3. Every path from a `Node` down to a missing child passes through the same number of black
//!    `Node`s (the "black height").
//!
//! Together these bound the height of a tree with `N` nodes by `2 * lg(N + 1)`. Inserts and
//! erases restore the properties with recoloring and `O(1)` rotations while walking back up
//! towards the root.
//!
//! ## Containers
//!
//! - [`Set`] stores each value at most once.
//! - [`Multiset`] stores values any number of times.
//! - [`Map`] stores a value for each unique key.
//!
//! All three are thin wrappers around [`tree::Tree`], which is generic over the key, the value,
//! and whether equal keys are allowed.
//!
//! Nodes live in an arena and refer to each other by index. A node's children are owned through
//! those indices and its parent index is only used to find the way back up the tree, so there are
//! no reference cycles and no `unsafe` code.
//!
//! ## Configuration
//!
//! With the `invariant-checks` feature enabled, every insert and erase re-verifies the whole tree
//! and panics if a red-black property is broken. Unit tests always do this.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod map;
pub mod multiset;
pub mod set;
pub mod tree;

mod util;


pub use error::{Error, InvariantViolation};
pub use map::Map;
pub use multiset::Multiset;
pub use set::Set;
