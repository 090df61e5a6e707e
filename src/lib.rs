//! This crate provides a Binary Search Tree (BST) over a set of unique,
//! ordered values that restores balance by rebuilding itself.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! This tree additionally holds each value at most once, so it behaves as a
//! sorted set: constructing from a sequence deduplicates its input, and
//! inserting a value that is already present does nothing.
//!
//! Searching the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). Construction always
//! produces a minimal-height tree by picking the middle of the sorted values
//! as each subtree root, but plain insertions can degrade the height all the
//! way to `O(N)`. Rather than rotating on every mutation, the tree exposes
//! [`is_balanced`][tree::Tree::is_balanced] to detect the degradation and
//! [`rebalance`][tree::Tree::rebalance] to rebuild a minimal-height tree
//! from the current contents.

#![deny(missing_docs)]

mod pretty;
pub mod tree;

#[cfg(test)]
mod test;
