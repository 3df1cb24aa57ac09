//! This crate exposes an unbalanced Binary Search Tree (BST) over any totally
//! ordered value type, in two flavours sharing one node layout.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The invariants kept
//! by the trees in this crate are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value strictly less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! The "or equal" matters: inserting a value that is already present does not
//! overwrite anything. A new `Node` is created and placed to the right, so
//! duplicates are stored as distinct nodes. Deleting a duplicated value removes
//! the occurrence found first on the way down from the root.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Nothing here rebalances. Searching takes `O(height)`, and inserting an
//! already sorted sequence produces a tree whose height equals its length.
//!
//! ## Flavours
//!
//! - [`recursive::Tree`] walks the tree with plain recursion. It is the
//!   shortest statement of the algorithms but deep trees can exhaust the
//!   call stack.
//! - [`iterative::Tree`] walks the tree with loops and a cursor into the
//!   owning link, so tree height only costs heap, never stack.
//!
//! Both render themselves sideways through [`printer::Sideways`] for
//! debugging.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iterative;
mod node;
pub mod printer;
pub mod recursive;
