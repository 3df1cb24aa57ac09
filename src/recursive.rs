//! A BST written the way it is usually drawn on a whiteboard: every operation recurses into the
//! left or right subtree and writes the result back into the link it came from.
//!
//! This is the most direct form of the algorithms, and the one to read first. Recursion depth
//! equals tree height though, and nothing here balances the tree: inserting an already sorted
//! sequence of `n` values builds a tree of height `n`, and `insert`, `find` and `delete` on such
//! a tree can exhaust the call stack. Prefer [`crate::iterative::Tree`] if the input order isn't
//! under your control. Dropping and printing are stack-safe in both flavours.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::recursive::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! tree.insert(1);
//! assert!(tree.find(&1));
//!
//! // Inserting the same value again stores a second copy.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Each delete removes one copy and reports whether it found one.
//! assert!(tree.delete(&1));
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};
use crate::printer::Sideways;

/// An unbalanced Binary Search Tree of `T`s. Values less than a node go to its left, values
/// greater than or equal to it go to its right.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored, counting duplicates separately.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The smallest value in the tree, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(4);
    /// tree.insert(2);
    /// tree.insert(8);
    /// assert_eq!(tree.min(), Some(&2));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.find_min().value)
    }

    /// Inserts `value`. Equal values are not merged: each insert adds a node, placed to the
    /// right of any equal value already on its path.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.sideways().to_string(), "    /-5\n-5\n");
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        insert(&mut self.root, value);
        self.len += 1;
    }

    /// Whether some node holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        find(self.root.as_deref(), value)
    }

    /// Deletes one node holding `value`, the first one met on the way down from the root, and
    /// returns whether there was one. If the tree has no such value, nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    ///
    /// assert!(tree.delete(&5));
    /// assert!(!tree.delete(&3));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let deleted = delete(&mut self.root, value);
        if deleted {
            self.len -= 1;
        }
        trace!(deleted, len = self.len, "recursive delete");
        deleted
    }

    /// A [`Display`](fmt::Display)-able sideways view of the tree. See [`crate::printer`].
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways::new(self.root.as_deref())
    }

    /// Prints the sideways view of the tree to standard output.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self.sideways());
    }

    /// Emits the sideways view of the tree as a `DEBUG` tracing event.
    pub fn trace_shape(&self)
    where
        T: fmt::Display,
    {
        debug!(len = self.len, "tree shape:\n{}", self.sideways());
    }
}

fn insert<T>(link: &mut Link<T>, value: T)
where
    T: Ord,
{
    match link {
        None => *link = Some(Node::new_boxed(value)),
        Some(node) => {
            if value < node.value {
                insert(&mut node.left, value);
            } else {
                insert(&mut node.right, value);
            }

            if cfg!(debug_assertions) {
                if let Some(left) = node.left() {
                    assert!(left.value < node.value);
                }
                if let Some(right) = node.right() {
                    assert!(right.value >= node.value);
                }
            }
        }
    }
}

fn find<T>(node: Option<&Node<T>>, value: &T) -> bool
where
    T: Ord,
{
    match node {
        None => false,
        Some(n) => match value.cmp(&n.value) {
            Ordering::Less => find(n.left(), value),
            Ordering::Equal => true,
            Ordering::Greater => find(n.right(), value),
        },
    }
}

/// Deletes the first node holding `value` from the subtree owned by `link`, rewriting `link` if
/// the subtree's root is the one removed.
fn delete<T>(link: &mut Link<T>, value: &T) -> bool
where
    T: Ord,
{
    let Some(node) = link else {
        return false;
    };

    match value.cmp(&node.value) {
        Ordering::Less => delete(&mut node.left, value),
        Ordering::Greater => delete(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                // The in-order successor's value moves up into this node, which keeps its place.
                let successor = take_min(&mut node.right);
                debug_assert!(successor.is_some(), "a right child always has a minimum");
                if let Some(successor) = successor {
                    node.value = successor;
                }
            } else {
                let only_child = node.left.take().or_else(|| node.right.take());
                *link = only_child;
            }
            true
        }
    }
}

/// Unlinks the left-most node of the subtree owned by `link` and returns its value. The
/// left-most node's right subtree takes its place.
///
/// Every node above it on the left spine holds a strictly greater value, so this is the same
/// node a top-down search for the minimum value would stop at.
fn take_min<T>(link: &mut Link<T>) -> Option<T> {
    match link {
        Some(node) if node.left.is_some() => take_min(&mut node.left),
        _ => {
            let Node { value, right, .. } = *link.take()?;
            *link = right;
            Some(value)
        }
    }
}
