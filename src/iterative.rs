//! A BST whose operations never recurse. Each one walks a cursor down the tree: a `&mut` to the
//! owning link for mutation, a `&` to the node for lookups. Deletion rewires the link the cursor
//! stops at, so no parent pointers or write-back chain are needed.
//!
//! Trees built here have exactly the same shape as [`crate::recursive::Tree`] for the same
//! sequence of operations. The only difference is that a tall tree costs heap rather than stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input makes a tree as tall as it is long. That's fine here.
//! for value in 0..10_000 {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.find(&9_999));
//! assert!(tree.delete(&0));
//! assert_eq!(tree.min(), Some(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};
use crate::printer::Sideways;

/// An unbalanced Binary Search Tree of `T`s that is safe to use at any height. Values less than
/// a node go to its left, values greater than or equal to it go to its right.
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
    /// use ordered_tree::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// for value in [4, 2, 8, 3] {
    ///     tree.insert(value);
    /// }
    /// assert_eq!(tree.min(), Some(&2));
    ///
    /// tree.delete(&2);
    /// assert_eq!(tree.min(), Some(&3));
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
    /// use ordered_tree::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.sideways().to_string(), "    /-2\n-2\n    \\-1\n");
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cursor = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Whether some node holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::iterative::Tree;
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
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Deletes one node holding `value`, the first one met on the way down from the root, and
    /// returns whether there was one. If the tree has no such value, nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 2, 7] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert!(tree.delete(&5));
    /// assert!(!tree.find(&5));
    /// assert!(tree.find(&2));
    /// assert!(tree.find(&7));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let deleted = match find_link(&mut self.root, value) {
            Some(link) => unlink(link),
            None => false,
        };
        if deleted {
            self.len -= 1;
        }
        trace!(deleted, len = self.len, "iterative delete");
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

/// Walks down from `link` and returns the link owning the first node equal to `value`, or `None`
/// if the walk falls off the tree.
fn find_link<'a, T>(mut link: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
where
    T: Ord,
{
    loop {
        // Decide through a shared borrow first so the `Equal` exit never holds a `&mut` into
        // `link` that the next step needs.
        let ordering = value.cmp(&link.as_deref()?.value);
        link = match ordering {
            Ordering::Equal => return Some(link),
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }
}

/// Removes the node owned by `link` from the tree. Returns `false` only if `link` is empty.
fn unlink<T>(link: &mut Link<T>) -> bool {
    let Some(node) = link else {
        return false;
    };

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

/// Unlinks the left-most node of the subtree owned by `link` and returns its value. The
/// left-most node's right subtree takes its place.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().map_or(false, |n| n.left.is_some()) {
        link = &mut link.as_mut()?.left;
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}
