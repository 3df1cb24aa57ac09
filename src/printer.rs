//! A sideways, human-oriented rendering of a tree for debugging.
//!
//! The right subtree is drawn above its parent and the left subtree below it, so turning your
//! head to the left shows the tree the usual way up. Every level is indented further than its
//! parent and each line starts with an edge marker:
//!
//! - `-` for the root,
//! - `/-` for a right child,
//! - `\-` for a left child.
//!
//! An empty tree renders as the single line `Empty tree`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::recursive::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 7] {
//!     tree.insert(value);
//! }
//!
//! assert_eq!(tree.sideways().to_string(), "    /-7\n-5\n    \\-3\n");
//! assert_eq!(tree.sideways().with_indent(2).to_string(), "  /-7\n-5\n  \\-3\n");
//! ```
//!
//! This output is meant for people. It is not a serialization format and there is no way to
//! parse it back into a tree.

use std::fmt;
use std::io;

use crate::node::Node;

/// Indentation added per level unless [`Sideways::with_indent`] says otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// What an empty tree renders as.
pub const EMPTY_TREE: &str = "Empty tree";

const ROOT_EDGE: &str = "-";
const RIGHT_EDGE: &str = "/-";
const LEFT_EDGE: &str = "\\-";

/// A borrowed view of a tree that implements [`fmt::Display`] as the sideways rendering.
/// Obtained from `Tree::sideways` on either tree flavour.
pub struct Sideways<'a, T> {
    root: Option<&'a Node<T>>,
    indent: usize,
}

impl<'a, T> Sideways<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            root,
            indent: DEFAULT_INDENT,
        }
    }

    /// Use `indent` spaces per level instead of [`DEFAULT_INDENT`].
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    /// Writes the rendering to any byte sink, e.g. a file or a `Vec<u8>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::iterative::Tree;
    ///
    /// let tree: Tree<i32> = Tree::new();
    /// let mut out = Vec::new();
    /// tree.sideways().write_to(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"Empty tree\n");
    /// ```
    pub fn write_to<W>(&self, mut out: W) -> io::Result<()>
    where
        W: io::Write,
        T: fmt::Display,
    {
        write!(out, "{}", self)
    }
}

impl<T> fmt::Display for Sideways<'_, T>
where
    T: fmt::Display,
{
    /// A reverse in-order walk (right, node, left) with an explicit stack so that tall trees
    /// don't recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return writeln!(f, "{}", EMPTY_TREE);
        };

        let mut pending: Vec<(&Node<T>, usize, &str)> = Vec::new();
        let mut next = Some((root, 0, ROOT_EDGE));
        loop {
            while let Some((node, depth, edge)) = next {
                pending.push((node, depth, edge));
                next = node.right().map(|right| (right, depth + 1, RIGHT_EDGE));
            }

            let Some((node, depth, edge)) = pending.pop() else {
                return Ok(());
            };
            writeln!(
                f,
                "{:width$}{}{}",
                "",
                edge,
                node.value,
                width = depth * self.indent
            )?;
            next = node.left().map(|left| (left, depth + 1, LEFT_EDGE));
        }
    }
}
