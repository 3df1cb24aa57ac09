use std::fmt;

/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds one inserted value and owns up to two children. There is no parent pointer;
/// every walk starts from the root.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the node holding the smallest value in the subtree rooted at `self` by following
    /// left children until there are none.
    pub(crate) fn find_min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }
}

/// One pending piece of a `Node`'s debug output.
enum DebugStep<'a, T> {
    Node(&'a Node<T>),
    Link(Option<&'a Node<T>>),
    Text(&'static str),
}

/// Writes the same text `#[derive(Debug)]` would, `Node { value: .., left: .., right: .. }`, but
/// from an explicit stack so a tall tree doesn't recurse. The alternate (`{:#?}`) form is not
/// pretty-printed.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![DebugStep::Node(self)];
        while let Some(step) = pending.pop() {
            match step {
                DebugStep::Node(node) => {
                    write!(f, "Node {{ value: {:?}, left: ", node.value)?;
                    pending.push(DebugStep::Text(" }"));
                    pending.push(DebugStep::Link(node.right()));
                    pending.push(DebugStep::Text(", right: "));
                    pending.push(DebugStep::Link(node.left()));
                }
                DebugStep::Link(None) => f.write_str("None")?,
                DebugStep::Link(Some(node)) => {
                    f.write_str("Some(")?;
                    pending.push(DebugStep::Text(")"));
                    pending.push(DebugStep::Node(node));
                }
                DebugStep::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

/// Drops every node under `link` without recursing. The default drop glue for `Box<Node>`
/// recurses once per level, which a degenerate tree turns into one frame per element.
pub(crate) fn drop_iteratively<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(value: i32, left: Link<i32>, right: Link<i32>) -> Link<i32> {
        Some(Box::new(Node { value, left, right }))
    }

    #[test]
    fn find_min_of_leaf_is_itself() {
        let leaf = Node::new_boxed(3);
        assert_eq!(leaf.find_min().value, 3);
    }

    #[test]
    fn find_min_follows_left_spine_only() {
        // 5 -> left 3 -> right 4; the right child of 3 must not be considered.
        let root = link(5, link(3, None, link(4, None, None)), link(9, None, None));
        let root = root.unwrap();

        assert_eq!(root.find_min().value, 3);
        assert_eq!(root.right().unwrap().find_min().value, 9);
    }

    #[test]
    fn drop_iteratively_empties_the_link() {
        let mut root = link(2, link(1, None, None), link(3, None, None));
        drop_iteratively(&mut root);
        assert!(root.is_none());
    }

    #[test]
    fn debug_matches_derived_layout() {
        let root = link(2, link(1, None, None), None).unwrap();

        assert_eq!(
            format!("{:?}", root),
            "Node { value: 2, left: Some(Node { value: 1, left: None, right: None }), right: None }"
        );
    }

    #[test]
    fn debug_survives_long_spine() {
        let mut root: Link<u32> = None;
        for value in 0..200_000 {
            root = Some(Box::new(Node {
                value,
                left: None,
                right: root.take(),
            }));
        }

        let debug = format!("{:?}", root.as_deref().unwrap());
        assert!(debug.starts_with(
            "Node { value: 199999, left: None, right: Some(Node { value: 199998"
        ));
        assert_eq!(debug.matches("Node {").count(), 200_000);

        drop_iteratively(&mut root);
    }

    #[test]
    fn drop_iteratively_survives_long_spine() {
        let mut root: Link<u32> = None;
        for value in 0..200_000 {
            root = Some(Box::new(Node {
                value,
                left: root.take(),
                right: None,
            }));
        }
        drop_iteratively(&mut root);
        assert!(root.is_none());
    }
}
