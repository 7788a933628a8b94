//! Utilities to traverse the KDTree structure.

use crate::kdtree::{IndexedPoint, Node};
use crate::r#type::IndexableNum;

/// A pre-order iterator over the indexed points of a KDTree.
///
/// Each node's point is yielded before the points of its left subtree, which are yielded before
/// those of its right subtree. This is the same order range queries report matches in.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, N: IndexableNum, I> {
    /// Nodes still to visit; the next node is on top.
    stack: Vec<&'a Node<N, I>>,
}

impl<'a, N: IndexableNum, I> PreOrder<'a, N, I> {
    pub(crate) fn new(root: Option<&'a Node<N, I>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }

    /// Walk the nodes rather than the points they hold.
    pub fn nodes(self) -> impl Iterator<Item = &'a Node<N, I>> {
        let mut stack = self.stack;
        std::iter::from_fn(move || next_node(&mut stack))
    }
}

impl<'a, N: IndexableNum, I> Iterator for PreOrder<'a, N, I> {
    type Item = &'a IndexedPoint<N, I>;

    fn next(&mut self) -> Option<Self::Item> {
        next_node(&mut self.stack).map(Node::point)
    }
}

#[inline]
fn next_node<'a, N: IndexableNum, I>(stack: &mut Vec<&'a Node<N, I>>) -> Option<&'a Node<N, I>> {
    let node = stack.pop()?;

    // Note: these are pushed in backwards order to what gets popped
    if let Some(right) = node.right() {
        stack.push(right);
    }
    if let Some(left) = node.left() {
        stack.push(left);
    }

    Some(node)
}
