use std::collections::HashSet;
use std::hash::Hash;

use geo_traits::RectTrait;
use tracing::trace;

use crate::kdtree::traversal::PreOrder;
use crate::kdtree::{IndexedPoint, KDTree, Node};
use crate::r#type::{IndexableNum, Rect};

/// A trait for searching and accessing data out of a KDTree.
///
/// This is implemented both for a whole [`KDTree`] and for any [`Node`], which queries only the
/// subtree rooted at that node.
pub trait KDTreeIndex<N: IndexableNum, I>: Sized {
    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Node<N, I>>;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize;

    /// Returns `true` if this tree holds no points.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// The number of levels of the tree. An empty tree has height 0 and a single point height 1.
    fn height(&self) -> usize {
        self.root().map_or(0, subtree_height)
    }

    /// Iterate over all indexed points in pre-order.
    fn iter(&self) -> PreOrder<'_, N, I> {
        PreOrder::new(self.root())
    }

    /// Search the index for items within a given bounding box.
    ///
    /// - min_x: bbox (southwest latitude)
    /// - min_y: bbox (southwest longitude)
    /// - max_x: bbox (northeast latitude)
    /// - max_y: bbox (northeast longitude)
    ///
    /// Returns ids of found items, in pre-order of the visited nodes.
    fn range(&self, min_x: N, min_y: N, max_x: N, max_y: N) -> Vec<I>
    where
        I: Clone,
    {
        let mut result = vec![];
        self.range_into(&Rect::new((min_x, min_y), (max_x, max_y)), &mut result);
        result
    }

    /// Search the index for items within a given bounding box.
    ///
    /// Returns ids of found items
    fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<I>
    where
        I: Clone,
    {
        let mut result = vec![];
        self.range_into(&Rect::from_rect_trait(rect), &mut result);
        result
    }

    /// Search the index for items within a given bounding box, appending their ids to `result`.
    ///
    /// Both bounds of the rectangle are inclusive on both axes. A node's own id is appended before
    /// either of its subtrees is searched, and the left subtree is searched before the right.
    ///
    /// The rectangle must satisfy `min <= max` on both axes. This is only checked in debug builds;
    /// an inverted rectangle silently yields an empty or incomplete result.
    fn range_into(&self, rect: &Rect<N>, result: &mut Vec<I>)
    where
        I: Clone,
    {
        debug_assert!(rect.is_well_formed(), "inverted query rectangle {rect:?}");

        let start = result.len();
        if let Some(root) = self.root() {
            search_node(root, rect, result);
        }
        trace!(?rect, matches = result.len() - start, "range query");
    }

    /// Search the index with several rectangles at once.
    ///
    /// Returns the union of the matching ids without duplicates. Ids are ordered by the first
    /// rectangle that found them, then by the order that rectangle's search found them in.
    fn range_many<'r>(&self, rects: impl IntoIterator<Item = &'r Rect<N>>) -> Vec<I>
    where
        N: 'r,
        I: Clone + Eq + Hash,
    {
        let mut seen = HashSet::new();
        let mut result = vec![];
        let mut found = vec![];

        for rect in rects {
            found.clear();
            self.range_into(rect, &mut found);
            for id in found.drain(..) {
                if seen.insert(id.clone()) {
                    result.push(id);
                }
            }
        }

        result
    }
}

impl<N: IndexableNum, I> KDTreeIndex<N, I> for KDTree<N, I> {
    fn root(&self) -> Option<&Node<N, I>> {
        self.root.as_deref()
    }

    fn num_items(&self) -> usize {
        self.num_items
    }
}

impl<N: IndexableNum, I> KDTreeIndex<N, I> for Node<N, I> {
    fn root(&self) -> Option<&Node<N, I>> {
        Some(self)
    }

    fn num_items(&self) -> usize {
        self.iter().count()
    }
}

/// Search the tree rooted at `root` for items within `rect`.
///
/// Returns ids of found items, in pre-order. An empty tree yields no ids.
pub fn range_search<N: IndexableNum, I: Clone>(
    root: Option<&Node<N, I>>,
    rect: &Rect<N>,
) -> Vec<I> {
    let mut result = vec![];
    if let Some(root) = root {
        root.range_into(rect, &mut result);
    }
    result
}

fn search_node<N: IndexableNum, I: Clone>(
    node: &Node<N, I>,
    rect: &Rect<N>,
    result: &mut Vec<I>,
) {
    let IndexedPoint { coord, id } = node.point();

    // include the node's own item if it's in range
    if rect.contains(coord) {
        result.push(id.clone());
    }

    // search the halves that may intersect the query. Both comparisons are inclusive, since
    // points equal to the split value can sit on either side.
    let axis = node.axis().index();
    let value = node.split_value();

    if let Some(left) = node.left() {
        if rect.min().nth(axis) <= value {
            search_node(left, rect, result);
        }
    }

    if let Some(right) = node.right() {
        if value <= rect.max().nth(axis) {
            search_node(right, rect, result);
        }
    }
}

fn subtree_height<N: IndexableNum, I>(node: &Node<N, I>) -> usize {
    let left = node.left().map_or(0, subtree_height);
    let right = node.right().map_or(0, subtree_height);
    1 + left.max(right)
}
