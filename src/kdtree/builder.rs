use std::cmp::Ordering;

use tracing::debug;

use crate::kdtree::node::{Axis, IndexedPoint, Node};
use crate::kdtree::{KDTree, KDTreeIndex};
use crate::r#type::{Coord, IndexableNum};

/// Partitions at or below this size are built on the current thread by
/// [`KDTreeBuilder::finish_parallel`].
#[cfg(feature = "rayon")]
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// A builder to create a [`KDTree`].
///
/// Points are collected with [`add`][Self::add] and the tree is built once by
/// [`finish`][Self::finish]. The tree shape depends only on the order points were added in.
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<N: IndexableNum, I = usize> {
    points: Vec<IndexedPoint<N, I>>,

    #[cfg(feature = "rayon")]
    parallel_threshold: usize,
}

impl<N: IndexableNum, I> KDTreeBuilder<N, I> {
    /// Create a new builder with room for the provided number of items.
    pub fn new(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
            #[cfg(feature = "rayon")]
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the partition size above which [`finish_parallel`][Self::finish_parallel] builds the
    /// two halves of a partition concurrently.
    #[cfg(feature = "rayon")]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold.max(1);
        self
    }

    /// Add a point to the index.
    ///
    /// Returns the insertion position of the point.
    pub fn add(&mut self, x: N, y: N, id: I) -> usize {
        self.add_point(IndexedPoint::new(Coord::new(x, y), id))
    }

    /// Add an already-paired point to the index.
    ///
    /// Returns the insertion position of the point.
    pub fn add_point(&mut self, point: IndexedPoint<N, I>) -> usize {
        let index = self.points.len();
        self.points.push(point);
        index
    }

    /// The number of points added so far.
    pub fn num_items(&self) -> usize {
        self.points.len()
    }

    /// Consume this builder, performing the k-d sort and generating a KDTree ready for queries.
    pub fn finish(self) -> KDTree<N, I> {
        build(self.points)
    }

    /// Like [`finish`][Self::finish], but builds large partitions on the rayon thread pool.
    ///
    /// The resulting tree is identical to the one produced by [`finish`][Self::finish].
    #[cfg(feature = "rayon")]
    pub fn finish_parallel(self) -> KDTree<N, I>
    where
        I: Send,
    {
        build_parallel_with_threshold(self.points, self.parallel_threshold)
    }
}

impl<N: IndexableNum, I> Extend<IndexedPoint<N, I>> for KDTreeBuilder<N, I> {
    fn extend<T: IntoIterator<Item = IndexedPoint<N, I>>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

/// Build a KDTree from a sequence of indexed points.
///
/// An empty sequence produces an empty tree. The sequence is consumed; each level sorts its
/// partition by the level's axis with a stable sort, so points sharing a coordinate keep their
/// input order and the tree shape is deterministic.
pub fn build<N: IndexableNum, I>(
    points: impl IntoIterator<Item = IndexedPoint<N, I>>,
) -> KDTree<N, I> {
    let points: Vec<_> = points.into_iter().collect();
    let num_items = points.len();
    let tree = KDTree {
        root: build_subtree(points, 0),
        num_items,
    };
    debug!(num_items, height = tree.height(), "built kd-tree");
    tree
}

/// Build a KDTree from a sequence of indexed points, building large partitions concurrently.
#[cfg(feature = "rayon")]
pub fn build_parallel<N: IndexableNum, I: Send>(
    points: impl IntoIterator<Item = IndexedPoint<N, I>>,
) -> KDTree<N, I> {
    build_parallel_with_threshold(points.into_iter().collect(), DEFAULT_PARALLEL_THRESHOLD)
}

#[cfg(feature = "rayon")]
fn build_parallel_with_threshold<N: IndexableNum, I: Send>(
    points: Vec<IndexedPoint<N, I>>,
    parallel_threshold: usize,
) -> KDTree<N, I> {
    let num_items = points.len();
    debug!(num_items, parallel_threshold, "building kd-tree in parallel");
    let tree = KDTree {
        root: build_subtree_parallel(points, 0, parallel_threshold),
        num_items,
    };
    debug!(num_items, height = tree.height(), "built kd-tree");
    tree
}

fn build_subtree<N: IndexableNum, I>(
    points: Vec<IndexedPoint<N, I>>,
    depth: usize,
) -> Option<Box<Node<N, I>>> {
    let (axis, point, left, right) = split(points, depth)?;

    // recursively build both halves on the opposite axis
    let left = build_subtree(left, depth + 1);
    let right = build_subtree(right, depth + 1);

    Some(Box::new(Node::new(point, axis, left, right)))
}

#[cfg(feature = "rayon")]
fn build_subtree_parallel<N: IndexableNum, I: Send>(
    points: Vec<IndexedPoint<N, I>>,
    depth: usize,
    parallel_threshold: usize,
) -> Option<Box<Node<N, I>>> {
    if points.len() <= parallel_threshold {
        return build_subtree(points, depth);
    }

    let (axis, point, left, right) = split(points, depth)?;
    let (left, right) = rayon::join(
        || build_subtree_parallel(left, depth + 1, parallel_threshold),
        || build_subtree_parallel(right, depth + 1, parallel_threshold),
    );

    Some(Box::new(Node::new(point, axis, left, right)))
}

type Split<N, I> = (
    Axis,
    IndexedPoint<N, I>,
    Vec<IndexedPoint<N, I>>,
    Vec<IndexedPoint<N, I>>,
);

/// Sort a partition on the axis for `depth` and split it around its median.
///
/// Returns the axis, the median point, the points strictly before the median and the points
/// strictly after it, or `None` for an empty partition.
fn split<N: IndexableNum, I>(
    mut points: Vec<IndexedPoint<N, I>>,
    depth: usize,
) -> Option<Split<N, I>> {
    if points.is_empty() {
        return None;
    }

    let axis = Axis::from_depth(depth);
    let a = axis.index();

    // `sort_by` is stable: equal coordinates keep their relative order
    points.sort_by(|p, q| cmp_coord(p.coord.nth(a), q.coord.nth(a)));

    let median = points.len() >> 1;
    let right = points.split_off(median + 1);
    let point = points.pop()?;

    Some((axis, point, points, right))
}

/// A total order over coordinates. Only NaN is unordered; it sorts after every number.
#[inline]
#[allow(clippy::eq_op)]
fn cmp_coord<N: IndexableNum>(a: N, b: N) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| (a != a).cmp(&(b != b)))
}
