use crate::r#type::{Coord, IndexableNum};

/// The coordinate a tree level splits on.
///
/// Levels alternate strictly: the root splits on [`Axis::X`] (latitude), its children on
/// [`Axis::Y`] (longitude), and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first coordinate, latitude by convention.
    X = 0,
    /// The second coordinate, longitude by convention.
    Y = 1,
}

impl Axis {
    /// The axis used at the given depth of the tree.
    #[inline]
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// `0` for [`Axis::X`], `1` for [`Axis::Y`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A point paired with the caller's identifier for it.
///
/// The identifier is opaque to the tree; it is only handed back by queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint<N: IndexableNum, I = usize> {
    /// The location of this point.
    pub coord: Coord<N>,
    /// The caller's identifier, e.g. a row offset into an external table.
    pub id: I,
}

impl<N: IndexableNum, I> IndexedPoint<N, I> {
    /// Pair a coordinate with an identifier.
    pub fn new(coord: impl Into<Coord<N>>, id: I) -> Self {
        Self {
            coord: coord.into(),
            id,
        }
    }
}

impl<N: IndexableNum, I> From<((N, N), I)> for IndexedPoint<N, I> {
    fn from((coord, id): ((N, N), I)) -> Self {
        Self::new(coord, id)
    }
}

/// A node of the KDTree.
///
/// Every node stores exactly one point and owns its children; there is no sharing between
/// subtrees. For a node splitting on axis `a`, every point under [`Node::left`] has coordinate `a`
/// less than or equal to [`Node::split_value`], and every point under [`Node::right`] greater than
/// or equal to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N: IndexableNum, I = usize> {
    pub(crate) point: IndexedPoint<N, I>,
    pub(crate) axis: Axis,
    pub(crate) left: Option<Box<Node<N, I>>>,
    pub(crate) right: Option<Box<Node<N, I>>>,
}

impl<N: IndexableNum, I> Node<N, I> {
    pub(crate) fn new(
        point: IndexedPoint<N, I>,
        axis: Axis,
        left: Option<Box<Node<N, I>>>,
        right: Option<Box<Node<N, I>>>,
    ) -> Self {
        Self {
            point,
            axis,
            left,
            right,
        }
    }

    /// The indexed point stored at this node.
    pub fn point(&self) -> &IndexedPoint<N, I> {
        &self.point
    }

    /// The location of the point stored at this node.
    pub fn coord(&self) -> Coord<N> {
        self.point.coord
    }

    /// The identifier of the point stored at this node.
    pub fn id(&self) -> &I {
        &self.point.id
    }

    /// The axis the children of this node are split over.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The coordinate of this node's point along its split axis.
    #[inline]
    pub fn split_value(&self) -> N {
        self.point.coord.nth(self.axis.index())
    }

    /// The subtree of points at or below the split value, if any.
    pub fn left(&self) -> Option<&Node<N, I>> {
        self.left.as_deref()
    }

    /// The subtree of points at or above the split value, if any.
    pub fn right(&self) -> Option<&Node<N, I>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
