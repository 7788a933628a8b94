use crate::error::{GeoIndexError, Result};
use crate::kdtree::builder::build;
use crate::kdtree::node::{IndexedPoint, Node};
use crate::r#type::{Coord, IndexableNum};

/// An immutable KDTree over two-dimensional points.
///
/// Usually this will be created via [`build`][crate::kdtree::build] or a
/// [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder]. Once built, the tree is only read: queries take
/// `&self`, so a tree can be shared across threads and queried concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableNum, I = usize> {
    pub(crate) root: Option<Box<Node<N, I>>>,
    pub(crate) num_items: usize,
}

impl<N: IndexableNum, I> KDTree<N, I> {
    /// Build a tree from a sequence of indexed points.
    pub fn new(points: impl IntoIterator<Item = IndexedPoint<N, I>>) -> Self {
        build(points)
    }

    /// Build a tree from interleaved `[x0, y0, x1, y1, ...]` coordinates and one identifier per
    /// point.
    pub fn from_interleaved_with_ids(
        coords: &[N],
        ids: impl IntoIterator<Item = I>,
    ) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(GeoIndexError::InvalidCoordinates(format!(
                "expected an even number of interleaved values, got {}",
                coords.len()
            )));
        }

        let num_items = coords.len() / 2;
        let points: Vec<_> = coords
            .chunks_exact(2)
            .zip(ids)
            .map(|(xy, id)| IndexedPoint::new(Coord::new(xy[0], xy[1]), id))
            .collect();
        if points.len() != num_items {
            return Err(GeoIndexError::InvalidCoordinates(format!(
                "got {} points but only {} ids",
                num_items,
                points.len()
            )));
        }

        Ok(build(points))
    }
}

impl<N: IndexableNum> KDTree<N> {
    /// Build a tree from interleaved `[x0, y0, x1, y1, ...]` coordinates. Each point is identified
    /// by its insertion index.
    pub fn from_interleaved(coords: &[N]) -> Result<Self> {
        Self::from_interleaved_with_ids(coords, 0..)
    }
}

impl<N: IndexableNum, I> Default for KDTree<N, I> {
    fn default() -> Self {
        Self {
            root: None,
            num_items: 0,
        }
    }
}

impl<N: IndexableNum, I> FromIterator<IndexedPoint<N, I>> for KDTree<N, I> {
    fn from_iter<T: IntoIterator<Item = IndexedPoint<N, I>>>(iter: T) -> Self {
        build(iter)
    }
}
