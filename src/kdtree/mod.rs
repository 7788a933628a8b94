//! An implementation of an immutable, pointer-based K-D Tree over two-dimensional points.
//!
//! The tree is built once from a set of [`IndexedPoint`]s and then only queried. Each level
//! splits its points around the median of one axis, alternating between the first coordinate
//! (latitude) at even depths and the second (longitude) at odd depths.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod r#trait;
pub mod traversal;

#[cfg(feature = "rayon")]
pub use builder::build_parallel;
pub use builder::{build, KDTreeBuilder};
pub use index::KDTree;
pub use node::{Axis, IndexedPoint, Node};
pub use r#trait::{range_search, KDTreeIndex};

#[cfg(test)]
mod test;
