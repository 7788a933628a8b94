#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::{GeoIndexError, Result};
pub use r#type::{Coord, IndexableNum, Rect};

#[cfg(test)]
pub(crate) mod test;
