use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Building a tree and querying it never fail. These errors are only produced by the checked
/// constructors for rectangles and interleaved coordinate buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoIndexError {
    /// A rectangle whose minimum corner exceeds its maximum corner on some axis.
    #[error("Invalid rectangle: {0}")]
    InvalidRect(String),

    /// A coordinate buffer with an unexpected length.
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

pub type Result<T> = std::result::Result<T, GeoIndexError>;
