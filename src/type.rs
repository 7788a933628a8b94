use std::fmt::Debug;

use geo_traits::{CoordTrait, RectTrait};
use num_traits::{Bounded, Num, NumCast, ToPrimitive};

use crate::error::{GeoIndexError, Result};

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every implementor is a
/// plain `Copy` number with a total order on all values the tree is expected to hold.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Debug
    + Send
    + Sync
    + Bounded
{
}

impl IndexableNum for i8 {}
impl IndexableNum for u8 {}
impl IndexableNum for i16 {}
impl IndexableNum for u16 {}
impl IndexableNum for i32 {}
impl IndexableNum for u32 {}
impl IndexableNum for i64 {}
impl IndexableNum for u64 {}
impl IndexableNum for f32 {}
impl IndexableNum for f64 {}

/// A single two-dimensional point.
///
/// By convention `x` holds the latitude and `y` the longitude, but the tree treats both as plain
/// planar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord<N: IndexableNum> {
    /// The first coordinate (latitude).
    pub x: N,
    /// The second coordinate (longitude).
    pub y: N,
}

impl<N: IndexableNum> Coord<N> {
    /// Create a new coordinate.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The value of this coordinate along the given axis, `0` for `x` and `1` for `y`.
    #[inline]
    pub fn nth(&self, axis: usize) -> N {
        debug_assert!(axis < 2, "axis out of range: {axis}");
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }
}

impl<N: IndexableNum> From<(N, N)> for Coord<N> {
    fn from((x, y): (N, N)) -> Self {
        Self { x, y }
    }
}

impl<N: IndexableNum> From<[N; 2]> for Coord<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self { x, y }
    }
}

impl<N: IndexableNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Coord only has two dimensions, got index {n}"),
        }
    }
}

/// An axis-aligned query rectangle.
///
/// `min` is the southwest corner `(sw_lat, sw_lon)` and `max` the northeast corner
/// `(ne_lat, ne_lon)`. Queries expect `min <= max` on both axes and do not check it in release
/// builds; use [`Rect::try_new`] or [`Rect::from_corners`] when the corners come from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<N: IndexableNum> {
    min: Coord<N>,
    max: Coord<N>,
}

impl<N: IndexableNum> Rect<N> {
    /// Create a rectangle from its southwest and northeast corners without validating them.
    pub fn new(min: impl Into<Coord<N>>, max: impl Into<Coord<N>>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a rectangle from its southwest and northeast corners, returning an error if `min`
    /// is above `max` on either axis.
    pub fn try_new(min: impl Into<Coord<N>>, max: impl Into<Coord<N>>) -> Result<Self> {
        let rect = Self::new(min, max);
        if !rect.is_well_formed() {
            return Err(GeoIndexError::InvalidRect(format!(
                "min {:?} is not below max {:?}",
                rect.min, rect.max
            )));
        }
        Ok(rect)
    }

    /// Create a rectangle from any two opposite corners, in any order.
    ///
    /// This is how a rectangle drawn on a map should be turned into a query: the drawing tool
    /// reports corners in whatever order the pointer moved.
    pub fn from_corners(a: impl Into<Coord<N>>, b: impl Into<Coord<N>>) -> Self {
        let a = a.into();
        let b = b.into();
        let (min_x, max_x) = min_max(a.x, b.x);
        let (min_y, max_y) = min_max(a.y, b.y);
        Self {
            min: Coord::new(min_x, min_y),
            max: Coord::new(max_x, max_y),
        }
    }

    /// The bounding rectangle of a set of points, or `None` if the set is empty.
    ///
    /// A closed polygon ring, such as the five vertices of a drawn rectangle, yields the
    /// rectangle itself.
    pub fn bounding<C: Into<Coord<N>>>(points: impl IntoIterator<Item = C>) -> Option<Self> {
        let mut points = points.into_iter().map(Into::into);
        let first = points.next()?;
        let rect = points.fold(Self::new(first, first), |mut rect, coord: Coord<N>| {
            if coord.x < rect.min.x {
                rect.min.x = coord.x;
            }
            if coord.y < rect.min.y {
                rect.min.y = coord.y;
            }
            if coord.x > rect.max.x {
                rect.max.x = coord.x;
            }
            if coord.y > rect.max.y {
                rect.max.y = coord.y;
            }
            rect
        });
        Some(rect)
    }

    /// The southwest corner.
    pub fn min(&self) -> Coord<N> {
        self.min
    }

    /// The northeast corner.
    pub fn max(&self) -> Coord<N> {
        self.max
    }

    /// Returns `true` if `min <= max` on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Returns `true` if the point lies inside this rectangle. Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, coord: &Coord<N>) -> bool {
        self.min.x <= coord.x
            && coord.x <= self.max.x
            && self.min.y <= coord.y
            && coord.y <= self.max.y
    }

    /// Convert any `geo-traits` rectangle.
    pub fn from_rect_trait(rect: &impl RectTrait<T = N>) -> Self {
        Self::new(
            (rect.min().x(), rect.min().y()),
            (rect.max().x(), rect.max().y()),
        )
    }
}

impl<N: IndexableNum> RectTrait for Rect<N> {
    type T = N;
    type CoordType<'a>
        = Coord<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        self.min
    }

    fn max(&self) -> Self::CoordType<'_> {
        self.max
    }
}

#[inline]
fn min_max<N: IndexableNum>(a: N, b: N) -> (N, N) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_corners_normalizes() {
        let rect = Rect::from_corners((-19.91, -43.92), (-19.93, -43.95));
        assert_eq!(rect.min(), Coord::new(-19.93, -43.95));
        assert_eq!(rect.max(), Coord::new(-19.91, -43.92));
        assert!(rect.is_well_formed());
    }

    #[test]
    fn try_new_rejects_inverted_corners() {
        assert!(Rect::try_new((0., 0.), (1., 1.)).is_ok());
        assert!(Rect::try_new((0., 0.), (0., 0.)).is_ok());

        let err = Rect::try_new((2., 0.), (1., 1.)).unwrap_err();
        assert!(matches!(err, GeoIndexError::InvalidRect(_)));
        assert!(Rect::try_new((0., 2.), (1., 1.)).is_err());
    }

    #[test]
    fn bounding_of_closed_ring() {
        // A drawn rectangle arrives as a closed ring of (lon, lat) vertices; callers swap them.
        let ring = [
            [-43.95, -19.93],
            [-43.95, -19.91],
            [-43.92, -19.91],
            [-43.92, -19.93],
            [-43.95, -19.93],
        ];
        let rect = Rect::bounding(ring.iter().map(|[lon, lat]| (*lat, *lon))).unwrap();
        assert_eq!(rect, Rect::new((-19.93, -43.95), (-19.91, -43.92)));

        assert!(Rect::<f64>::bounding(Vec::<(f64, f64)>::new()).is_none());
    }

    #[test]
    fn contains_is_inclusive() {
        let rect = Rect::new((0, 0), (10, 5));
        assert!(rect.contains(&Coord::new(0, 0)));
        assert!(rect.contains(&Coord::new(10, 5)));
        assert!(rect.contains(&Coord::new(3, 5)));
        assert!(!rect.contains(&Coord::new(11, 5)));
        assert!(!rect.contains(&Coord::new(3, -1)));
    }

    #[test]
    fn converts_geo_rect() {
        let geo_rect = geo_0_31::Rect::new(
            geo_0_31::coord! { x: 1., y: 2. },
            geo_0_31::coord! { x: 3., y: 4. },
        );
        let rect = Rect::from_rect_trait(&geo_rect);
        assert_eq!(rect, Rect::new((1., 2.), (3., 4.)));
    }
}
