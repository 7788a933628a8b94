
use crate::kdtree::IndexedPoint;
use crate::r#type::Rect;

/// Every id whose point lies in `rect`, found by checking each point.
pub(crate) fn brute_force(points: &[IndexedPoint<f64>], rect: &Rect<f64>) -> Vec<usize> {
    points
        .iter()
        .filter(|p| rect.contains(&p.coord))
        .map(|p| p.id)
        .collect()
}
