use super::{Point2, Vector2, POINT_EPSILON, ZERO_LENGTH};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Returns `true` if `a` and `b` differ by less than [`POINT_EPSILON`] on both axes.
#[must_use]
pub fn is_same_point(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < POINT_EPSILON && (a.y - b.y).abs() < POINT_EPSILON
}

/// Returns the unit direction from `a` to `b`.
///
/// Coincident points yield the zero vector instead of `NaN`.
#[must_use]
pub fn unit_direction(a: &Point2, b: &Point2) -> Vector2 {
    let d = b - a;
    let len = d.norm();
    if len < ZERO_LENGTH {
        return Vector2::zeros();
    }
    d / len
}

/// Returns the angle of the segment `a → b` in radians, measured from +X.
#[must_use]
pub fn segment_angle(a: &Point2, b: &Point2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}
