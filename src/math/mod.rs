pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Rigid 2D transform (rotation followed by translation).
pub type Isometry2 = nalgebra::Isometry2<f64>;

/// Per-axis tolerance under which two path points are considered the same.
pub const POINT_EPSILON: f64 = 1e-6;

/// Vector lengths below this are treated as zero.
pub const ZERO_LENGTH: f64 = 1e-6;
