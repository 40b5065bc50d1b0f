use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{distance, is_same_point, unit_direction};
use crate::math::Point2;

use super::ArcLengthSampler;

/// Removes consecutive duplicate points in place.
///
/// Two points are duplicates when they differ by less than
/// [`POINT_EPSILON`](crate::math::POINT_EPSILON) on both axes. The later
/// point of each duplicate pair is dropped and the survivor is compared
/// against the next one, so whole runs collapse to their first point.
/// Relative order of the remaining points is preserved.
pub fn dedup_adjacent(points: &mut Vec<Point2>) {
    points.dedup_by(|next, kept| is_same_point(kept, next));
}

/// An open polyline used as the baseline for text.
///
/// Holds at least two points and no two consecutive points coincide,
/// so every segment has a non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point2>,
}

impl Path {
    /// Creates a path from points, dropping adjacent duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite, or if fewer than
    /// 2 distinct points remain after deduplication.
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(GeometryError::NonFinite { index }.into());
        }

        dedup_adjacent(&mut points);
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a path from a flat `[x0, y0, x1, y1, ...]` coordinate list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has odd length, or for the same reasons
    /// as [`Path::new`].
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount(coords.len()).into());
        }
        let points = coords
            .chunks_exact(2)
            .map(|xy| Point2::new(xy[0], xy[1]))
            .collect();
        Self::new(points)
    }

    /// Returns the path vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of segments (always at least 1).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns the total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| distance(&w[0], &w[1]))
            .sum()
    }

    /// Returns a copy of the path running from the last point to the first.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns `true` if the path's overall direction points to -X, i.e.
    /// text laid along it would read upside down.
    ///
    /// Closed paths (first point == last point) never run backwards.
    #[must_use]
    pub fn runs_backwards(&self) -> bool {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return false;
        };
        unit_direction(first, last).x < 0.0
    }

    /// Returns a fresh arc-length sampler positioned at the path start.
    #[must_use]
    pub fn sampler(&self) -> ArcLengthSampler<'_> {
        ArcLengthSampler::new(&self.points)
    }
}
