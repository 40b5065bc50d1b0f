use crate::math::vector_2d::{distance, segment_angle};
use crate::math::{Point2, ZERO_LENGTH};

/// A point on a path together with the path direction there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Interpolated position.
    pub position: Point2,
    /// Tangent angle of the containing segment in radians, measured from +X.
    pub angle: f64,
}

/// Walks a polyline by arc length.
///
/// The sampler keeps a cursor on the segment it last visited, so a
/// sequence of non-decreasing queries costs O(1) amortized per call and
/// O(n) in total. Queries must not go backwards: a distance before the
/// current segment does not rewind the cursor.
#[derive(Debug, Clone)]
pub struct ArcLengthSampler<'a> {
    points: &'a [Point2],
    /// Index of the current segment's start point.
    index: usize,
    /// Arc length accumulated before the current segment.
    offset: f64,
    /// Length of the current segment.
    segment_length: f64,
}

impl<'a> ArcLengthSampler<'a> {
    /// Creates a sampler over `points`, positioned on the first segment.
    ///
    /// Fewer than 2 points yield a sampler that always returns the only
    /// point (or the origin when empty) with angle 0.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        let segment_length = match points {
            [a, b, ..] => distance(a, b),
            _ => 0.0,
        };
        Self {
            points,
            index: 0,
            offset: 0.0,
            segment_length,
        }
    }

    /// Returns the index of the segment the cursor is on.
    #[must_use]
    pub fn segment_index(&self) -> usize {
        self.index
    }

    /// Samples the path at `distance_along` from its start.
    ///
    /// Distances past the end return the last point; negative distances
    /// return the first point. The angle is that of the segment containing
    /// the sample.
    pub fn sample_at(&mut self, distance_along: f64) -> PathSample {
        if self.points.len() < 2 {
            let position = self.points.first().copied().unwrap_or_else(Point2::origin);
            return PathSample {
                position,
                angle: 0.0,
            };
        }

        let last_segment = self.points.len() - 2;
        while self.offset + self.segment_length < distance_along && self.index < last_segment {
            self.offset += self.segment_length;
            self.index += 1;
            self.segment_length =
                distance(&self.points[self.index], &self.points[self.index + 1]);
        }

        let start = self.points[self.index];
        let end = self.points[self.index + 1];
        let angle = segment_angle(&start, &end);

        let dt = distance_along - self.offset;
        if dt <= 0.0 || self.segment_length < ZERO_LENGTH {
            return PathSample {
                position: start,
                angle,
            };
        }

        let t = (dt / self.segment_length).min(1.0);
        PathSample {
            position: start + (end - start) * t,
            angle,
        }
    }
}
