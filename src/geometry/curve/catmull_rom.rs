use crate::error::{GeometryError, Result};
use crate::math::{is_finite_point, Point2, Vector2};

use super::{check_parameter, check_segment, split_parameter, CurveSource};

/// A uniform Catmull-Rom spline through 2D control points.
///
/// Segment `i` interpolates between control points `i + 1` and `i + 2`,
/// using `i` and `i + 3` to shape the tangents. A spline with `n` control
/// points therefore has `n - 3` segments and the curve does not pass through
/// the first and last control points.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Point2>,
}

impl CatmullRom {
    /// Creates a spline from its control points.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 4 points are given or any point is
    /// non-finite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 4 {
            return Err(GeometryError::Degenerate(
                "catmull-rom spline needs at least 4 control points".to_owned(),
            )
            .into());
        }
        if !points.iter().all(is_finite_point) {
            return Err(GeometryError::NonFinite("control point").into());
        }
        Ok(Self { points })
    }

    /// Creates a closed loop through `points`.
    ///
    /// The control polygon is wrapped so that the curve passes through every
    /// given point and returns to the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points are given or any point is
    /// non-finite.
    pub fn closed(points: &[Point2]) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(GeometryError::Degenerate(
                "closed catmull-rom spline needs at least 3 points".to_owned(),
            )
            .into());
        }
        let mut wrapped = Vec::with_capacity(n + 3);
        wrapped.push(points[n - 1]);
        wrapped.extend_from_slice(points);
        wrapped.push(points[0]);
        wrapped.push(points[1]);
        Self::new(wrapped)
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    fn control(&self, segment: usize) -> [Vector2; 4] {
        let p = &self.points[segment..segment + 4];
        [p[0].coords, p[1].coords, p[2].coords, p[3].coords]
    }

    fn evaluate(&self, segment: usize, u: f64) -> Point2 {
        let [p0, p1, p2, p3] = self.control(segment);
        let u2 = u * u;
        let u3 = u2 * u;
        let v = (p1 * 2.0
            + (p2 - p0) * u
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * u2
            + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * u3)
            * 0.5;
        Point2::from(v)
    }

    fn derivative(&self, segment: usize, u: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.control(segment);
        ((p2 - p0)
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * (2.0 * u)
            + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * (3.0 * u * u))
            * 0.5
    }
}

impl CurveSource for CatmullRom {
    #[allow(clippy::cast_precision_loss)]
    fn max_parameter(&self) -> f64 {
        self.segment_count() as f64
    }

    fn segment_count(&self) -> usize {
        self.points.len() - 3
    }

    fn point_at(&self, t: f64) -> Result<Point2> {
        check_parameter(t, self.max_parameter())?;
        let (segment, u) = split_parameter(t, self.segment_count());
        Ok(self.evaluate(segment, u))
    }

    fn tangent_at(&self, t: f64) -> Result<Vector2> {
        check_parameter(t, self.max_parameter())?;
        let (segment, u) = split_parameter(t, self.segment_count());
        Ok(self.derivative(segment, u))
    }

    fn segment_point_at(&self, segment: usize, local_t: f64) -> Result<Point2> {
        check_segment(segment, local_t, self.segment_count())?;
        Ok(self.evaluate(segment, local_t))
    }
}
