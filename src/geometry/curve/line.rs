use crate::error::{GeometryError, Result};
use crate::math::{is_finite_point, Point2, Vector2};

use super::{check_parameter, check_segment, CurveSource};

/// A straight centerline split into `segments` equal pieces.
///
/// The parametric form is: `P(t) = origin + t * step`, where `step` is the
/// displacement covered by one segment. The tangent is `step` everywhere.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point2,
    step: Vector2,
    segments: usize,
}

impl Line {
    /// Creates a new line from an origin, a per-segment displacement and a
    /// segment count.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is zero-length or non-finite, the origin is
    /// non-finite, or `segments` is zero.
    pub fn new(origin: Point2, step: Vector2, segments: usize) -> Result<Self> {
        if !is_finite_point(&origin) {
            return Err(GeometryError::NonFinite("line origin").into());
        }
        crate::math::normalize(&step)?;
        if segments == 0 {
            return Err(GeometryError::Degenerate("line needs at least one segment".to_owned()).into());
        }
        Ok(Self {
            origin,
            step,
            segments,
        })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the displacement covered by one segment.
    #[must_use]
    pub fn step(&self) -> &Vector2 {
        &self.step
    }
}

impl CurveSource for Line {
    #[allow(clippy::cast_precision_loss)]
    fn max_parameter(&self) -> f64 {
        self.segments as f64
    }

    fn segment_count(&self) -> usize {
        self.segments
    }

    fn point_at(&self, t: f64) -> Result<Point2> {
        check_parameter(t, self.max_parameter())?;
        Ok(self.origin + self.step * t)
    }

    fn tangent_at(&self, t: f64) -> Result<Vector2> {
        check_parameter(t, self.max_parameter())?;
        Ok(self.step)
    }

    fn segment_point_at(&self, segment: usize, local_t: f64) -> Result<Point2> {
        check_segment(segment, local_t, self.segments)?;
        #[allow(clippy::cast_precision_loss)]
        let t = segment as f64 + local_t;
        Ok(self.origin + self.step * t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn evaluates_along_step() {
        let line = Line::new(Point2::new(1.0, 2.0), Vector2::new(2.0, 0.0), 4).unwrap();
        let p = line.point_at(1.5).unwrap();
        assert_relative_eq!(p.x, 4.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(line.max_parameter(), 4.0);
    }

    #[test]
    fn segment_point_matches_global() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 1.0), 3).unwrap();
        let a = line.segment_point_at(2, 0.25).unwrap();
        let b = line.point_at(2.25).unwrap();
        assert_relative_eq!(a, b);
    }

    #[test]
    fn tangent_is_constant() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 3).unwrap();
        assert_relative_eq!(line.tangent_at(0.0).unwrap(), Vector2::new(1.0, 0.0));
        assert_relative_eq!(line.tangent_at(2.9).unwrap(), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn zero_step_fails() {
        assert!(Line::new(Point2::origin(), Vector2::zeros(), 3).is_err());
    }

    #[test]
    fn zero_segments_fails() {
        assert!(Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 0).is_err());
    }

    #[test]
    fn out_of_range_parameter_fails() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 3).unwrap();
        assert!(line.point_at(-1.0).is_err());
        assert!(line.segment_point_at(3, 0.0).is_err());
    }
}
