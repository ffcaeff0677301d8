mod catmull_rom;
mod line;

pub use catmull_rom::CatmullRom;
pub use line::Line;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// A read-only parametric road centerline.
///
/// The parameter `t` runs over `[0, max_parameter())`. Its integer part
/// selects a segment and its fractional part is the local position inside
/// that segment, so `max_parameter()` is the number of segments.
///
/// Evaluation is fallible: a source may reject parameters outside its
/// domain or carry malformed data. Consumers treat a failed evaluation as a
/// skipped sample.
pub trait CurveSource {
    /// Returns the exclusive upper bound of the parameter domain.
    fn max_parameter(&self) -> f64;

    /// Returns the number of interpolation segments.
    fn segment_count(&self) -> usize;

    /// Evaluates the centerline at global parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside the domain or evaluation fails.
    fn point_at(&self, t: f64) -> Result<Point2>;

    /// Returns the (not necessarily unit) tangent at global parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside the domain or evaluation fails.
    fn tangent_at(&self, t: f64) -> Result<Vector2>;

    /// Evaluates segment `segment` at local parameter `local_t` in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment index or local parameter is out of range.
    fn segment_point_at(&self, segment: usize, local_t: f64) -> Result<Point2>;
}

impl<C: CurveSource + ?Sized> CurveSource for &C {
    fn max_parameter(&self) -> f64 {
        (**self).max_parameter()
    }

    fn segment_count(&self) -> usize {
        (**self).segment_count()
    }

    fn point_at(&self, t: f64) -> Result<Point2> {
        (**self).point_at(t)
    }

    fn tangent_at(&self, t: f64) -> Result<Vector2> {
        (**self).tangent_at(t)
    }

    fn segment_point_at(&self, segment: usize, local_t: f64) -> Result<Point2> {
        (**self).segment_point_at(segment, local_t)
    }
}

/// Splits global parameter `t` into `(segment, local_t)`.
///
/// `t == max` maps to the end of the last segment.
fn split_parameter(t: f64, segments: usize) -> (usize, f64) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (t.floor() as usize).min(segments.saturating_sub(1));
    #[allow(clippy::cast_precision_loss)]
    let local = t - index as f64;
    (index, local)
}

/// Rejects `t` outside `[0, max]` or non-finite.
fn check_parameter(t: f64, max: f64) -> Result<()> {
    if !t.is_finite() || t < 0.0 || t > max {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "t",
            value: t,
            min: 0.0,
            max,
        }
        .into());
    }
    Ok(())
}

/// Rejects a segment index or local parameter outside the segment domain.
fn check_segment(segment: usize, local_t: f64, segments: usize) -> Result<()> {
    if segment >= segments {
        #[allow(clippy::cast_precision_loss)]
        let (value, max) = (segment as f64, segments.saturating_sub(1) as f64);
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "segment",
            value,
            min: 0.0,
            max,
        }
        .into());
    }
    if !local_t.is_finite() || !(0.0..=1.0).contains(&local_t) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "local_t",
            value: local_t,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }
    Ok(())
}
