use crate::error::{GeometryError, Result};
use crate::math::{is_finite_point, normalize, rotate90, Point2, Vector2};

/// One cross-section of the road: a centerline point and its two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonSample {
    pub center: Point2,
    /// `center + rotate90(unit tangent) * half_width`.
    pub left: Point2,
    /// `center - rotate90(unit tangent) * half_width`.
    pub right: Point2,
}

/// Builds road cross-sections by offsetting a centerline sample along its
/// normal.
///
/// # Sign Convention
///
/// The normal is the unit tangent rotated by +90°, so "left" is the left-hand
/// side relative to the direction of travel. Every consumer goes through this
/// type, so left edges always connect to left edges.
#[derive(Debug, Clone, Copy)]
pub struct OffsetRibbon {
    half_width: f64,
}

impl OffsetRibbon {
    /// Creates a ribbon builder for a road of `2 * half_width` total width.
    #[must_use]
    pub fn new(half_width: f64) -> Self {
        Self { half_width }
    }

    /// Returns the half-width of the road.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Returns the scaled normal at a sample.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero-length tangent and
    /// `GeometryError::NonFinite` for NaN or infinite input.
    pub fn offset(&self, center: &Point2, tangent: &Vector2) -> Result<Vector2> {
        if !is_finite_point(center) {
            return Err(GeometryError::NonFinite("ribbon center").into());
        }
        Ok(rotate90(&normalize(tangent)?) * self.half_width)
    }

    /// Builds the left/right edge points for one centerline sample.
    ///
    /// # Errors
    ///
    /// Fails like [`OffsetRibbon::offset`]; callers skip the sample.
    pub fn sample(&self, center: Point2, tangent: &Vector2) -> Result<RibbonSample> {
        let off = self.offset(&center, tangent)?;
        Ok(RibbonSample {
            center,
            left: center + off,
            right: center - off,
        })
    }

    /// Builds `count` evenly spaced points across the road, from the right
    /// edge (`-half_width`) to the left edge (`+half_width`) inclusive.
    ///
    /// # Errors
    ///
    /// Fails like [`OffsetRibbon::offset`], or with `GeometryError::Degenerate`
    /// if `count < 2`.
    pub fn fan(&self, center: Point2, tangent: &Vector2, count: usize) -> Result<Vec<Point2>> {
        if count < 2 {
            return Err(GeometryError::Degenerate(
                "a ribbon fan needs at least 2 points".to_owned(),
            )
            .into());
        }
        let off = self.offset(&center, tangent)?;
        #[allow(clippy::cast_precision_loss)]
        let last = (count - 1) as f64;
        Ok((0..count)
            .map(|j| {
                #[allow(clippy::cast_precision_loss)]
                let s = -1.0 + 2.0 * (j as f64) / last;
                center + off * s
            })
            .collect())
    }
}
