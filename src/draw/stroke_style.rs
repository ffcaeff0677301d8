use crate::error::{RenderError, Result};

/// How the ends of a stroked line are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Square,
    Butt,
    Round,
}

/// How two stroked lines meet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke state of a draw surface, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    width: f64,
    cap: LineCap,
    join: LineJoin,
}

impl StrokeStyle {
    /// Creates a stroke style with the default cap and join.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn new(width: f64) -> Result<Self> {
        Self::with_ends(width, LineCap::default(), LineJoin::default())
    }

    /// Creates a stroke style with an explicit cap and join.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn with_ends(width: f64, cap: LineCap, join: LineJoin) -> Result<Self> {
        if !(width > 0.0 && width.is_finite()) {
            return Err(RenderError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self { width, cap, join })
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the line cap.
    #[must_use]
    pub fn cap(&self) -> LineCap {
        self.cap
    }

    /// Returns the line join.
    #[must_use]
    pub fn join(&self) -> LineJoin {
        self.join
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = StrokeStyle::new(2.0).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.cap(), LineCap::Square);
        assert_eq!(style.join(), LineJoin::Miter);
    }

    #[test]
    fn with_ends_keeps_cap_and_join() {
        let style = StrokeStyle::with_ends(0.5, LineCap::Round, LineJoin::Bevel).unwrap();
        assert_eq!(style.cap(), LineCap::Round);
        assert_eq!(style.join(), LineJoin::Bevel);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(StrokeStyle::new(0.0).is_err());
    }

    #[test]
    fn new_with_negative_width_fails() {
        assert!(StrokeStyle::new(-1.0).is_err());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(StrokeStyle::new(f64::NAN).is_err());
    }
}
