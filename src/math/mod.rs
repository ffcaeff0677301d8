use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Rotates `v` by +90° (counter-clockwise).
///
/// This fixes the handedness of every road edge: for a tangent pointing
/// along +X the rotated vector points along +Y, which is the left edge.
#[must_use]
pub fn rotate90(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` if a component is NaN or infinite, and
/// `GeometryError::ZeroVector` if the length is below [`TOLERANCE`].
pub fn normalize(v: &Vector2) -> Result<Vector2> {
    if !v.x.is_finite() || !v.y.is_finite() {
        return Err(GeometryError::NonFinite("vector").into());
    }
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(v / len)
}

/// Returns whether both coordinates of `p` are finite.
#[must_use]
pub fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}
