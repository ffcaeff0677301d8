use super::Viewport;

/// Distance of the minimap's world origin from the bottom-right screen corner.
pub const MINIMAP_INSET: f64 = 80.0;

/// Pixels per world unit on the minimap.
pub const MINIMAP_SCALE: f64 = 4.0;

/// A fixed-position, fixed-scale overlay view.
///
/// World `(0, 0)` is anchored `inset` pixels left of and above the
/// bottom-right corner of the HUD; the main camera has no effect on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimap {
    width: u32,
    height: u32,
    inset: f64,
    scale: f64,
}

impl Minimap {
    /// Creates a minimap over a HUD of the given size, using the default
    /// inset and scale.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_layout(width, height, MINIMAP_INSET, MINIMAP_SCALE)
    }

    /// Creates a minimap with an explicit anchor inset and scale.
    #[must_use]
    pub fn with_layout(width: u32, height: u32, inset: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            inset,
            scale,
        }
    }

    /// Returns the anchor inset in pixels.
    #[must_use]
    pub fn inset(&self) -> f64 {
        self.inset
    }

    /// Returns the number of pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Viewport for Minimap {
    fn to_screen_x(&self, world_x: f64) -> f64 {
        f64::from(self.width) - self.inset + world_x * self.scale
    }

    fn to_screen_y(&self, world_y: f64) -> f64 {
        f64::from(self.height) - self.inset - world_y * self.scale
    }

    fn to_screen_length(&self, world_len: f64) -> f64 {
        world_len * self.scale
    }

    fn visible_width(&self) -> u32 {
        self.width
    }

    fn visible_height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn origin_sits_at_bottom_right_inset() {
        let map = Minimap::new(800, 600);
        let (x, y) = map.to_screen(&Point2::origin());
        assert_relative_eq!(x, 720.0);
        assert_relative_eq!(y, 520.0);
    }

    #[test]
    fn scales_and_flips_y() {
        let map = Minimap::new(800, 600);
        let (x, y) = map.to_screen(&Point2::new(2.0, 3.0));
        assert_relative_eq!(x, 728.0);
        assert_relative_eq!(y, 508.0);
    }

    #[test]
    fn custom_layout() {
        let map = Minimap::with_layout(200, 100, 10.0, 2.0);
        assert_relative_eq!(map.to_screen_x(1.0), 192.0);
        assert_relative_eq!(map.to_screen_y(1.0), 88.0);
        assert_relative_eq!(map.to_screen_length(5.0), 10.0);
    }
}
