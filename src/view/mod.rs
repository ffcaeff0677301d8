mod camera;
mod minimap;

pub use camera::Camera;
pub use minimap::{Minimap, MINIMAP_INSET, MINIMAP_SCALE};

use crate::math::Point2;

/// A world-to-screen coordinate transform over a rectangular screen region.
pub trait Viewport {
    /// Converts a world X coordinate to a screen X coordinate.
    fn to_screen_x(&self, world_x: f64) -> f64;

    /// Converts a world Y coordinate to a screen Y coordinate.
    fn to_screen_y(&self, world_y: f64) -> f64;

    /// Converts a world length to a screen length.
    fn to_screen_length(&self, world_len: f64) -> f64;

    /// Returns the width of the visible screen region in pixels.
    fn visible_width(&self) -> u32;

    /// Returns the height of the visible screen region in pixels.
    fn visible_height(&self) -> u32;

    /// Projects a world point to screen coordinates.
    fn to_screen(&self, p: &Point2) -> (f64, f64) {
        (self.to_screen_x(p.x), self.to_screen_y(p.y))
    }
}

/// Returns whether `point`, projected through `viewport`, lies strictly
/// inside the visible rectangle grown by `margin` pixels on every side.
///
/// Non-finite points are never visible.
#[must_use]
pub fn is_visible<V: Viewport + ?Sized>(viewport: &V, point: &Point2, margin: f64) -> bool {
    let (sx, sy) = viewport.to_screen(point);
    let w = f64::from(viewport.visible_width());
    let h = f64::from(viewport.visible_height());
    sx > -margin && sy > -margin && sx < w + margin && sy < h + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity transform over a fixed screen.
    struct Screen {
        width: u32,
        height: u32,
    }

    impl Viewport for Screen {
        fn to_screen_x(&self, world_x: f64) -> f64 {
            world_x
        }

        fn to_screen_y(&self, world_y: f64) -> f64 {
            world_y
        }

        fn to_screen_length(&self, world_len: f64) -> f64 {
            world_len
        }

        fn visible_width(&self) -> u32 {
            self.width
        }

        fn visible_height(&self) -> u32 {
            self.height
        }
    }

    const SCREEN: Screen = Screen {
        width: 800,
        height: 600,
    };

    #[test]
    fn inside_is_visible() {
        assert!(is_visible(&SCREEN, &Point2::new(400.0, 300.0), 0.0));
        assert!(is_visible(&SCREEN, &Point2::new(1.0, 599.0), 0.0));
    }

    #[test]
    fn edges_are_exclusive_without_margin() {
        assert!(!is_visible(&SCREEN, &Point2::new(0.0, 300.0), 0.0));
        assert!(!is_visible(&SCREEN, &Point2::new(800.0, 300.0), 0.0));
    }

    #[test]
    fn margin_extends_bounds() {
        let p = Point2::new(-50.0, -50.0);
        assert!(!is_visible(&SCREEN, &p, 0.0));
        assert!(!is_visible(&SCREEN, &p, 50.0));
        assert!(is_visible(&SCREEN, &p, 51.0));
        assert!(is_visible(&SCREEN, &Point2::new(815.0, 610.0), 20.0));
    }

    #[test]
    fn visibility_is_monotonic_in_margin() {
        let probes = [
            Point2::new(-30.0, 10.0),
            Point2::new(810.0, 590.0),
            Point2::new(400.0, -5.0),
            Point2::new(-100.0, 700.0),
        ];
        let margins = [0.0, 5.0, 20.0, 40.0, 150.0];
        for p in &probes {
            for (i, &m) in margins.iter().enumerate() {
                if is_visible(&SCREEN, p, m) {
                    for &bigger in &margins[i..] {
                        assert!(is_visible(&SCREEN, p, bigger), "{p:?} lost at margin {bigger}");
                    }
                }
            }
        }
    }

    #[test]
    fn nan_is_never_visible() {
        assert!(!is_visible(&SCREEN, &Point2::new(f64::NAN, 10.0), 1000.0));
    }
}
