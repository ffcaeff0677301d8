use crate::math::Point2;

use super::Viewport;

/// The main world view: a screen of fixed size centered on a movable world
/// origin, with +Y pointing up in world space and down on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    center: Point2,
    zoom: f64,
    width: u32,
    height: u32,
}

impl Camera {
    /// Creates a camera centered on `center` with `zoom` pixels per world unit.
    #[must_use]
    pub fn new(center: Point2, zoom: f64, width: u32, height: u32) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
        }
    }

    /// Returns the world point shown at the middle of the screen.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Moves the camera so that `center` is shown at the middle of the screen.
    pub fn look_at(&mut self, center: Point2) {
        self.center = center;
    }

    /// Returns the number of pixels per world unit.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the number of pixels per world unit.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    /// Resizes the visible screen region.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl Viewport for Camera {
    fn to_screen_x(&self, world_x: f64) -> f64 {
        f64::from(self.width) * 0.5 + (world_x - self.center.x) * self.zoom
    }

    fn to_screen_y(&self, world_y: f64) -> f64 {
        f64::from(self.height) * 0.5 - (world_y - self.center.y) * self.zoom
    }

    fn to_screen_length(&self, world_len: f64) -> f64 {
        world_len * self.zoom
    }

    fn visible_width(&self) -> u32 {
        self.width
    }

    fn visible_height(&self) -> u32 {
        self.height
    }
}
