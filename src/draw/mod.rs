mod color;
mod draw_list;
mod stroke_style;

pub use color::Color;
pub use draw_list::{DrawCommand, DrawList};
pub use stroke_style::{LineCap, LineJoin, StrokeStyle};

/// A screen-space raster target.
///
/// All coordinates are in screen pixels; projecting world coordinates is the
/// caller's job.
pub trait DrawSurface {
    /// Draws a line. `width` overrides the current stroke width when given.
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: Option<f64>);

    /// Draws a filled circle of `radius` pixels centered at `(x, y)`.
    fn draw_circle(&mut self, x: f64, y: f64, color: Color, radius: f64);

    /// Replaces the current stroke style.
    fn set_stroke_style(&mut self, style: StrokeStyle);

    /// Returns the current stroke style.
    fn stroke_style(&self) -> StrokeStyle;
}
