use crate::config::RoadConfig;
use crate::draw::Color;
use crate::math::Point2;
use crate::view::{is_visible, Viewport};

use super::Frame;

/// Returns whether `a` and `b` differ by more than `max_delta` on either axis.
///
/// Such connectors span a seam or a culled gap of the curve and are never drawn.
#[must_use]
pub fn is_discontinuous(a: &Point2, b: &Point2, max_delta: f64) -> bool {
    (a.x - b.x).abs() > max_delta || (a.y - b.y).abs() > max_delta
}

/// Draws a world-space connector on the main view.
///
/// Returns `false` without drawing when the connector is discontinuous or
/// either endpoint lies outside the view grown by the fine cull margin.
pub fn world_line(
    frame: &mut Frame<'_>,
    config: &RoadConfig,
    a: &Point2,
    b: &Point2,
    color: Color,
) -> bool {
    if is_discontinuous(a, b, config.max_connector_delta) {
        return false;
    }
    let margin = config.fine_cull_margin;
    if !is_visible(frame.camera, a, margin) || !is_visible(frame.camera, b, margin) {
        return false;
    }
    let (x0, y0) = frame.camera.to_screen(a);
    let (x1, y1) = frame.camera.to_screen(b);
    frame.surface.draw_line(x0, y0, x1, y1, color, None);
    true
}

/// Draws a world-space debug vector from `origin` to `tip` on the main
/// view. Only the origin is culled; no continuity guard applies.
pub fn world_vector(
    frame: &mut Frame<'_>,
    config: &RoadConfig,
    origin: &Point2,
    tip: &Point2,
    color: Color,
) -> bool {
    if !is_visible(frame.camera, origin, config.fine_cull_margin) {
        return false;
    }
    let (x0, y0) = frame.camera.to_screen(origin);
    let (x1, y1) = frame.camera.to_screen(tip);
    frame.surface.draw_line(x0, y0, x1, y1, color, None);
    true
}

/// Draws a world-space dot of `radius` world units on the main view, culled
/// with the fine margin.
pub fn world_point(
    frame: &mut Frame<'_>,
    config: &RoadConfig,
    p: &Point2,
    radius: f64,
    color: Color,
) -> bool {
    if !is_visible(frame.camera, p, config.fine_cull_margin) {
        return false;
    }
    let (x, y) = frame.camera.to_screen(p);
    let r = frame.camera.to_screen_length(radius);
    frame.surface.draw_circle(x, y, color, r);
    true
}

/// Draws one piece of the centerline trace on the minimap.
///
/// The minimap is never culled. On presets whose hide margin is below
/// `minimap_decimation_hide_threshold`, pieces that move less than a pixel
/// on either axis of the main view are dropped. Axis-aligned pieces are
/// dropped on those presets too.
pub fn minimap_line(
    frame: &mut Frame<'_>,
    config: &RoadConfig,
    a: &Point2,
    b: &Point2,
    color: Color,
) -> bool {
    if config.quality.out_of_bounds_hide() < config.minimap_decimation_hide_threshold
        && is_sub_pixel(frame.camera, a, b)
    {
        return false;
    }
    let (x0, y0) = frame.minimap.to_screen(a);
    let (x1, y1) = frame.minimap.to_screen(b);
    frame
        .surface
        .draw_line(x0, y0, x1, y1, color, Some(config.minimap_line_width));
    true
}

fn is_sub_pixel(view: &dyn Viewport, a: &Point2, b: &Point2) -> bool {
    let (ax, ay) = view.to_screen(a);
    let (bx, by) = view.to_screen(b);
    (ax - bx).abs() < 1.0 || (ay - by).abs() < 1.0
}
