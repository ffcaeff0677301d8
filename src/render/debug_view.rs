use tracing::trace;

use crate::config::RoadConfig;
use crate::draw::{Color, LineCap, LineJoin, StrokeStyle};
use crate::error::Result;
use crate::geometry::CurveSource;
use crate::math::{normalize, rotate90, Point2, Vector2};
use crate::tessellation::parameter_samples;
use crate::view::Viewport;

use super::segments::{world_point, world_vector};
use super::{Frame, PassSummary, RenderMode};

/// Radius of a debug sample dot in world units.
pub const DEBUG_POINT_RADIUS: f64 = 0.1;

/// Sample/tangent visualization of the raw centerline.
///
/// Draws a yellow dot every `debug_sample_step` along the curve and, at each
/// segment start, a green dot with a unit red tangent and a unit green
/// normal. Only the per-point fine cull applies; there is no coarse cull and
/// no connector guard.
///
/// Knot markers sit on the curve at `t = segment`, which need not coincide
/// with a control point of the underlying spline.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugView;

impl RenderMode for DebugView {
    fn name(&self) -> &'static str {
        "debug"
    }

    fn stroke(&self, config: &RoadConfig, camera: &dyn Viewport) -> Result<Option<StrokeStyle>> {
        if !config.quality.has_smooth_edges() {
            return Ok(None);
        }
        let width = camera.to_screen_length(config.debug_line_width);
        Ok(Some(StrokeStyle::with_ends(
            width,
            LineCap::Round,
            LineJoin::Round,
        )?))
    }

    fn render(
        &self,
        curve: &dyn CurveSource,
        config: &RoadConfig,
        frame: &mut Frame<'_>,
    ) -> PassSummary {
        let mut summary = PassSummary::default();

        for t in parameter_samples(curve.max_parameter(), config.debug_sample_step) {
            summary.samples += 1;
            match curve.point_at(t) {
                Ok(p) => {
                    if world_point(frame, config, &p, DEBUG_POINT_RADIUS, Color::YELLOW) {
                        summary.points += 1;
                    }
                }
                Err(err) => {
                    trace!(t, %err, "skipping debug sample");
                    summary.skipped += 1;
                }
            }
        }

        for segment in 0..curve.segment_count() {
            summary.samples += 1;
            #[allow(clippy::cast_precision_loss)]
            let t = segment as f64;
            let (p, d) = match knot(curve, t) {
                Ok(v) => v,
                Err(err) => {
                    trace!(t, %err, "skipping debug tangent");
                    summary.skipped += 1;
                    continue;
                }
            };
            if world_point(frame, config, &p, DEBUG_POINT_RADIUS, Color::GREEN) {
                summary.points += 1;
            }
            let vectors = [(p + d, Color::RED), (p + rotate90(&d), Color::GREEN)];
            for (tip, color) in &vectors {
                if world_vector(frame, config, &p, tip, *color) {
                    summary.lines += 1;
                }
            }
        }

        summary
    }
}

/// Returns the curve point and unit tangent at `t`.
fn knot(curve: &dyn CurveSource, t: f64) -> Result<(Point2, Vector2)> {
    let p = curve.point_at(t)?;
    let d = normalize(&curve.tangent_at(t)?)?;
    Ok((p, d))
}
