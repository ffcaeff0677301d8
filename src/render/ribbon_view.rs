use tracing::trace;

use crate::config::RoadConfig;
use crate::draw::{Color, LineCap, LineJoin, StrokeStyle};
use crate::error::Result;
use crate::geometry::CurveSource;
use crate::math::Point2;
use crate::tessellation::{parameter_samples, OffsetRibbon, RibbonSample};
use crate::view::{is_visible, Viewport};

use super::segments::{minimap_line, world_line};
use super::{Frame, PassSummary, RenderMode};

/// Road surface fill color.
pub const SURFACE_COLOR: Color = Color::GRAY;

/// Road edge and minimap trace color.
pub const BOUNDARY_COLOR: Color = Color::WHITE;

/// The production road: a gray cross-hatched surface between two white edge
/// lines on the main view, and a white centerline trace on the minimap.
///
/// Two independent passes walk `t = 0, step, 2 * step, ...` below
/// `max_parameter()`, with `step` the quality's road detail:
///
/// 1. **Surface**: samples outside the main view grown by the quality's
///    out-of-bounds margin are dropped. Each kept sample becomes a fan of
///    parallel points across the road; point `i` of the previous fan is
///    joined to point `i` of the current one.
/// 2. **Boundary**: every sample yields a center and two edges; edges join
///    left to left and right to right on the main view, centers join on the
///    minimap.
///
/// Each pass carries only the previous sample, starting empty every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RibbonView;

/// Rolling window of a single sampling pass.
///
/// The boundary pass keeps a whole [`RibbonSample`] (centerline and both
/// edges) as its payload, so "have one sample" and "have centerline and
/// edges" are the same state here.
#[derive(Debug)]
enum Window<T> {
    AwaitingFirstSample,
    Previous(T),
}

impl RibbonView {
    fn surface_pass(
        curve: &dyn CurveSource,
        config: &RoadConfig,
        frame: &mut Frame<'_>,
        summary: &mut PassSummary,
    ) {
        let ribbon = OffsetRibbon::new(config.half_width);
        let margin = config.quality.out_of_bounds_hide();

        parameter_samples(curve.max_parameter(), config.quality.road_detail()).fold(
            Window::AwaitingFirstSample,
            |window, t| {
                summary.samples += 1;
                let Ok(center) = curve.point_at(t) else {
                    summary.skipped += 1;
                    return window;
                };
                if !is_visible(frame.camera, &center, margin) {
                    summary.culled += 1;
                    return window;
                }
                let fan = match curve
                    .tangent_at(t)
                    .and_then(|d| ribbon.fan(center, &d, config.fan_size))
                {
                    Ok(fan) => fan,
                    Err(err) => {
                        trace!(t, %err, "skipping road surface sample");
                        summary.skipped += 1;
                        return window;
                    }
                };
                if let Window::Previous(prev) = &window {
                    for (a, b) in fan.iter().zip(prev) {
                        if world_line(frame, config, a, b, SURFACE_COLOR) {
                            summary.lines += 1;
                        }
                    }
                }
                Window::Previous(fan)
            },
        );
    }

    fn boundary_pass(
        curve: &dyn CurveSource,
        config: &RoadConfig,
        frame: &mut Frame<'_>,
        summary: &mut PassSummary,
    ) {
        let ribbon = OffsetRibbon::new(config.half_width);

        parameter_samples(curve.max_parameter(), config.quality.road_detail()).fold(
            Window::<RibbonSample>::AwaitingFirstSample,
            |window, t| {
                summary.samples += 1;
                let sample = match cross_section(curve, &ribbon, t) {
                    Ok(sample) => sample,
                    Err(err) => {
                        trace!(t, %err, "skipping road boundary sample");
                        summary.skipped += 1;
                        return window;
                    }
                };
                if let Window::Previous(prev) = &window {
                    let drawn = [
                        minimap_line(frame, config, &prev.center, &sample.center, BOUNDARY_COLOR),
                        world_line(frame, config, &sample.left, &prev.left, BOUNDARY_COLOR),
                        world_line(frame, config, &sample.right, &prev.right, BOUNDARY_COLOR),
                    ];
                    summary.lines += drawn.iter().filter(|&&d| d).count();
                }
                Window::Previous(sample)
            },
        );
    }
}

fn cross_section(curve: &dyn CurveSource, ribbon: &OffsetRibbon, t: f64) -> Result<RibbonSample> {
    let center: Point2 = curve.point_at(t)?;
    let tangent = curve.tangent_at(t)?;
    ribbon.sample(center, &tangent)
}

impl RenderMode for RibbonView {
    fn name(&self) -> &'static str {
        "ribbon"
    }

    fn stroke(&self, config: &RoadConfig, camera: &dyn Viewport) -> Result<Option<StrokeStyle>> {
        let width = camera.to_screen_length(config.line_width);
        let style = if config.quality.has_smooth_edges() {
            StrokeStyle::with_ends(width, LineCap::Round, LineJoin::Bevel)?
        } else {
            StrokeStyle::new(width)?
        };
        Ok(Some(style))
    }

    fn render(
        &self,
        curve: &dyn CurveSource,
        config: &RoadConfig,
        frame: &mut Frame<'_>,
    ) -> PassSummary {
        let mut summary = PassSummary::default();
        Self::surface_pass(curve, config, frame, &mut summary);
        Self::boundary_pass(curve, config, frame, &mut summary);
        summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::RenderQuality;
    use crate::draw::DrawList;
    use crate::error::GeometryError;
    use crate::geometry::{CatmullRom, Line};
    use crate::math::Vector2;
    use crate::view::{Camera, Minimap};

    fn views() -> (Camera, Minimap) {
        (Camera::new(Point2::origin(), 10.0, 800, 600), Minimap::new(800, 600))
    }

    /// Samples at whole parameters only, with a wide-open minimap.
    fn unit_step_config(fan_size: usize) -> RoadConfig {
        RoadConfig {
            quality: RenderQuality::new(true, 1.0, 200.0).unwrap(),
            fan_size,
            ..RoadConfig::default()
        }
    }

    fn render(curve: &dyn CurveSource, config: &RoadConfig) -> (DrawList, PassSummary) {
        let (camera, minimap) = views();
        let mut list = DrawList::new();
        let summary = RibbonView.render(curve, config, &mut Frame::new(&camera, &minimap, &mut list));
        (list, summary)
    }

    #[test]
    fn straight_road_edges_sit_at_half_width() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 3).unwrap();
        let (list, summary) = render(&line, &unit_step_config(2));

        // Camera: (x, y) -> (400 + 10x, 300 - 10y). Left edge y = +1, right y = -1.
        let white: Vec<_> = list.lines(BOUNDARY_COLOR).collect();
        let main: Vec<_> = white
            .iter()
            .filter(|(from, _)| from.0 < 700.0)
            .copied()
            .collect();
        assert_eq!(
            main,
            vec![
                ((410.0, 290.0), (400.0, 290.0)),
                ((410.0, 310.0), (400.0, 310.0)),
                ((420.0, 290.0), (410.0, 290.0)),
                ((420.0, 310.0), (410.0, 310.0)),
            ]
        );
        assert_eq!(summary.samples, 6);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn minimap_traces_the_centerline() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 3).unwrap();
        let (list, _) = render(&line, &unit_step_config(2));
        let minimap: Vec<_> = list
            .lines(BOUNDARY_COLOR)
            .filter(|(from, _)| from.0 >= 700.0)
            .collect();
        assert_eq!(
            minimap,
            vec![((720.0, 520.0), (724.0, 520.0)), ((724.0, 520.0), (728.0, 520.0))]
        );
    }

    #[test]
    fn surface_fan_connects_strand_to_strand() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 3).unwrap();
        let (list, _) = render(&line, &unit_step_config(3));
        // Three samples, two gaps, three strands per gap.
        let gray: Vec<_> = list.lines(SURFACE_COLOR).collect();
        assert_eq!(gray.len(), 6);
        for (from, to) in &gray {
            assert!((from.1 - to.1).abs() < 1e-9, "strand must stay parallel");
            assert!((from.0 - to.0 - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn single_sample_draws_nothing() {
        let line = Line::new(Point2::origin(), Vector2::new(1.0, 0.0), 3).unwrap();
        let config = RoadConfig {
            quality: RenderQuality::new(true, 3.0, 200.0).unwrap(),
            ..RoadConfig::default()
        };
        let (list, summary) = render(&line, &config);
        assert!(list.commands().is_empty());
        assert_eq!(summary.samples, 2);
        assert_eq!(summary.lines, 0);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn offscreen_samples_are_culled() {
        // Starts 100 world units left of the view: 1000 px off screen.
        let line = Line::new(Point2::new(-100.0, 0.0), Vector2::new(1.0, 0.0), 200).unwrap();
        let (_, summary) = render(&line, &unit_step_config(4));
        assert!(summary.culled > 0);
        // 800 px + 2 * 200 px margin at 10 px per unit, open interval.
        assert_eq!(summary.samples / 2 - summary.culled, 119);
    }

    /// A curve whose tangent vanishes at whole parameters.
    struct Stalling;

    impl CurveSource for Stalling {
        fn max_parameter(&self) -> f64 {
            4.0
        }

        fn segment_count(&self) -> usize {
            4
        }

        fn point_at(&self, t: f64) -> Result<Point2> {
            Ok(Point2::new(t, 0.0))
        }

        fn tangent_at(&self, t: f64) -> Result<Vector2> {
            if t.fract() == 0.0 {
                Ok(Vector2::zeros())
            } else {
                Ok(Vector2::new(1.0, 0.0))
            }
        }

        fn segment_point_at(&self, segment: usize, local_t: f64) -> Result<Point2> {
            #[allow(clippy::cast_precision_loss)]
            let t = segment as f64 + local_t;
            self.point_at(t)
        }
    }

    #[test]
    fn zero_tangent_samples_are_skipped() {
        let config = RoadConfig {
            quality: RenderQuality::new(true, 0.5, 200.0).unwrap(),
            ..RoadConfig::default()
        };
        let (list, summary) = render(&Stalling, &config);
        // t = 0, 1, 2, 3 skipped in both passes.
        assert_eq!(summary.skipped, 8);
        for cmd in list.commands() {
            if let crate::draw::DrawCommand::Line { from, to, .. } = cmd {
                assert!(from.0.is_finite() && from.1.is_finite());
                assert!(to.0.is_finite() && to.1.is_finite());
            }
        }
        // Kept samples are 1.0 apart, inside the connector guard.
        assert!(list.line_count(SURFACE_COLOR) > 0);
    }

    /// A curve that fails to evaluate past its midpoint.
    struct Broken;

    impl CurveSource for Broken {
        fn max_parameter(&self) -> f64 {
            2.0
        }

        fn segment_count(&self) -> usize {
            2
        }

        fn point_at(&self, t: f64) -> Result<Point2> {
            if t >= 1.0 {
                Err(GeometryError::NonFinite("point").into())
            } else {
                Ok(Point2::new(t, 0.0))
            }
        }

        fn tangent_at(&self, _t: f64) -> Result<Vector2> {
            Ok(Vector2::new(1.0, 0.0))
        }

        fn segment_point_at(&self, segment: usize, local_t: f64) -> Result<Point2> {
            #[allow(clippy::cast_precision_loss)]
            let t = segment as f64 + local_t;
            self.point_at(t)
        }
    }

    #[test]
    fn failing_evaluations_are_skipped() {
        let config = RoadConfig {
            quality: RenderQuality::new(true, 0.5, 200.0).unwrap(),
            ..RoadConfig::default()
        };
        let (_, summary) = render(&Broken, &config);
        assert_eq!(summary.samples, 8);
        assert_eq!(summary.skipped, 4);
    }

    #[test]
    fn coarse_steps_trip_the_connector_guard() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let spline = CatmullRom::closed(&square).unwrap();
        let camera = Camera::new(Point2::new(5.0, 5.0), 20.0, 800, 600);
        let minimap = Minimap::new(800, 600);

        let mut fine = DrawList::new();
        let fine_cfg = RoadConfig {
            quality: RenderQuality::new(true, 0.05, 200.0).unwrap(),
            ..RoadConfig::default()
        };
        RibbonView.render(&spline, &fine_cfg, &mut Frame::new(&camera, &minimap, &mut fine));

        let mut coarse = DrawList::new();
        let coarse_cfg = RoadConfig {
            quality: RenderQuality::new(true, 0.5, 200.0).unwrap(),
            ..RoadConfig::default()
        };
        RibbonView.render(&spline, &coarse_cfg, &mut Frame::new(&camera, &minimap, &mut coarse));

        assert!(fine.line_count(SURFACE_COLOR) > 0);
        // Half a segment is several world units, beyond the 1.5 unit guard.
        assert_eq!(coarse.line_count(SURFACE_COLOR), 0);
    }
}
