//! Per-frame road drawing.
//!
//! A [`RoadRenderer`] picks one [`RenderMode`] per draw call from its
//! [`RoadConfig`]: [`RibbonView`] for the production road or [`DebugView`]
//! for the sample/tangent visualization. Both issue screen-space draw calls
//! through a [`Frame`], which pairs the main camera, the minimap and the
//! target surface.

mod debug_view;
mod ribbon_view;
pub mod segments;

pub use debug_view::DebugView;
pub use ribbon_view::RibbonView;

use tracing::{debug, warn};

use crate::config::RoadConfig;
use crate::draw::{Color, DrawSurface, StrokeStyle};
use crate::error::Result;
use crate::geometry::CurveSource;
use crate::math::Point2;
use crate::view::Viewport;

/// Radius of a minimap marker in pixels.
pub const MINIMAP_MARKER_RADIUS: f64 = 10.0;

/// The views and surface a single draw call renders into.
pub struct Frame<'a> {
    pub camera: &'a dyn Viewport,
    pub minimap: &'a dyn Viewport,
    pub surface: &'a mut dyn DrawSurface,
}

impl<'a> Frame<'a> {
    /// Bundles a main camera, a minimap and a draw surface.
    #[must_use]
    pub fn new(
        camera: &'a dyn Viewport,
        minimap: &'a dyn Viewport,
        surface: &'a mut dyn DrawSurface,
    ) -> Self {
        Self {
            camera,
            minimap,
            surface,
        }
    }
}

/// What one draw call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Curve parameters visited, over every pass of the mode.
    pub samples: usize,
    /// Samples rejected by the coarse visibility filter.
    pub culled: usize,
    /// Samples dropped because the curve evaluated to unusable geometry.
    pub skipped: usize,
    /// Line draw calls issued.
    pub lines: usize,
    /// Circle draw calls issued.
    pub points: usize,
}

/// One way of drawing the road.
pub trait RenderMode {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the stroke to install for this mode, or `None` to keep the
    /// surface's current stroke.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured widths project to an unusable
    /// stroke width.
    fn stroke(&self, config: &RoadConfig, camera: &dyn Viewport) -> Result<Option<StrokeStyle>>;

    /// Runs the sampling passes and issues draw calls. Never fails: unusable
    /// samples are skipped.
    fn render(
        &self,
        curve: &dyn CurveSource,
        config: &RoadConfig,
        frame: &mut Frame<'_>,
    ) -> PassSummary;
}

/// Draws a road centerline as a ribbon on the main view plus a minimap trace.
#[derive(Debug, Clone, Default)]
pub struct RoadRenderer {
    config: RoadConfig,
}

impl RoadRenderer {
    /// Creates a renderer reading the given configuration.
    #[must_use]
    pub fn new(config: RoadConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RoadConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut RoadConfig {
        &mut self.config
    }

    /// Returns the mode selected by the current configuration.
    #[must_use]
    pub fn mode(&self) -> &'static dyn RenderMode {
        if self.config.draw_road {
            &RibbonView
        } else {
            &DebugView
        }
    }

    /// Draws `curve` into `frame` with the configured mode.
    ///
    /// The surface's stroke style is restored before returning.
    ///
    /// # Errors
    ///
    /// Returns an error, before any draw call is issued, if the configuration
    /// is invalid (for example a non-positive road detail) or the stroke width
    /// projects to a non-positive value.
    pub fn draw(&self, curve: &dyn CurveSource, frame: &mut Frame<'_>) -> Result<PassSummary> {
        self.draw_with(self.mode(), curve, frame)
    }

    /// Draws `curve` with an explicit mode, ignoring `draw_road`.
    ///
    /// # Errors
    ///
    /// See [`RoadRenderer::draw`].
    pub fn draw_with(
        &self,
        mode: &dyn RenderMode,
        curve: &dyn CurveSource,
        frame: &mut Frame<'_>,
    ) -> Result<PassSummary> {
        if let Err(err) = self.config.validate() {
            warn!(%err, mode = mode.name(), "road draw rejected");
            return Err(err);
        }
        let stroke = mode.stroke(&self.config, frame.camera)?;

        let previous = frame.surface.stroke_style();
        if let Some(style) = stroke {
            frame.surface.set_stroke_style(style);
        }
        let summary = mode.render(curve, &self.config, frame);
        frame.surface.set_stroke_style(previous);

        debug!(
            mode = mode.name(),
            samples = summary.samples,
            culled = summary.culled,
            skipped = summary.skipped,
            lines = summary.lines,
            points = summary.points,
            "road pass complete"
        );
        Ok(summary)
    }

    /// Draws a marker for `point` on the minimap.
    pub fn draw_minimap_marker(&self, frame: &mut Frame<'_>, point: &Point2, color: Color) {
        let (x, y) = frame.minimap.to_screen(point);
        frame.surface.draw_circle(x, y, color, MINIMAP_MARKER_RADIUS);
    }
}
