use crate::error::{ConfigError, Result};
use crate::operations::query::SearchStrategy;

/// Per-frame render quality preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderQuality {
    smooth_edges: bool,
    road_detail: f64,
    out_of_bounds_hide: f64,
}

impl RenderQuality {
    /// Coarse sampling, hard stroke ends, tight culling.
    pub const LOW: Self = Self {
        smooth_edges: false,
        road_detail: 0.1,
        out_of_bounds_hide: 50.0,
    };

    /// Default preset.
    pub const MEDIUM: Self = Self {
        smooth_edges: true,
        road_detail: 0.05,
        out_of_bounds_hide: 100.0,
    };

    /// Fine sampling, generous culling margin.
    pub const HIGH: Self = Self {
        smooth_edges: true,
        road_detail: 0.02,
        out_of_bounds_hide: 200.0,
    };

    /// Creates a custom preset.
    ///
    /// # Errors
    ///
    /// Returns an error if `road_detail` is not a positive finite number or
    /// `out_of_bounds_hide` is negative or non-finite.
    pub fn new(smooth_edges: bool, road_detail: f64, out_of_bounds_hide: f64) -> Result<Self> {
        let quality = Self {
            smooth_edges,
            road_detail,
            out_of_bounds_hide,
        };
        quality.validate()?;
        Ok(quality)
    }

    /// Whether strokes use round caps and bevel/round joins.
    #[must_use]
    pub fn has_smooth_edges(&self) -> bool {
        self.smooth_edges
    }

    /// Parameter step between road samples. Larger is coarser and faster.
    #[must_use]
    pub fn road_detail(&self) -> f64 {
        self.road_detail
    }

    /// Screen margin in pixels outside which road samples are not drawn.
    #[must_use]
    pub fn out_of_bounds_hide(&self) -> f64 {
        self.out_of_bounds_hide
    }

    fn validate(&self) -> Result<()> {
        if !(self.road_detail > 0.0 && self.road_detail.is_finite()) {
            return Err(invalid(format!(
                "road detail must be positive, got {}",
                self.road_detail
            )));
        }
        if !(self.out_of_bounds_hide >= 0.0 && self.out_of_bounds_hide.is_finite()) {
            return Err(invalid(format!(
                "out-of-bounds hide margin must be non-negative, got {}",
                self.out_of_bounds_hide
            )));
        }
        Ok(())
    }
}

impl Default for RenderQuality {
    fn default() -> Self {
        Self::MEDIUM
    }
}

/// Everything the road renderer and queries read, fixed for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadConfig {
    /// Production ribbon rendering when `true`, debug point/vector view otherwise.
    pub draw_road: bool,
    pub quality: RenderQuality,
    /// Distance from the centerline to each road edge, in world units.
    pub half_width: f64,
    /// Distance from a sampled centerline point within which a position
    /// counts as on the road.
    pub bounds_width: f64,
    /// Number of parallel strands in the road surface fill.
    pub fan_size: usize,
    /// Connectors longer than this on either axis (world units) are not
    /// drawn. Hides seams where the curve jumps between samples.
    pub max_connector_delta: f64,
    /// Screen margin in pixels for per-segment and per-point culling.
    pub fine_cull_margin: f64,
    /// Parameter step of the debug view.
    pub debug_sample_step: f64,
    /// Local parameter step of the nearest-parameter search.
    pub query_step: f64,
    pub search: SearchStrategy,
    /// Road stroke width in world units.
    pub line_width: f64,
    /// Debug vector stroke width in world units.
    pub debug_line_width: f64,
    /// Minimap trace width in pixels.
    pub minimap_line_width: f64,
    /// Minimap segments shorter than a pixel are dropped while the quality's
    /// hide margin is below this.
    pub minimap_decimation_hide_threshold: f64,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            draw_road: true,
            quality: RenderQuality::default(),
            half_width: 1.0,
            bounds_width: 1.2,
            fan_size: 18,
            max_connector_delta: 1.5,
            fine_cull_margin: 20.0,
            debug_sample_step: 0.1,
            query_step: 0.1,
            search: SearchStrategy::FirstMatch,
            line_width: 0.25,
            debug_line_width: 0.1,
            minimap_line_width: 10.0,
            minimap_decimation_hide_threshold: 150.0,
        }
    }
}

impl RoadConfig {
    /// Checks every field before a draw pass or query runs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        self.quality.validate()?;
        positive("half width", self.half_width)?;
        positive("bounds width", self.bounds_width)?;
        positive("max connector delta", self.max_connector_delta)?;
        positive("debug sample step", self.debug_sample_step)?;
        positive("line width", self.line_width)?;
        positive("debug line width", self.debug_line_width)?;
        positive("minimap line width", self.minimap_line_width)?;
        if self.query_step > 1.0 {
            return Err(invalid(format!(
                "query step must not exceed 1, got {}",
                self.query_step
            )));
        }
        positive("query step", self.query_step)?;
        if self.fan_size < 2 {
            return Err(invalid(format!(
                "fan size must be at least 2, got {}",
                self.fan_size
            )));
        }
        if !(self.fine_cull_margin >= 0.0 && self.fine_cull_margin.is_finite()) {
            return Err(invalid(format!(
                "fine cull margin must be non-negative, got {}",
                self.fine_cull_margin
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

fn invalid(msg: String) -> crate::error::RoadError {
    ConfigError::InvalidParameter(msg).into()
}
