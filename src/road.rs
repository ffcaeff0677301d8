use tracing::warn;

use crate::config::RoadConfig;
use crate::draw::Color;
use crate::error::Result;
use crate::geometry::CurveSource;
use crate::math::Point2;
use crate::operations::query::NearestParameter;
use crate::render::{Frame, PassSummary, RoadRenderer};

/// A drivable road: a read-only centerline plus everything needed to draw it
/// and to answer "is this on the road, and where".
#[derive(Debug, Clone)]
pub struct Road<C> {
    curve: C,
    renderer: RoadRenderer,
}

impl<C: CurveSource> Road<C> {
    /// Creates a road over `curve`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn new(curve: C, config: RoadConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            curve,
            renderer: RoadRenderer::new(config),
        })
    }

    /// Returns the centerline.
    #[must_use]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RoadConfig {
        self.renderer.config()
    }

    /// Returns a mutable reference to the configuration. It is re-validated
    /// on every draw and every query.
    pub fn config_mut(&mut self) -> &mut RoadConfig {
        self.renderer.config_mut()
    }

    /// Draws the road for one frame.
    ///
    /// # Errors
    ///
    /// See [`RoadRenderer::draw`].
    pub fn draw(&self, frame: &mut Frame<'_>) -> Result<PassSummary> {
        self.renderer.draw(&self.curve, frame)
    }

    /// Draws a marker such as the player's position on the minimap.
    pub fn draw_minimap_marker(&self, frame: &mut Frame<'_>, point: &Point2, color: Color) {
        self.renderer.draw_minimap_marker(frame, point, color);
    }

    /// Returns a curve parameter whose sample lies within the bounds width of
    /// `point`, or `Ok(None)` if `point` is off the road.
    ///
    /// With the default first-match strategy this is the first such
    /// parameter in curve order, not necessarily the closest one.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration was made invalid through
    /// [`Road::config_mut`], for example a non-positive query step.
    pub fn nearest_parameter(&self, point: &Point2) -> Result<Option<f64>> {
        let config = self.config();
        if let Err(err) = config.validate() {
            warn!(%err, "road query rejected");
            return Err(err);
        }
        Ok(
            NearestParameter::new(*point, config.bounds_width, config.query_step)
                .with_strategy(config.search)
                .execute(&self.curve),
        )
    }

    /// Returns whether `point` is on the road.
    ///
    /// # Errors
    ///
    /// See [`Road::nearest_parameter`].
    pub fn in_bounds(&self, point: &Point2) -> Result<bool> {
        Ok(self.nearest_parameter(point)?.is_some())
    }
}
