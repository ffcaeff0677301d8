use crate::geometry::CurveSource;
use crate::math::Point2;

/// How [`NearestParameter`] picks among samples within the bounds radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Return the first sample, in parameter order, that lies within the
    /// bounds radius. This is *a* nearby parameter, not the closest one.
    #[default]
    FirstMatch,
    /// Visit every sample and return the one closest to the query point.
    Closest,
}

/// Maps a world position back to a curve parameter.
///
/// Each segment is sampled at local parameters `0, step, 2 * step, ...`
/// below 1. A sample matches when its squared distance to the query point is
/// strictly below `bounds_width²`. Cost is `segments / step` evaluations at
/// most, whatever the result. Samples whose evaluation fails are skipped.
#[derive(Debug, Clone, Copy)]
pub struct NearestParameter {
    point: Point2,
    bounds_width: f64,
    step: f64,
    strategy: SearchStrategy,
}

impl NearestParameter {
    /// Creates a new first-match query with the given bounds radius and local
    /// parameter step.
    #[must_use]
    pub fn new(point: Point2, bounds_width: f64, step: f64) -> Self {
        Self {
            point,
            bounds_width,
            step,
            strategy: SearchStrategy::FirstMatch,
        }
    }

    /// Selects the search strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Executes the query, returning `segment + local_t` of a matching
    /// sample, or `None` if the point is not within the bounds radius of any
    /// sample.
    ///
    /// A non-positive or non-finite step finds nothing.
    #[must_use]
    pub fn execute<C: CurveSource + ?Sized>(&self, curve: &C) -> Option<f64> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return None;
        }
        let limit = self.bounds_width * self.bounds_width;
        let mut best: Option<(f64, f64)> = None;

        for segment in 0..curve.segment_count() {
            for local_t in crate::tessellation::parameter_samples(1.0, self.step) {
                let Ok(p) = curve.segment_point_at(segment, local_t) else {
                    continue;
                };
                let dist_sq = (self.point - p).norm_squared();
                if dist_sq < limit {
                    #[allow(clippy::cast_precision_loss)]
                    let t = segment as f64 + local_t;
                    match self.strategy {
                        SearchStrategy::FirstMatch => return Some(t),
                        SearchStrategy::Closest => {
                            if best.is_none_or(|(_, d)| dist_sq < d) {
                                best = Some((t, dist_sq));
                            }
                        }
                    }
                }
            }
        }

        best.map(|(t, _)| t)
    }
}
