mod offset_ribbon;

pub use offset_ribbon::{OffsetRibbon, RibbonSample};

/// Returns the sampling parameters `0, step, 2 * step, ...` strictly below `max`.
///
/// Parameters are computed as `i * step` rather than accumulated, so they are
/// strictly increasing and do not drift. A non-positive or non-finite `step`
/// yields an empty sequence; callers validate the step before sampling.
pub fn parameter_samples(max: f64, step: f64) -> impl Iterator<Item = f64> {
    let valid = step > 0.0 && step.is_finite() && max.is_finite();
    (0u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(move |&t| valid && t < max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_steps() {
        let ts: Vec<f64> = parameter_samples(3.0, 1.0).collect();
        assert_eq!(ts, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn step_equal_to_max_gives_single_sample() {
        let ts: Vec<f64> = parameter_samples(3.0, 3.0).collect();
        assert_eq!(ts, vec![0.0]);
    }

    #[test]
    fn fractional_steps_stay_below_max() {
        let ts: Vec<f64> = parameter_samples(1.0, 0.1).collect();
        assert_eq!(ts.len(), 10);
        assert!(ts.windows(2).all(|w| w[1] > w[0]));
        assert!(ts.iter().all(|&t| t < 1.0));
    }

    #[test]
    fn invalid_step_is_empty() {
        assert_eq!(parameter_samples(3.0, 0.0).count(), 0);
        assert_eq!(parameter_samples(3.0, -0.5).count(), 0);
        assert_eq!(parameter_samples(3.0, f64::NAN).count(), 0);
    }

    #[test]
    fn empty_domain_is_empty() {
        assert_eq!(parameter_samples(0.0, 0.1).count(), 0);
    }
}
