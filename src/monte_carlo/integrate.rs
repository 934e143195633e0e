//! Hit-or-miss estimation of definite integrals.
//!
//! Draws uniform points from a bounding box over the integration interval and
//! estimates the integral from the fraction of points that land under the
//! curve.

use super::rng::MonteCarloRng;
use crate::error::LinealError;

/// Hit-or-miss estimator for the definite integral of a non-negative
/// function.
///
/// Points are drawn uniformly from the `[lo, hi] x [0, height]` box; the
/// estimate is the box area scaled by the fraction of points below the
/// curve, so `height` must bound the function on the interval for the
/// estimate to converge to the integral.
///
/// # Examples
///
/// ```
/// use lineal::monte_carlo::HitOrMissIntegrator;
///
/// // The integral of 0.5x^3 - x^2 + 1 over [0, 2] is 4/3.
/// let integrator = HitOrMissIntegrator::new(0.0, 2.0, 1.0).with_seed(42);
/// let estimate = integrator
///     .integrate(|x| 0.5 * x.powi(3) - x.powi(2) + 1.0, 20_000)
///     .unwrap();
/// assert!((estimate.value - 4.0 / 3.0).abs() < 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct HitOrMissIntegrator {
    lo: f64,
    hi: f64,
    height: f64,
    seed: Option<u64>,
}

impl HitOrMissIntegrator {
    /// Creates an estimator for `[lo, hi]` with curve values bounded by
    /// `height`.
    #[must_use]
    pub fn new(lo: f64, hi: f64, height: f64) -> Self {
        Self {
            lo,
            hi,
            height,
            seed: None,
        }
    }

    /// Fixes the sampling seed so estimates are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Estimates the integral of `f` from `samples` uniform points.
    ///
    /// Each call draws a fresh sequence from the configured seed.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::InvalidParameter`] for an empty sample budget,
    /// an inverted interval, or a non-positive height.
    pub fn integrate<F>(&self, f: F, samples: usize) -> Result<IntegralEstimate, LinealError>
    where
        F: Fn(f64) -> f64,
    {
        self.validate(samples)?;

        let mut rng = MonteCarloRng::from_seed(self.seed);
        let mut hits = 0usize;
        for _ in 0..samples {
            let x = rng.uniform_in(self.lo, self.hi);
            let y = rng.uniform_in(0.0, self.height);
            if f(x) > y {
                hits += 1;
            }
        }

        let box_area = (self.hi - self.lo) * self.height;
        Ok(IntegralEstimate {
            value: box_area * hits as f64 / samples as f64,
            hits,
            samples,
        })
    }

    /// Absolute estimation error against `exact` at each sample size.
    ///
    /// Produces the series the estimate error traces as the budget grows,
    /// one point per entry of `sizes`.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::InvalidParameter`] under the same conditions
    /// as [`Self::integrate`], including a zero entry in `sizes`.
    pub fn error_curve<F>(
        &self,
        f: F,
        exact: f64,
        sizes: &[usize],
    ) -> Result<Vec<ErrorPoint>, LinealError>
    where
        F: Fn(f64) -> f64,
    {
        sizes
            .iter()
            .map(|&samples| {
                let estimate = self.integrate(&f, samples)?;
                Ok(ErrorPoint {
                    samples,
                    error: (estimate.value - exact).abs(),
                })
            })
            .collect()
    }

    fn validate(&self, samples: usize) -> Result<(), LinealError> {
        if self.hi <= self.lo {
            return Err(LinealError::InvalidParameter {
                param: "interval".to_string(),
                value: format!("[{}, {}]", self.lo, self.hi),
                constraint: "hi > lo".to_string(),
            });
        }
        if self.height <= 0.0 {
            return Err(LinealError::InvalidParameter {
                param: "height".to_string(),
                value: self.height.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        if samples == 0 {
            return Err(LinealError::InvalidParameter {
                param: "samples".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Outcome of a hit-or-miss estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralEstimate {
    /// Estimated value of the integral.
    pub value: f64,
    /// Points that landed below the curve.
    pub hits: usize,
    /// Total points drawn.
    pub samples: usize,
}

impl IntegralEstimate {
    /// Fraction of points that landed below the curve.
    #[must_use]
    pub fn hit_fraction(&self) -> f64 {
        self.hits as f64 / self.samples as f64
    }
}

/// Absolute estimation error observed at one sample size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorPoint {
    /// Points drawn for this estimate.
    pub samples: usize,
    /// Absolute difference from the exact value.
    pub error: f64,
}

/// Evenly spaced sample counts from `lo` to `hi` inclusive.
///
/// Counts are rounded to the nearest integer, so consecutive entries may
/// repeat when `num` exceeds the span. Returns an empty list when `num` is 0
/// or the bounds are inverted.
#[must_use]
pub fn sample_sizes(lo: usize, hi: usize, num: usize) -> Vec<usize> {
    if num == 0 || hi < lo {
        return Vec::new();
    }
    if num == 1 {
        return vec![lo];
    }

    let step = (hi - lo) as f64 / (num - 1) as f64;
    (0..num)
        .map(|i| lo + (step * i as f64).round() as usize)
        .collect()
}

#[cfg(test)]
#[path = "integrate_tests.rs"]
mod tests;
