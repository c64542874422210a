use crate::dataset::Sample;
use crate::error::{Degeneracy, RegressionError, Result};
use log::debug;

/// Best-fit line for a sequence of samples and its goodness of fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, at most 1.
    pub r_squared: f64,
}

impl RegressionResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Endpoints of the fitted line across the x range of `samples`.
    pub fn line_over(&self, samples: &[Sample]) -> Option<[Sample; 2]> {
        let min_x = samples.iter().map(|s| s.x).reduce(f64::min)?;
        let max_x = samples.iter().map(|s| s.x).reduce(f64::max)?;

        Some([
            Sample::new(min_x, self.predict(min_x)),
            Sample::new(max_x, self.predict(max_x)),
        ])
    }
}

fn degenerate(reason: Degeneracy) -> RegressionError {
    RegressionError::DegenerateInput(reason)
}

/// Closed-form ordinary least squares over (x, y) pairs.
///
/// Fails with [`RegressionError::DegenerateInput`] when there are fewer than
/// two samples, when every x is identical (no unique slope) or when every y
/// is identical (R² would be 0/0).
///
/// No centring or other conditioning is applied; inputs with huge x
/// magnitudes or near-zero x variance lose precision.
pub fn simple_linear_regression(samples: &[Sample]) -> Result<RegressionResult> {
    let n = samples.len();
    if n < 2 {
        return Err(degenerate(Degeneracy::TooFewSamples { n, required: 2 }));
    }

    let first = samples[0];
    if samples.iter().all(|s| s.x == first.x) {
        return Err(degenerate(Degeneracy::ZeroXVariance));
    }
    if samples.iter().all(|s| s.y == first.y) {
        return Err(degenerate(Degeneracy::ZeroYVariance));
    }

    let (sum_x, sum_y, sum_xy, sum_xx) = samples.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), s| (sx + s.x, sy + s.y, sxy + s.x * s.y, sxx + s.x * s.x),
    );
    let n = n as f64;

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(degenerate(Degeneracy::ZeroXVariance));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let total_ss: f64 = samples.iter().map(|s| (s.y - mean_y).powi(2)).sum();
    if total_ss == 0.0 {
        return Err(degenerate(Degeneracy::ZeroYVariance));
    }
    let residual_ss: f64 = samples
        .iter()
        .map(|s| (s.y - (slope * s.x + intercept)).powi(2))
        .sum();

    let result = RegressionResult {
        slope,
        intercept,
        r_squared: 1.0 - residual_ss / total_ss,
    };
    debug!("fitted line over {} samples: {:?}", samples.len(), result);
    Ok(result)
}
