use super::LinearRegression;
use crate::dataset::Sample;
use crate::error::{RegressionError, Result};
use crate::preprocessing::PolynomialFeatures;
use crate::Vector;

/// Least squares fit of `y = β₀ + β₁x + … + β_d x^d` over a single predictor.
#[derive(Clone, Debug)]
pub struct PolynomialRegression {
    features: PolynomialFeatures,
    model: LinearRegression,
}

impl PolynomialRegression {
    pub fn new(degree: usize) -> Self {
        Self {
            features: PolynomialFeatures::new(degree),
            model: LinearRegression::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.features.degree()
    }

    pub fn fit(&mut self, samples: &[Sample]) -> Result<()> {
        let (x, y) = split(samples);
        self.model.fit(&self.features.transform(&x), &y)
    }

    /// Coefficients of `x, x², …` in ascending power order.
    pub fn coefficients(&self) -> Option<&Vector> {
        self.model.coefficients.as_ref()
    }

    pub fn intercept(&self) -> Option<f64> {
        self.model.intercept
    }

    pub fn predict(&self, x: &Vector) -> Result<Vector> {
        self.model.predict(&self.features.transform(x))
    }

    pub fn score(&self, samples: &[Sample]) -> Result<f64> {
        let (x, y) = split(samples);
        self.model.score(&self.features.transform(&x), &y)
    }

    /// `points` evenly spaced points of the fitted curve over the x range of
    /// `samples`, for drawing a smooth line.
    pub fn curve(&self, samples: &[Sample], points: usize) -> Result<Vec<Sample>> {
        let min_x = samples.iter().map(|s| s.x).reduce(f64::min);
        let max_x = samples.iter().map(|s| s.x).reduce(f64::max);
        let (Some(min_x), Some(max_x)) = (min_x, max_x) else {
            return Ok(Vec::new());
        };
        if self.coefficients().is_none() {
            return Err(RegressionError::NotFitted);
        }

        let x = Vector::linspace(min_x, max_x, points);
        let y = self.predict(&x)?;
        Ok(x.iter().zip(y.iter()).map(|(&x, &y)| Sample::new(x, y)).collect())
    }
}

fn split(samples: &[Sample]) -> (Vector, Vector) {
    let x = samples.iter().map(|s| s.x).collect();
    let y = samples.iter().map(|s| s.y).collect();
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{cubic, generate_polynomial, CUBIC_COEFFICIENTS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_noiseless_cubic_recovers_coefficients() {
        let samples: Vec<Sample> = (0..50)
            .map(|i| {
                let x = (i as f64 - 25.0) / 5.0;
                Sample::new(x, cubic(x))
            })
            .collect();

        let mut model = PolynomialRegression::new(3);
        model.fit(&samples).unwrap();

        assert!((model.intercept().unwrap() - CUBIC_COEFFICIENTS[0]).abs() < 1e-8);
        for (fitted, expected) in model.coefficients().unwrap().iter().zip(&CUBIC_COEFFICIENTS[1..]) {
            assert!((fitted - expected).abs() < 1e-8, "{} vs {}", fitted, expected);
        }
        assert!((model.score(&samples).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_generated_data_beats_straight_line() {
        let mut rng = StdRng::seed_from_u64(8);
        let samples = generate_polynomial(50, &mut rng);

        let mut cubic_model = PolynomialRegression::new(3);
        cubic_model.fit(&samples).unwrap();
        let mut line = PolynomialRegression::new(1);
        line.fit(&samples).unwrap();

        let cubic_r2 = cubic_model.score(&samples).unwrap();
        assert!(cubic_r2 > 0.95, "cubic R² {}", cubic_r2);
        assert!(cubic_r2 > line.score(&samples).unwrap());
    }

    #[test]
    fn test_curve_spans_sample_range() {
        let samples: Vec<Sample> = (0..10).map(|i| Sample::new(i as f64, (i * i) as f64)).collect();

        let mut model = PolynomialRegression::new(2);
        model.fit(&samples).unwrap();

        let curve = model.curve(&samples, 5).unwrap();
        assert_eq!(curve.len(), 5);
        assert_eq!(curve[0].x, 0.0);
        assert_eq!(curve[4].x, 9.0);
        assert!((curve[2].y - 20.25).abs() < 1e-8);
    }

    #[test]
    fn test_curve_before_fit() {
        let samples = [Sample::new(0.0, 1.0), Sample::new(1.0, 2.0)];
        let model = PolynomialRegression::new(2);

        assert_eq!(model.curve(&samples, 3), Err(RegressionError::NotFitted));
        assert_eq!(model.curve(&[], 3), Ok(Vec::new()));
    }

    #[test]
    fn test_too_few_samples_for_degree() {
        let samples = [Sample::new(0.0, 1.0), Sample::new(1.0, 2.0), Sample::new(2.0, 0.0)];
        let mut model = PolynomialRegression::new(3);

        assert!(matches!(model.fit(&samples), Err(RegressionError::DegenerateInput(_))));
    }
}
