use crate::error::{Degeneracy, RegressionError, Result};
use crate::{Matrix, Vector};
use log::debug;
use ndarray::Axis;

/// Ordinary least squares over a feature matrix, solved through the normal
/// equations.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    fit_intercept: bool,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            fit_intercept: true,
        }
    }

    pub fn with_intercept(fit_intercept: bool) -> Self {
        Self {
            coefficients: None,
            intercept: None,
            fit_intercept,
        }
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(RegressionError::DimensionMismatch(format!(
                "{} samples in X but {} in y",
                x.nrows(),
                y.len()
            )));
        }

        let required = x.ncols() + usize::from(self.fit_intercept);
        if x.nrows() < required.max(1) {
            return Err(RegressionError::DegenerateInput(Degeneracy::TooFewSamples {
                n: x.nrows(),
                required: required.max(1),
            }));
        }

        let (coeffs, intercept) = if self.fit_intercept {
            self.fit_with_intercept(x, y)?
        } else {
            (solve_normal_equation(x, y)?, 0.0)
        };

        debug!(
            "fitted {} coefficients on {} samples, intercept {}",
            coeffs.len(),
            x.nrows(),
            intercept
        );
        self.coefficients = Some(coeffs);
        self.intercept = Some(intercept);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = self.coefficients.as_ref().ok_or(RegressionError::NotFitted)?;
        let intercept = self.intercept.unwrap_or(0.0);

        if x.ncols() != coeffs.len() {
            return Err(RegressionError::DimensionMismatch(format!(
                "Number of features in X ({}) doesn't match training data ({})",
                x.ncols(),
                coeffs.len()
            )));
        }

        Ok(x.dot(coeffs) + intercept)
    }

    /// R² of the predictions for `x` against `y`.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }

    fn fit_with_intercept(&self, x: &Matrix, y: &Vector) -> Result<(Vector, f64)> {
        // nrows >= 1 was checked in fit()
        let y_mean = y.mean().unwrap_or(0.0);
        let x_means = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Vector::zeros(x.ncols()));

        let mut x_centered = x.clone();
        for mut row in x_centered.axis_iter_mut(Axis(0)) {
            row -= &x_means;
        }

        let y_centered = y - y_mean;

        let coeffs = solve_normal_equation(&x_centered, &y_centered)?;
        let intercept = y_mean - coeffs.dot(&x_means);

        Ok((coeffs, intercept))
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Solves `XᵀX β = Xᵀy`.
///
/// The system is Jacobi-scaled to a unit diagonal first, so each feature is
/// judged against its own sum of squares rather than the largest one.
fn solve_normal_equation(x: &Matrix, y: &Vector) -> Result<Vector> {
    let xt = x.t();
    let xtx = xt.dot(x);

    let diag = xtx.diag();
    if diag.iter().any(|&v| v.is_nan() || v <= 0.0) {
        // an all-zero (or constant, once centred) column
        return Err(RegressionError::SingularMatrix);
    }
    let d = diag.mapv(|v| 1.0 / v.sqrt());

    let scaled = Matrix::from_shape_fn(xtx.raw_dim(), |(i, j)| xtx[(i, j)] * d[i] * d[j]);
    let z = solve_linear_system(&scaled, &(xt.dot(y) * &d))?;
    Ok(z * &d)
}

/// Gaussian elimination with partial pivoting on the augmented matrix `[a | b]`.
pub(crate) fn solve_linear_system(a: &Matrix, b: &Vector) -> Result<Vector> {
    let n = a.nrows();
    let mut aug = Matrix::zeros((n, n + 1));
    aug.slice_mut(ndarray::s![.., ..n]).assign(a);
    aug.column_mut(n).assign(b);

    let scale = a.iter().fold(0.0f64, |m, v| m.max(v.abs())).max(1.0);
    let tolerance = 1e-12 * scale;

    for i in 0..n {
        let max_row = (i..n)
            .max_by(|&p, &q| aug[(p, i)].abs().total_cmp(&aug[(q, i)].abs()))
            .unwrap_or(i);

        if aug[(max_row, i)].abs() < tolerance {
            return Err(RegressionError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..=n {
                aug.swap((i, j), (max_row, j));
            }
        }

        for k in (i + 1)..n {
            let factor = aug[(k, i)] / aug[(i, i)];
            for j in i..=n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        x[i] = aug[(i, n)];
        for j in (i + 1)..n {
            x[i] -= aug[(i, j)] * x[j];
        }
        x[i] /= aug[(i, i)];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, HouseRecord};
    use crate::generator::{generate_multiple, house_price, HOUSE_COEFFICIENTS};
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_linear_regression_simple() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let predictions = model.predict(&x).unwrap();

        for (pred, actual) in predictions.iter().zip(y.iter()) {
            assert!((pred - actual).abs() < 1e-10);
        }
    }

    #[test]
    fn test_linear_regression_without_intercept() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];

        let mut model = LinearRegression::with_intercept(false);
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        assert!((coeffs[0] - 2.0).abs() < 1e-10);
        assert_eq!(model.intercept.unwrap(), 0.0);
    }

    #[test]
    fn test_linear_regression_multivariate() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 5.0], [4.0, 3.0], [0.0, 1.0]];
        // y = 3 + 2*x1 - x2
        let y = x.map_axis(Axis(1), |row| 3.0 + 2.0 * row[0] - row[1]);

        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        assert!((coeffs[0] - 2.0).abs() < 1e-9);
        assert!((coeffs[1] + 1.0).abs() < 1e-9);
        assert!((model.intercept.unwrap() - 3.0).abs() < 1e-9);
        assert!((model.score(&x, &y).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_noiseless_houses_recover_coefficients() {
        let mut rng = StdRng::seed_from_u64(17);
        let houses: Vec<HouseRecord> = (0..40)
            .map(|_| {
                let size = rng.gen_range(500.0..3000.0);
                let bedrooms = rng.gen_range(1..=5u8);
                let age = rng.gen_range(0.0..50.0);
                let location = rng.gen_bool(0.5);
                HouseRecord {
                    size,
                    bedrooms,
                    age,
                    location,
                    price: house_price(size, bedrooms, age, location),
                }
            })
            .collect();
        let dataset = Dataset::from_houses(&houses);

        let mut model = LinearRegression::new();
        model.fit(&dataset.features, &dataset.labels).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        for (fitted, expected) in coeffs.iter().zip(HOUSE_COEFFICIENTS) {
            assert!((fitted - expected).abs() < 1e-6 * expected.abs().max(1.0));
        }
        assert!(model.intercept.unwrap().abs() < 1e-3);
    }

    #[test]
    fn test_generated_houses_fit() {
        let mut rng = StdRng::seed_from_u64(99);
        let dataset = Dataset::from_houses(&generate_multiple(100, &mut rng));

        let mut model = LinearRegression::new();
        model.fit(&dataset.features, &dataset.labels).unwrap();

        let size_coeff = model.coefficients.as_ref().unwrap()[0];
        assert!((size_coeff - 50.0).abs() < 5.0, "size coefficient {}", size_coeff);
        assert!(model.score(&dataset.features, &dataset.labels).unwrap() > 0.9);
    }

    #[test]
    fn test_collinear_features_are_singular() {
        let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0], [4.0, 8.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];

        let mut model = LinearRegression::new();
        assert_eq!(model.fit(&x, &y), Err(RegressionError::SingularMatrix));
        assert!(model.coefficients.is_none());
    }

    #[test]
    fn test_features_on_very_different_scales() {
        let mut rng = StdRng::seed_from_u64(31);
        let n = 100;
        let x = Matrix::from_shape_fn((n, 2), |(_, j)| {
            if j == 0 {
                rng.gen_range(500.0..3000.0)
            } else {
                rng.gen_range(0.0..0.001)
            }
        });
        let y = x.map_axis(Axis(1), |row| row[0] + 1000.0 * row[1]);

        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let coeffs = model.coefficients.as_ref().unwrap();
        assert!((coeffs[0] - 1.0).abs() < 1e-6, "coefficient {}", coeffs[0]);
        assert!((coeffs[1] - 1000.0).abs() < 1e-3, "coefficient {}", coeffs[1]);
        assert!(model.intercept.unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_constant_feature_is_singular() {
        let x = array![[1.0, 7.0], [2.0, 7.0], [3.0, 7.0], [4.0, 7.0]];
        let y = array![1.0, 2.0, 3.0, 5.0];

        let mut model = LinearRegression::new();
        assert_eq!(model.fit(&x, &y), Err(RegressionError::SingularMatrix));
    }

    #[test]
    fn test_too_few_samples() {
        let x = array![[1.0, 2.0], [2.0, 1.0]];
        let y = array![1.0, 2.0];

        let mut model = LinearRegression::new();
        assert!(matches!(
            model.fit(&x, &y),
            Err(RegressionError::DegenerateInput(Degeneracy::TooFewSamples { n: 2, required: 3 }))
        ));
    }

    #[test]
    fn test_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = LinearRegression::new();

        assert_eq!(model.predict(&x), Err(RegressionError::NotFitted));
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = LinearRegression::new();
        assert!(matches!(model.fit(&x, &y), Err(RegressionError::DimensionMismatch(_))));
    }

    #[test]
    fn test_solve_linear_system() {
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let b = array![3.0, 5.0];

        let x = solve_linear_system(&a, &b).unwrap();
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }
}
