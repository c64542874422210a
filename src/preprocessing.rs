use crate::{Matrix, Vector};

/// Expands a single predictor into its powers `x, x², …, x^degree`.
///
/// The constant column is left out; [`crate::LinearRegression`] fits the
/// intercept itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolynomialFeatures {
    degree: usize,
}

impl PolynomialFeatures {
    pub fn new(degree: usize) -> Self {
        if degree == 0 {
            panic!("degree must be >= 1, got {}", degree);
        }
        Self { degree }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn transform(&self, x: &Vector) -> Matrix {
        Matrix::from_shape_fn((x.len(), self.degree), |(i, j)| x[i].powi(j as i32 + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_polynomial_features() {
        let x = array![2.0, -1.0, 0.5];
        let expanded = PolynomialFeatures::new(3).transform(&x);

        assert_eq!(
            expanded,
            array![[2.0, 4.0, 8.0], [-1.0, 1.0, -1.0], [0.5, 0.25, 0.125]]
        );
    }

    #[test]
    fn test_degree_one_is_identity() {
        let x = array![1.0, 2.0, 3.0];
        let expanded = PolynomialFeatures::new(1).transform(&x);

        assert_eq!(expanded.shape(), &[3, 1]);
        assert_eq!(expanded.column(0), x);
    }

    #[test]
    fn test_zero_degree_panics() {
        std::panic::catch_unwind(|| {
            PolynomialFeatures::new(0);
        })
        .expect_err("Should panic on zero degree");
    }
}
