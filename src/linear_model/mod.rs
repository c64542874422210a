//! Least squares models.
//!
//! - [`simple_linear_regression`]: closed-form line through (x, y) samples
//! - [`LinearRegression`]: ordinary least squares over a feature matrix
//! - [`PolynomialRegression`]: power expansion of one predictor plus OLS
//!
//! # Examples
//!
//! ## Simple Linear Regression
//! ```rust
//! use regression_lab::{simple_linear_regression, Sample};
//!
//! let samples = [Sample::new(0.0, 10.0), Sample::new(1.0, 12.5), Sample::new(2.0, 15.0)];
//! let fit = simple_linear_regression(&samples).unwrap();
//! assert!((fit.slope - 2.5).abs() < 1e-9);
//! ```
//!
//! ## Multiple Linear Regression
//! ```rust
//! use regression_lab::LinearRegression;
//! use ndarray::array;
//!
//! let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 5.0], [4.0, 3.0]];
//! let y = array![2.0, 6.0, 4.0, 8.0];
//!
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```

mod linear_regression;
mod polynomial;
mod simple;

pub use linear_regression::LinearRegression;
pub use polynomial::PolynomialRegression;
pub use simple::{RegressionResult, simple_linear_regression};
