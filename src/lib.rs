pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod generator;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;
pub mod report;

pub use config::DemoConfig;
pub use dataset::{Dataset, DatasetKind, Datasets, HouseRecord, Sample};
pub use error::{Degeneracy, RegressionError, Result};
pub use linear_model::{
    LinearRegression, PolynomialRegression, RegressionResult, simple_linear_regression,
};
pub use preprocessing::PolynomialFeatures;
pub use report::Report;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
