use crate::config::DemoConfig;
use crate::error::{RegressionError, Result};
use crate::generator;
use crate::{Matrix, Vector};
use rand::Rng;
use std::fmt;

/// A single (x, y) observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// One row of the house price dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HouseRecord {
    /// Living area in square feet.
    pub size: f64,
    pub bedrooms: u8,
    /// Age in years.
    pub age: f64,
    /// `true` for a good location.
    pub location: bool,
    pub price: f64,
}

impl HouseRecord {
    pub const FEATURE_NAMES: [&'static str; 4] = ["size", "bedrooms", "age", "location"];

    pub fn features(&self) -> [f64; 4] {
        [
            self.size,
            self.bedrooms as f64,
            self.age,
            if self.location { 1.0 } else { 0.0 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Simple,
    Multiple,
    Polynomial,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [Self::Simple, Self::Multiple, Self::Polynomial];

    pub fn key(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Multiple => "multiple",
            Self::Polynomial => "polynomial",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Simple => "Simple Linear Regression",
            Self::Multiple => "Multiple Linear Regression",
            Self::Polynomial => "Polynomial Regression",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Simple => "Single predictor variable (x) predicting outcome (y)",
            Self::Multiple => "Multiple predictors: House Size, Bedrooms, Age, Location → Price",
            Self::Polynomial => "Non-linear relationship using polynomial features",
        }
    }

    pub fn csv_file_name(self) -> String {
        format!("{}_regression_data.csv", self.key())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The three generated datasets. Built once and only borrowed afterwards.
#[derive(Clone, Debug, Default)]
pub struct Datasets {
    pub simple: Vec<Sample>,
    pub multiple: Vec<HouseRecord>,
    pub polynomial: Vec<Sample>,
}

impl Datasets {
    pub fn generate<R: Rng + ?Sized>(config: &DemoConfig, rng: &mut R) -> Self {
        Self {
            simple: generator::generate_simple(config.count(DatasetKind::Simple), rng),
            multiple: generator::generate_multiple(config.count(DatasetKind::Multiple), rng),
            polynomial: generator::generate_polynomial(config.count(DatasetKind::Polynomial), rng),
        }
    }

    pub fn len(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Simple => self.simple.len(),
            DatasetKind::Multiple => self.multiple.len(),
            DatasetKind::Polynomial => self.polynomial.len(),
        }
    }

    pub fn is_empty(&self, kind: DatasetKind) -> bool {
        self.len(kind) == 0
    }
}

/// Feature matrix plus target vector, the shape the multi-variable models consume.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(RegressionError::DimensionMismatch(format!(
                "{} feature rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }

        Ok(Self { features, labels })
    }

    /// Single-feature dataset with `x` as the only column.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let features = Matrix::from_shape_fn((samples.len(), 1), |(i, _)| samples[i].x);
        let labels = samples.iter().map(|s| s.y).collect::<Vector>();
        Self { features, labels }
    }

    /// Columns follow [`HouseRecord::FEATURE_NAMES`], labels are prices.
    pub fn from_houses(houses: &[HouseRecord]) -> Self {
        let features = Matrix::from_shape_fn((houses.len(), 4), |(i, j)| houses[i].features()[j]);
        let labels = houses.iter().map(|h| h.price).collect::<Vector>();
        Self { features, labels }
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}
