//! Error types shared by the estimators, metrics and configuration.

use std::fmt;

/// Why an input sequence cannot be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// Fewer samples than the model has parameters.
    TooFewSamples { n: usize, required: usize },
    /// Every x value is identical, the slope denominator is zero.
    ZeroXVariance,
    /// Every y value is identical, R² is undefined.
    ZeroYVariance,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSamples { n, required } => {
                write!(f, "{n} samples, at least {required} required")
            }
            Self::ZeroXVariance => write!(f, "x values have zero variance"),
            Self::ZeroYVariance => write!(f, "y values have zero variance, R² is undefined"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegressionError {
    /// The input makes the closed-form solution mathematically undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(Degeneracy),

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// XᵀX has no usable pivot; the features are collinear.
    #[error("normal equations are singular or nearly singular")]
    SingularMatrix,

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RegressionError>;
