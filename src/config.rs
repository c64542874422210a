use crate::dataset::DatasetKind;
use crate::error::{RegressionError, Result};

/// Settings for one demo run: how much data to generate, how to seed it and
/// how many rows to preview.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    simple_count: usize,
    multiple_count: usize,
    polynomial_count: usize,
    seed: Option<u64>,
    preview_rows: usize,
}

impl DemoConfig {
    pub const DEFAULT_PREVIEW_ROWS: usize = 10;

    pub fn new() -> Self {
        Self {
            simple_count: 50,
            multiple_count: 100,
            polynomial_count: 50,
            seed: None,
            preview_rows: Self::DEFAULT_PREVIEW_ROWS,
        }
    }

    pub fn count_for(mut self, kind: DatasetKind, count: usize) -> Self {
        match kind {
            DatasetKind::Simple => self.simple_count = count,
            DatasetKind::Multiple => self.multiple_count = count,
            DatasetKind::Polynomial => self.polynomial_count = count,
        }
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    pub fn count(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Simple => self.simple_count,
            DatasetKind::Multiple => self.multiple_count,
            DatasetKind::Polynomial => self.polynomial_count,
        }
    }

    pub fn seed_value(&self) -> Option<u64> {
        self.seed
    }

    pub fn preview_row_count(&self) -> usize {
        self.preview_rows
    }

    /// Smallest dataset the model for `kind` can be fitted on.
    pub fn min_count(kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Simple => 2,
            // four features plus intercept
            DatasetKind::Multiple => 5,
            // cubic plus intercept
            DatasetKind::Polynomial => 4,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for kind in DatasetKind::ALL {
            let count = self.count(kind);
            if count < Self::min_count(kind) {
                return Err(RegressionError::InvalidConfig(format!(
                    "{kind} dataset needs at least {} records, got {count}",
                    Self::min_count(kind)
                )));
            }
        }

        if self.preview_rows == 0 {
            return Err(RegressionError::InvalidConfig(
                "preview rows must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}
