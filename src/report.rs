//! Text summary of one example: fitted equation, goodness of fit and a
//! preview of the data behind it.

use crate::dataset::{Dataset, DatasetKind, Datasets, HouseRecord, Sample};
use crate::error::Result;
use crate::linear_model::{LinearRegression, PolynomialRegression, simple_linear_regression};
use log::debug;
use std::fmt;

const HOUSE_LABELS: [&str; 4] = ["Size", "Bedrooms", "Age", "Location"];
const POLYNOMIAL_DEGREE: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    Samples(Vec<Sample>),
    Houses(Vec<HouseRecord>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub kind: DatasetKind,
    pub equation: String,
    pub r_squared: f64,
    /// Endpoints of the fitted line, simple example only.
    pub line: Option<[Sample; 2]>,
    pub preview: Preview,
    pub total_records: usize,
    pub insights: Vec<String>,
}

impl Report {
    pub fn build(kind: DatasetKind, datasets: &Datasets, preview_rows: usize) -> Result<Self> {
        let (equation, r_squared, line, preview, insights) = match kind {
            DatasetKind::Simple => {
                let fit = simple_linear_regression(&datasets.simple)?;
                let equation = format!("y = {:.2}x{}", fit.slope, signed(fit.intercept, ""));
                let preview = Preview::Samples(head(&datasets.simple, preview_rows));
                let insights = vec![
                    "Simple linear regression finds the best straight line through data points"
                        .to_string(),
                    format!(
                        "R-squared of {:.3} means the model explains {:.1}% of the variance",
                        fit.r_squared,
                        fit.r_squared * 100.0
                    ),
                    format!(
                        "Each unit increase in X is associated with a {:.2} unit change in Y",
                        fit.slope
                    ),
                ];
                (equation, fit.r_squared, fit.line_over(&datasets.simple), preview, insights)
            }
            DatasetKind::Multiple => {
                let dataset = Dataset::from_houses(&datasets.multiple);
                let mut model = LinearRegression::new();
                model.fit(&dataset.features, &dataset.labels)?;
                let r_squared = model.score(&dataset.features, &dataset.labels)?;

                let intercept = model.intercept.unwrap_or(0.0);
                let mut equation = format!("Price = {:.2}", intercept);
                for (coeff, label) in model.coefficients.iter().flatten().zip(HOUSE_LABELS) {
                    equation.push_str(&signed(*coeff, &format!("({label})")));
                }
                let preview = Preview::Houses(head(&datasets.multiple, preview_rows));
                let insights = vec![
                    "Multiple regression considers several factors simultaneously".to_string(),
                    "Each coefficient shows the effect of that variable while holding others constant"
                        .to_string(),
                    "More complex but can capture real-world relationships better".to_string(),
                ];
                (equation, r_squared, None, preview, insights)
            }
            DatasetKind::Polynomial => {
                let mut model = PolynomialRegression::new(POLYNOMIAL_DEGREE);
                model.fit(&datasets.polynomial)?;
                let r_squared = model.score(&datasets.polynomial)?;

                let mut equation = format!("y = {:.2}", model.intercept().unwrap_or(0.0));
                for (power, coeff) in model.coefficients().into_iter().flatten().enumerate() {
                    equation.push_str(&signed(*coeff, &power_suffix(power + 1)));
                }
                let preview = Preview::Samples(head(&datasets.polynomial, preview_rows));
                let insights = vec![
                    "Polynomial regression can capture non-linear relationships".to_string(),
                    "Uses powers of X (x², x³) as additional features".to_string(),
                    "Be careful of overfitting with high degree polynomials".to_string(),
                ];
                (equation, r_squared, None, preview, insights)
            }
        };

        debug!("built {kind} report: {equation}, R² {r_squared:.3}");
        Ok(Self {
            kind,
            equation,
            r_squared,
            line,
            preview,
            total_records: datasets.len(kind),
            insights,
        })
    }

    /// Share of the variance explained, as a percentage.
    pub fn explained_percent(&self) -> f64 {
        self.r_squared * 100.0
    }
}

fn head<T: Clone>(records: &[T], rows: usize) -> Vec<T> {
    records.iter().take(rows).cloned().collect()
}

/// ` + 2.50suffix` or ` - 2.50suffix`.
fn signed(value: f64, suffix: &str) -> String {
    let sign = if value < 0.0 { '-' } else { '+' };
    format!(" {sign} {:.2}{suffix}", value.abs())
}

fn power_suffix(power: usize) -> String {
    match power {
        1 => "x".to_string(),
        2 => "x²".to_string(),
        3 => "x³".to_string(),
        p => format!("x^{p}"),
    }
}

/// Formats a whole number with thousands separators, e.g. `123,456`.
pub fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && digits != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.title())?;
        writeln!(f, "{}", self.kind.description())?;
        writeln!(f, "Equation: {}", self.equation)?;
        writeln!(
            f,
            "R-squared: {:.3} (explains {:.1}% of variance)",
            self.r_squared,
            self.explained_percent()
        )?;
        if let Some([start, end]) = &self.line {
            writeln!(
                f,
                "Regression line: ({:.2}, {:.2}) to ({:.2}, {:.2})",
                start.x, start.y, end.x, end.y
            )?;
        }
        if !self.insights.is_empty() {
            writeln!(f, "\nKey insights:")?;
            for insight in &self.insights {
                writeln!(f, "  - {insight}")?;
            }
        }
        writeln!(f)?;

        let shown = match &self.preview {
            Preview::Samples(samples) => {
                writeln!(f, "{:>10} {:>10}", "X", "Y")?;
                for sample in samples {
                    writeln!(f, "{:>10} {:>10}", sample.x, sample.y)?;
                }
                samples.len()
            }
            Preview::Houses(houses) => {
                writeln!(
                    f,
                    "{:>12} {:>9} {:>6} {:>9} {:>12}",
                    "Size (sq ft)", "Bedrooms", "Age", "Location", "Price ($)"
                )?;
                for house in houses {
                    writeln!(
                        f,
                        "{:>12} {:>9} {:>6} {:>9} {:>12}",
                        house.size,
                        house.bedrooms,
                        house.age,
                        if house.location { "Good" } else { "Average" },
                        format!("${}", group_thousands(house.price))
                    )?;
                }
                houses.len()
            }
        };

        write!(f, "Showing first {} rows of {} total records", shown, self.total_records)
    }
}
