use crate::error::{Degeneracy, RegressionError, Result};
use crate::Vector;

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::DimensionMismatch(
            "y_true and y_pred must have the same length".to_string(),
        ));
    }
    if y_true.is_empty() {
        return Err(RegressionError::DegenerateInput(Degeneracy::TooFewSamples {
            n: 0,
            required: 1,
        }));
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / diff.len() as f64)
}

pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    mean_squared_error(y_true, y_pred).map(f64::sqrt)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x.abs()).sum() / diff.len() as f64)
}

/// Coefficient of determination. Constant `y_true` has no variance to
/// explain and is reported as [`Degeneracy::ZeroYVariance`].
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let first = y_true[0];
    if y_true.iter().all(|&y| y == first) {
        return Err(RegressionError::DegenerateInput(Degeneracy::ZeroYVariance));
    }

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 0.0).abs() < 1e-10);

        let y_pred = array![2.0, 2.0, 1.0];
        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 5.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_root_mean_squared_error() {
        let y_true = array![0.0, 0.0];
        let y_pred = array![3.0, -3.0];

        let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((rmse - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![2.0, 2.0, 1.0, 4.0];

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mae - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);

        // predicting the mean explains nothing
        let y_pred = array![2.5, 2.5, 2.5, 2.5];
        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!(r2.abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_constant_target() {
        let y_true = array![5.0, 5.0, 5.0];
        let y_pred = array![5.0, 5.0, 5.0];

        assert_eq!(
            r2_score(&y_true, &y_pred),
            Err(RegressionError::DegenerateInput(Degeneracy::ZeroYVariance))
        );
    }

    #[test]
    fn test_length_mismatch_and_empty() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0];
        assert!(matches!(
            mean_squared_error(&y_true, &y_pred),
            Err(RegressionError::DimensionMismatch(_))
        ));

        let empty = Vector::zeros(0);
        assert!(mean_absolute_error(&empty, &empty).is_err());
        assert!(r2_score(&empty, &empty).is_err());
    }
}
