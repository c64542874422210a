use rand::SeedableRng;
use rand::rngs::StdRng;
use regression_lab::generator::{generate_multiple, HOUSE_COEFFICIENTS};
use regression_lab::metrics::root_mean_squared_error;
use regression_lab::{Dataset, HouseRecord, LinearRegression};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Multiple Linear Regression: House Prices ===\n");

    let mut rng = StdRng::seed_from_u64(7);
    let houses = generate_multiple(100, &mut rng);
    let dataset = Dataset::from_houses(&houses);

    println!(
        "Training data shape: {} samples, {} features",
        dataset.n_samples(),
        dataset.n_features()
    );
    println!("True relationship: price = 50*size + 5000*bedrooms - 200*age + 20000*location + noise\n");

    let mut model = LinearRegression::new();
    model.fit(&dataset.features, &dataset.labels)?;

    let predictions = model.predict(&dataset.features)?;
    let r2 = model.score(&dataset.features, &dataset.labels)?;
    let rmse = root_mean_squared_error(&dataset.labels, &predictions)?;

    println!("{:<10} {:>12} {:>12}", "Feature", "Fitted", "True");
    println!("{}", "-".repeat(36));
    let coeffs = model.coefficients.as_ref().ok_or("model has no coefficients")?;
    for ((name, fitted), truth) in HouseRecord::FEATURE_NAMES
        .iter()
        .zip(coeffs.iter())
        .zip(HOUSE_COEFFICIENTS)
    {
        println!("{:<10} {:>12.2} {:>12.2}", name, fitted, truth);
    }
    println!("{:<10} {:>12.2} {:>12.2}", "intercept", model.intercept.unwrap_or(0.0), 0.0);

    println!("\nR-squared: {:.3}", r2);
    println!("RMSE: {:.2}", rmse);

    Ok(())
}
