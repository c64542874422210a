use rand::SeedableRng;
use rand::rngs::StdRng;
use regression_lab::generator::generate_simple;
use regression_lab::{simple_linear_regression, RegressionError, Sample};

fn main() -> Result<(), RegressionError> {
    println!("=== Simple Linear Regression Example ===\n");

    // y = 2.5x + 10 + noise
    let mut rng = StdRng::seed_from_u64(42);
    let samples = generate_simple(50, &mut rng);

    println!("First rows of training data:");
    for sample in samples.iter().take(5) {
        println!("  x={:>7.2}  y={:>7.2}", sample.x, sample.y);
    }

    let fit = simple_linear_regression(&samples)?;

    println!("\nResults:");
    println!("Slope: {:.4}", fit.slope);
    println!("Intercept: {:.4}", fit.intercept);
    println!("R² score: {:.4}", fit.r_squared);

    println!("\nPredictions on new data:");
    for x in [120.0, 150.0] {
        println!("X={:.1}: Predicted y={:.2}", x, fit.predict(x));
    }

    // a flat series has no variance for the line to explain
    let flat = [Sample::new(0.0, 5.0), Sample::new(1.0, 5.0), Sample::new(2.0, 5.0)];
    match simple_linear_regression(&flat) {
        Ok(fit) => println!("\nUnexpected fit on flat data: {:?}", fit),
        Err(e) => println!("\nFlat data rejected: {}", e),
    }

    Ok(())
}
