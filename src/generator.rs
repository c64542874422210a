//! Synthetic datasets scattered around known generating functions.
//!
//! Every generator draws from the random source it is handed, so a seeded
//! `StdRng` gives reproducible values while the shape and count are fixed
//! regardless of the source.

use crate::dataset::{HouseRecord, Sample};
use crate::Vector;
use log::debug;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

/// Slope of the line behind [`generate_simple`].
pub const SIMPLE_SLOPE: f64 = 2.5;
/// Intercept of the line behind [`generate_simple`].
pub const SIMPLE_INTERCEPT: f64 = 10.0;

/// Price per square foot, per bedroom, per year of age and for a good location.
pub const HOUSE_COEFFICIENTS: [f64; 4] = [50.0, 5000.0, -200.0, 20000.0];

/// Coefficients of `y = 5 + x - 2x² + 0.5x³`, constant term first.
pub const CUBIC_COEFFICIENTS: [f64; 4] = [5.0, 1.0, -2.0, 0.5];

fn noise<R: Rng + ?Sized>(count: usize, low: f64, high: f64, rng: &mut R) -> Vector {
    Vector::random_using(count, Uniform::new(low, high), rng)
}

/// Rounds half away from zero to `decimals` places and never returns `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Evaluates [`CUBIC_COEFFICIENTS`] at `x`.
pub fn cubic(x: f64) -> f64 {
    CUBIC_COEFFICIENTS
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

/// House price before noise.
pub fn house_price(size: f64, bedrooms: u8, age: f64, location: bool) -> f64 {
    let [per_size, per_bedroom, per_year, per_location] = HOUSE_COEFFICIENTS;
    per_size * size
        + per_bedroom * bedrooms as f64
        + per_year * age
        + if location { per_location } else { 0.0 }
}

/// `x = 2i + U[0,10)`, `y = 2.5x + 10 + U[-10,10)`, both rounded to 2 decimals.
pub fn generate_simple<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Sample> {
    let x_jitter = noise(count, 0.0, 10.0, rng);
    let y_noise = noise(count, -10.0, 10.0, rng);

    let samples: Vec<Sample> = (0..count)
        .map(|i| {
            let x = i as f64 * 2.0 + x_jitter[i];
            let y = SIMPLE_SLOPE * x + SIMPLE_INTERCEPT + y_noise[i];
            Sample::new(round_to(x, 2), round_to(y, 2))
        })
        .collect();

    debug!("generated {} simple samples", samples.len());
    samples
}

/// House records with size in [500,3000], 1-5 bedrooms, age in [0,50] and a
/// coin-flip location. Price follows [`HOUSE_COEFFICIENTS`] plus U[-10000,10000).
pub fn generate_multiple<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<HouseRecord> {
    let sizes = noise(count, 500.0, 3000.0, rng);
    let ages = noise(count, 0.0, 50.0, rng);
    let location_draws = noise(count, 0.0, 1.0, rng);
    let price_noise = noise(count, -10000.0, 10000.0, rng);

    let houses: Vec<HouseRecord> = (0..count)
        .map(|i| {
            let bedrooms = rng.gen_range(1..=5u8);
            let location = location_draws[i] > 0.5;
            let price = house_price(sizes[i], bedrooms, ages[i], location) + price_noise[i];

            HouseRecord {
                size: round_to(sizes[i], 0),
                bedrooms,
                age: round_to(ages[i], 1),
                location,
                price: round_to(price, 0),
            }
        })
        .collect();

    debug!("generated {} house records", houses.len());
    houses
}

/// x evenly spaced over [-5,5), `y = 0.5x³ - 2x² + x + 5 + U[-2,2)`.
pub fn generate_polynomial<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Sample> {
    let y_noise = noise(count, -2.0, 2.0, rng);
    let step = 10.0 / count.max(1) as f64;

    let samples: Vec<Sample> = (0..count)
        .map(|i| {
            let x = -5.0 + i as f64 * step;
            Sample::new(round_to(x, 2), round_to(cubic(x) + y_noise[i], 2))
        })
        .collect();

    debug!("generated {} polynomial samples", samples.len());
    samples
}
