// src/io/demand.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Generates a series where every day sells the same amount.
pub fn generate_constant_demand(days: usize, value: f64) -> Vec<f64> {
    vec![value; days]
}

/// Generates daily sales from a Normal distribution, clamped at zero.
///
/// # Arguments
/// * `days` - Length of the series.
/// * `mean` - Average daily sales.
/// * `std_dev` - Day-to-day volatility.
/// * `seed` - RNG seed, so runs are reproducible.
pub fn generate_normal_demand(days: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    generate_weekly_demand(days, &[mean; 7], std_dev, seed)
}

/// Generates daily sales with a weekly pattern: day `d` draws around
/// `weekday_means[d % 7]`. Bakeries sell noticeably more at weekends.
///
/// A non-finite or negative `std_dev` is treated as zero.
pub fn generate_weekly_demand(
    days: usize,
    weekday_means: &[f64; 7],
    std_dev: f64,
    seed: u64,
) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let sigma = if std_dev.is_finite() && std_dev > 0.0 {
        std_dev
    } else {
        0.0
    };

    (0..days)
        .map(|day| {
            let mean = weekday_means[day % 7];
            let val = match Normal::new(mean, sigma) {
                Ok(normal) => normal.sample(&mut rng),
                Err(_) => mean,
            };
            // Demand cannot be negative.
            val.round().max(0.0)
        })
        .collect()
}

/// Weekday profile used by the binary when no sales file is supplied.
pub fn bakery_weekday_means() -> [f64; 7] {
    [40.0, 38.0, 42.0, 45.0, 55.0, 80.0, 70.0]
}
