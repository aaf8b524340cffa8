//! STL Decomposition example.
//!
//! Run with: cargo run --example stl_decomposition

use anofox_stl::prelude::*;
use anofox_stl::utils::{mean, variance};

fn main() {
    println!("=== STL Decomposition Example ===\n");

    println!("STL (Seasonal-Trend decomposition using LOESS) breaks down a");
    println!("time series into three additive components:");
    println!("  Y = Trend + Seasonal + Remainder\n");

    // Generate sample data with trend and seasonality
    let period = 12;
    let n = 120; // 10 years of monthly data

    let series: Vec<f64> = (0..n)
        .map(|i| {
            let trend = 0.1 * i as f64;
            let seasonal = 10.0 * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin();
            let noise = 0.5 * ((i as f64 * 0.7).cos());
            trend + seasonal + noise
        })
        .collect();

    println!("Generated: {} observations with period={}\n", n, period);

    // 1. Basic STL Decomposition
    println!("--- Basic STL Decomposition ---");

    let result = match STLParams::default().fit(&series, period) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Decomposition failed: {}", e);
            return;
        }
    };

    let max_reconstruction_error: f64 = series
        .iter()
        .zip(result.trend.iter())
        .zip(result.seasonal.iter())
        .zip(result.remainder.iter())
        .map(|(((y, t), s), r)| (y - (t + s + r)).abs())
        .fold(0.0, f64::max);
    println!(
        "Max reconstruction error: {:.2e}",
        max_reconstruction_error
    );

    // 2. Component Statistics
    println!("\n--- Component Statistics ---");
    println!("{:<12} {:>12} {:>12}", "Component", "Mean", "Std Dev");
    println!("{:-<38}", "");
    for (name, component) in [
        ("Trend", &result.trend),
        ("Seasonal", &result.seasonal),
        ("Remainder", &result.remainder),
    ] {
        println!(
            "{:<12} {:>12.4} {:>12.4}",
            name,
            mean(component),
            variance(component).sqrt()
        );
    }

    // 3. Trend and Seasonal Strength
    println!("\n--- Trend and Seasonal Strength ---");

    let trend_strength = result.trend_strength();
    let seasonal_strength = result.seasonal_strength();
    println!(
        "Trend strength:    {:.4} ({})",
        trend_strength,
        if trend_strength > 0.5 { "Strong" } else { "Weak" }
    );
    println!(
        "Seasonal strength: {:.4} ({})",
        seasonal_strength,
        if seasonal_strength > 0.5 { "Strong" } else { "Weak" }
    );

    // 4. First season of components
    println!("\n--- First Season of Components ---");
    println!(
        "{:>4} {:>10} {:>10} {:>10} {:>10}",
        "t", "Original", "Trend", "Seasonal", "Remainder"
    );
    println!("{:-<46}", "");
    for (i, &value) in series.iter().enumerate().take(period) {
        println!(
            "{:>4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            i, value, result.trend[i], result.seasonal[i], result.remainder[i]
        );
    }

    // 5. Custom windows
    println!("\n--- STL with Custom Parameters ---");

    let custom = STLParams {
        seasonal_length: Some(7),
        trend_length: Some(21),
        inner_loops: Some(3),
        ..STLParams::default()
    };
    if let Ok(result_custom) = custom.fit(&series, period) {
        println!("  seasonal_length=7, trend_length=21, inner_loops=3");
        println!("  Trend strength:    {:.4}", result_custom.trend_strength());
        println!(
            "  Seasonal strength: {:.4}",
            result_custom.seasonal_strength()
        );
    }

    // 6. Robust STL
    println!("\n--- Robust STL with Outliers ---");

    let mut series_with_outliers = series.clone();
    series_with_outliers[30] = 100.0;
    series_with_outliers[60] = -80.0;
    series_with_outliers[90] = 150.0;

    let standard = STLParams::default().fit(&series_with_outliers, period);
    let robust = STLParams::robust().fit(&series_with_outliers, period);

    if let (Ok(standard), Ok(robust)) = (standard, robust) {
        println!(
            "{:<15} {:>15} {:>18}",
            "Method", "Trend Strength", "Seasonal Strength"
        );
        println!("{:-<50}", "");
        println!(
            "{:<15} {:>15.4} {:>18.4}",
            "Standard",
            standard.trend_strength(),
            standard.seasonal_strength()
        );
        println!(
            "{:<15} {:>15.4} {:>18.4}",
            "Robust",
            robust.trend_strength(),
            robust.seasonal_strength()
        );

        println!("\nRobustness weights at the outliers:");
        for idx in [30, 60, 90] {
            println!("  t={:<3} weight={:.4}", idx, robust.weights[idx]);
        }
    }

    // 7. Error handling
    println!("\n--- Invalid Input ---");
    match STLParams::default().fit(&series[..20], period) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Too short: {}", e),
    }
    let even = STLParams {
        low_pass_length: Some(12),
        ..STLParams::default()
    };
    match even.fit(&series, period) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Even window: {}", e),
    }
}
