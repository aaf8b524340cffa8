//! MSTL Decomposition example.
//!
//! Run with: cargo run --example mstl_decomposition

use anofox_stl::prelude::*;

fn main() {
    println!("=== MSTL Decomposition Example ===\n");

    // Hourly data with daily and weekly seasonality
    let n = 24 * 7 * 4;
    let series: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64;
            let level = 100.0 + 0.02 * t;
            let daily = 5.0 * (2.0 * std::f64::consts::PI * t / 24.0).sin();
            let weekly = 3.0 * (2.0 * std::f64::consts::PI * t / 168.0).sin();
            let noise = 0.2 * (t * 0.3).cos();
            level + daily + weekly + noise
        })
        .collect();

    println!("Generated: {} hourly observations\n", n);

    // 1. Two seasonal periods
    println!("--- Daily and Weekly Periods ---");

    let periods = [24, 168];
    let result = match MSTLParams::default().fit(&series, &periods) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Decomposition failed: {}", e);
            return;
        }
    };

    for (idx, period) in result.seasonal_periods.iter().enumerate() {
        if let Some(strength) = result.seasonal_strength(idx) {
            println!("  Period {:>4}: seasonal strength {:.4}", period, strength);
        }
    }
    println!("  Trend strength: {:.4}", result.trend_strength());

    let total_seasonal = result.total_seasonal();
    let max_error = series
        .iter()
        .zip(total_seasonal.iter())
        .zip(result.trend.iter().zip(result.remainder.iter()))
        .map(|((y, s), (t, r))| (y - (s + t + r)).abs())
        .fold(0.0, f64::max);
    println!("  Max reconstruction error: {:.2e}", max_error);

    // 2. Period order does not matter
    println!("\n--- Period Order ---");

    if let Ok(reversed) = MSTLParams::default().fit(&series, &[168, 24]) {
        println!("  Periods as given: {:?}", reversed.seasonal_periods);
        println!(
            "  Daily component identical: {}",
            reversed.seasonal_components[1] == result.seasonal_components[0]
        );
        println!("  Trend identical: {}", reversed.trend == result.trend);
    }

    // 3. Box-Cox transformed fit
    println!("\n--- Box-Cox (lambda = 0.5) ---");

    let params = MSTLParams {
        lambda: Some(0.5),
        ..MSTLParams::default()
    };
    if let Ok(transformed) = params.fit(&series, &periods) {
        // Components live on the transformed scale
        let fitted: Vec<f64> = transformed
            .total_seasonal()
            .iter()
            .zip(transformed.trend.iter())
            .map(|(s, t)| s + t)
            .collect();
        let smooth = inv_boxcox(&fitted, 0.5);
        println!("{:>4} {:>10} {:>10}", "t", "Original", "Smoothed");
        println!("{:-<26}", "");
        for i in (0..n).step_by(24).take(7) {
            println!("{:>4} {:>10.4} {:>10.4}", i, series[i], smooth[i]);
        }
    }

    // 4. Per-period seasonal windows
    println!("\n--- Custom Seasonal Windows ---");

    let params = MSTLParams {
        seasonal_lengths: Some(vec![11, 31]),
        iterations: 3,
        ..MSTLParams::default()
    };
    if let Ok(custom) = params.fit(&series, &periods) {
        for (strength, period) in custom
            .seasonal_strengths()
            .iter()
            .zip(custom.seasonal_periods.iter())
        {
            println!("  Period {:>4}: seasonal strength {:.4}", period, strength);
        }
    }

    // 5. Validation errors
    println!("\n--- Invalid Input ---");
    let bad_lambda = MSTLParams {
        lambda: Some(1.5),
        ..MSTLParams::default()
    };
    for outcome in [
        MSTLParams::default().fit(&series, &[]),
        MSTLParams::default().fit(&series, &[24, 1]),
        MSTLParams::default().fit(&series[..100], &[24, 168]),
        bad_lambda.fit(&series, &periods),
    ] {
        if let Err(e) = outcome {
            println!("  {}", e);
        }
    }
}
