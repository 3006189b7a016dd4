use std::env;
use std::path::Path;

use anyhow::Result;
use resilience_engine::analysis::summary;
use resilience_engine::core::pipeline;
use resilience_engine::core::timeline::FORECAST_YEARS;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(pipeline::DEFAULT_INPUT);
    let output = args.get(2).map(String::as_str).unwrap_or(pipeline::DEFAULT_FORECAST_OUTPUT);

    println!("{}", "=".repeat(80));
    println!("RESILIENCE FORECASTING: LEVEL+TREND SMOOTHER ({}-{})", FORECAST_YEARS[0], FORECAST_YEARS[4]);
    println!("{}", "=".repeat(80));

    println!("\n📂 Loading {}...", input);
    let countries = pipeline::load_countries(Path::new(input))?;
    println!("✓ Loaded {} countries", countries.len());

    let with_data = countries.iter().filter(|c| c.score > 0.0).count();
    println!("✓ {} countries with resilience scores", with_data);

    println!("\n🧮 Applying zero percentile weights and fitting per-country trends...");
    let mut rng = rand::thread_rng();
    let forecasts = pipeline::run_forecast(&countries, &mut rng);

    println!("\nTop 10 countries by zero percentile weight:");
    for (i, c) in summary::top_weighted(&forecasts, 10).iter().enumerate() {
        println!("  {:2}. {:30} Score: {:.3} Weight: {:.3}", i + 1, c.name, c.current_score, c.weight);
    }

    pipeline::save_json(Path::new(output), &forecasts)?;
    println!("\n✅ Saved forecasts to {}", output);
    println!("   - {} countries", forecasts.len());
    println!("   - Forecast period: {}-{}", FORECAST_YEARS[0], FORECAST_YEARS[4]);

    println!("\n📈 Forecast summary:");
    for &year in &FORECAST_YEARS {
        if let Some(avg) = summary::forecast_year_average(&forecasts, year) {
            println!("   {} avg forecast: {:.3}", year, avg);
        }
    }

    let movers = summary::movers(&forecasts, FORECAST_YEARS[4]);
    println!("\n🚀 Top 10 expected improvers ({} → {}):", FORECAST_YEARS[0] - 1, FORECAST_YEARS[4]);
    for (i, m) in movers.iter().take(10).enumerate() {
        println!("  {:2}. {:30} {:.3} → {:.3} ({:+.3})", i + 1, m.name, m.current, m.projected, m.change);
    }

    println!("\n⚠️  Top 10 expected decliners:");
    for (i, m) in movers.iter().rev().take(10).enumerate() {
        println!("  {:2}. {:30} {:.3} → {:.3} ({:+.3})", i + 1, m.name, m.current, m.projected, m.change);
    }

    println!("\n{}", "=".repeat(80));
    println!("✅ FORECASTING COMPLETE");
    println!("{}", "=".repeat(80));

    Ok(())
}
