use std::env;
use std::path::Path;

use anyhow::Result;
use resilience_engine::analysis::summary;
use resilience_engine::core::pipeline;
use resilience_engine::core::timeline::{FORECAST_YEARS, HISTORICAL_YEARS, PIVOT_YEAR};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(pipeline::DEFAULT_INPUT);
    let forecast_input = args.get(2).map(String::as_str).unwrap_or(pipeline::DEFAULT_FORECAST_OUTPUT);
    let output = args.get(3).map(String::as_str).unwrap_or(pipeline::DEFAULT_TIMELINE_OUTPUT);

    println!("{}", "=".repeat(80));
    println!("CREATING HISTORICAL + FORECAST TIMELINE DATA");
    println!("{}", "=".repeat(80));

    let countries = pipeline::load_countries(Path::new(input))?;
    let forecasts = pipeline::load_forecasts(Path::new(forecast_input))?;
    println!("\n✓ Loaded {} countries", countries.len());
    println!("✓ Loaded {} forecasts", forecasts.len());

    println!("\n📅 Creating timeline: {}-{}", HISTORICAL_YEARS[0], FORECAST_YEARS[4]);
    println!("   Note: years before {} are simulated around the current value, not measured.", PIVOT_YEAR);

    let mut rng = rand::thread_rng();
    let timeline = pipeline::run_timeline(&countries, &forecasts, &mut rng);

    pipeline::save_json(Path::new(output), &timeline)?;
    println!("\n✅ Saved timeline data to {}", output);
    println!("   - {} countries", timeline.len());
    println!("   - {} years ({}-{})", HISTORICAL_YEARS.len() + FORECAST_YEARS.len(), HISTORICAL_YEARS[0], FORECAST_YEARS[4]);
    println!("   - 5 metrics per year (overall + 4 pillars)");

    if let Some(sample) = timeline.iter().find(|c| c.iso3 == "USA").or_else(|| timeline.first()) {
        println!("\n📊 Sample country timeline ({}):", sample.name);
        for year in [HISTORICAL_YEARS[0], PIVOT_YEAR, FORECAST_YEARS[4]] {
            if let Some(entry) = sample.timeline.get(&year) {
                println!("  {}: {:.3} ({:?})", year, entry.overall, entry.kind);
            }
        }
    }

    println!("\n🌍 Global average trends:");
    for year in [2019, 2022, 2025, 2027, 2030] {
        if let Some(avg) = summary::timeline_year_average(&timeline, year) {
            let label = if year > PIVOT_YEAR {
                "(forecast)"
            } else if year < PIVOT_YEAR {
                "(simulated)"
            } else {
                "(current)"
            };
            println!("  {}: {:.3} {}", year, avg, label);
        }
    }

    println!("\n{}", "=".repeat(80));
    println!("✅ TIMELINE DATA READY");
    println!("{}", "=".repeat(80));

    Ok(())
}
