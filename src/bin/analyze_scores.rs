use std::env;
use std::path::Path;

use anyhow::Result;
use resilience_engine::analysis::summary::ScoreDistribution;
use resilience_engine::core::pipeline;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let input = args.get(1).map(String::as_str).unwrap_or(pipeline::DEFAULT_INPUT);

    let countries = pipeline::load_countries(Path::new(input))?;
    let scores: Vec<f64> = countries.iter().map(|c| c.score).collect();

    let dist = match ScoreDistribution::from_scores(&scores) {
        Some(d) => d,
        None => {
            println!("No countries with scores in {}", input);
            return Ok(());
        }
    };

    println!("Total countries with scores: {}", dist.count);
    println!("\nScore distribution:");
    println!("  Min: {:.3}", dist.min);
    println!("  25th percentile: {:.3}", dist.p25);
    println!("  Median (50th): {:.3}", dist.median);
    println!("  75th percentile: {:.3}", dist.p75);
    println!("  Max: {:.3}", dist.max);

    // Map color band thresholds used by the rendering collaborators
    let bands: [(&str, f64, f64); 5] = [
        ("Red", 0.0, 0.20),
        ("Orange", 0.20, 0.35),
        ("Yellow", 0.35, 0.50),
        ("White", 0.50, 0.70),
        ("Green", 0.70, 1.01),
    ];
    println!("\nCurrent color thresholds:");
    for (label, lo, hi) in bands {
        let count = scores.iter().filter(|&&s| s > 0.0 && s >= lo && s < hi).count();
        println!("  {}: {:.2}-{:.2} → {} countries", label, lo, hi.min(1.0), count);
    }

    Ok(())
}
