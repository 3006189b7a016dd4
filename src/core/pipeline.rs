use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::analysis::scoring::round3;
use crate::analysis::weighting::zero_percentile_weight;
use crate::core::forecaster::{LevelTrendSmoother, TrendModel};
use crate::core::timeline::{compose_timeline, synthetic_history, FORECAST_YEARS, HISTORICAL_YEARS};
use crate::models::{CountryForecast, CountryRecord, ForecastPoint, TimelineCountry};

/// Default artifact names, matching what the rendering collaborators load.
pub const DEFAULT_INPUT: &str = "resilience_data_complete.json";
pub const DEFAULT_FORECAST_OUTPUT: &str = "resilience_forecasts_2025_2030.json";
pub const DEFAULT_TIMELINE_OUTPUT: &str = "resilience_timeline_2019_2030.json";

pub fn load_countries(path: &Path) -> Result<Vec<CountryRecord>> {
    load_json(path)
}

pub fn load_forecasts(path: &Path) -> Result<Vec<CountryForecast>> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Weight, fit and forecast every country.
///
/// Countries with a score feed the smoother with a synthetic 7-point
/// history anchored at their current score; countries with the 0 sentinel
/// pass through as all-zero rows so the output keeps row-count parity with
/// the input. Nothing here errors on bad data.
pub fn run_forecast<R: Rng>(countries: &[CountryRecord], rng: &mut R) -> Vec<CountryForecast> {
    let (with_data, without_data): (Vec<&CountryRecord>, Vec<&CountryRecord>) =
        countries.iter().partition(|c| c.score > 0.0);

    // The weight depends on the full cross-country distribution, so it is
    // recomputed from scratch on every run
    let all_scores: Vec<f64> = with_data.iter().map(|c| c.score).collect();

    let smoother = LevelTrendSmoother::default();
    let mut forecast_rows = Vec::with_capacity(countries.len());

    for country in with_data {
        let weight = zero_percentile_weight(country.score, &all_scores);

        let history = synthetic_history(rng, country.score, HISTORICAL_YEARS.len());
        let weights = vec![weight; history.len()];

        let state = smoother.fit(&history, &weights);
        let points = smoother.forecast(&state, FORECAST_YEARS.len());

        let mut forecasts = BTreeMap::new();
        for (point, &year) in points.iter().zip(FORECAST_YEARS.iter()) {
            forecasts.insert(
                year,
                ForecastPoint {
                    mean: round3(point.mean),
                    lower: round3(point.lower),
                    upper: round3(point.upper),
                },
            );
        }

        forecast_rows.push(CountryForecast {
            iso3: country.iso3.clone(),
            name: country.name.clone(),
            region: country.region.clone(),
            income: country.income.clone(),
            lat: country.lat,
            lon: country.lon,
            current_score: round3(country.score),
            financial: round3(country.financial),
            social: round3(country.social),
            institutional: round3(country.institutional),
            infrastructure: round3(country.infrastructure),
            weight: round3(weight),
            forecasts,
        });
    }

    // Zero-score countries keep their rows (all-zero forecasts) instead of
    // being dropped
    for country in without_data {
        let forecasts = FORECAST_YEARS
            .iter()
            .map(|&year| (year, ForecastPoint::zero()))
            .collect();

        forecast_rows.push(CountryForecast {
            iso3: country.iso3.clone(),
            name: country.name.clone(),
            region: country.region.clone(),
            income: country.income.clone(),
            lat: country.lat,
            lon: country.lon,
            current_score: 0.0,
            financial: 0.0,
            social: 0.0,
            institutional: 0.0,
            infrastructure: 0.0,
            weight: 0.0,
            forecasts,
        });
    }

    forecast_rows
}

/// Compose the 2019-2030 timeline for every country.
pub fn run_timeline<R: Rng>(
    countries: &[CountryRecord],
    forecasts: &[CountryForecast],
    rng: &mut R,
) -> Vec<TimelineCountry> {
    let lookup: std::collections::HashMap<&str, &CountryForecast> =
        forecasts.iter().map(|f| (f.iso3.as_str(), f)).collect();

    countries
        .iter()
        .map(|country| compose_timeline(country, lookup.get(country.iso3.as_str()).copied(), rng))
        .collect()
}
