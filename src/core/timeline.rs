//! Synthetic history generation and timeline composition.
//!
//! No real pre-2025 measurements exist in this dataset: every year before
//! the pivot is SIMULATED by perturbing the known current value with a
//! bounded random walk plus a small drift. The timeline file still tags
//! those years `historical` because the rendering collaborators key on
//! that tag, but nothing in them should be read as measured data.

use rand::Rng;

use crate::analysis::scoring::round3;
use crate::models::{CountryForecast, CountryRecord, EntryKind, ForecastPoint, TimelineCountry, TimelineYear};

/// Years rendered as (synthetic) history. The last one is the pivot: the
/// only year whose values are real.
pub const HISTORICAL_YEARS: [i32; 7] = [2019, 2020, 2021, 2022, 2023, 2024, 2025];
/// Years filled from the forecast file.
pub const FORECAST_YEARS: [i32; 5] = [2026, 2027, 2028, 2029, 2030];
pub const PIVOT_YEAR: i32 = 2025;

/// Step size of the random walk feeding the smoother.
const WALK_STEP: f64 = 0.02;

/// Bounded random-walk series of `len` points, shifted so the final point
/// equals `anchor` exactly. Used as smoother input in place of the real
/// history that was never collected. A zero anchor (no data) stays all
/// zeros.
pub fn synthetic_history<R: Rng>(rng: &mut R, anchor: f64, len: usize) -> Vec<f64> {
    if anchor == 0.0 || len == 0 {
        return vec![0.0; len];
    }

    let mut cumulative = Vec::with_capacity(len);
    let mut sum = 0.0;
    for _ in 0..len {
        sum += rng.gen_range(-WALK_STEP..WALK_STEP);
        cumulative.push(sum);
    }

    let last = cumulative[len - 1];
    cumulative
        .into_iter()
        .map(|c| (anchor + c - last).clamp(0.0, 1.0))
        .collect()
}

/// Backcast one metric over the historical years: noise grows with the
/// distance from the pivot, a per-country drift drawn once tilts the whole
/// trajectory, and the pivot year is pinned to the current value.
pub fn backcast_metric<R: Rng>(rng: &mut R, current: f64) -> Vec<f64> {
    if current == 0.0 {
        return vec![0.0; HISTORICAL_YEARS.len()];
    }

    let volatility = rng.gen_range(0.02..0.08);
    // Slight upward bias: most backcasts start a little below today
    let drift = rng.gen_range(-0.01..0.015);

    HISTORICAL_YEARS
        .iter()
        .map(|&year| {
            if year == PIVOT_YEAR {
                return current;
            }
            let years_back = (PIVOT_YEAR - year) as f64;
            let deviation = rng.gen_range(-volatility..volatility) * (years_back / 6.0);
            (current + deviation - drift * years_back).clamp(0.0, 1.0)
        })
        .collect()
}

/// Merge synthetic history and forecast years into one per-country record.
/// A country without a forecast row holds its current values flat through
/// the forecast years (still tagged `forecast`, without interval bounds).
pub fn compose_timeline<R: Rng>(
    country: &CountryRecord,
    forecast: Option<&CountryForecast>,
    rng: &mut R,
) -> TimelineCountry {
    let overall = backcast_metric(rng, country.score);
    let financial = backcast_metric(rng, country.financial);
    let social = backcast_metric(rng, country.social);
    let institutional = backcast_metric(rng, country.institutional);
    let infrastructure = backcast_metric(rng, country.infrastructure);

    let mut timeline = std::collections::BTreeMap::new();

    for (i, &year) in HISTORICAL_YEARS.iter().enumerate() {
        timeline.insert(
            year,
            TimelineYear {
                overall: round3(overall[i]),
                overall_lower: None,
                overall_upper: None,
                financial: round3(financial[i]),
                social: round3(social[i]),
                institutional: round3(institutional[i]),
                infrastructure: round3(infrastructure[i]),
                kind: EntryKind::Historical,
            },
        );
    }

    for &year in &FORECAST_YEARS {
        let entry = match forecast {
            Some(f) => {
                // Pillar sub-scores are not forecast: hold them at the
                // forecast record's current values
                let point = f.forecasts.get(&year).copied().unwrap_or_else(ForecastPoint::zero);
                TimelineYear {
                    overall: point.mean,
                    overall_lower: Some(point.lower),
                    overall_upper: Some(point.upper),
                    financial: round3(f.financial),
                    social: round3(f.social),
                    institutional: round3(f.institutional),
                    infrastructure: round3(f.infrastructure),
                    kind: EntryKind::Forecast,
                }
            }
            None => TimelineYear {
                overall: round3(country.score),
                overall_lower: None,
                overall_upper: None,
                financial: round3(country.financial),
                social: round3(country.social),
                institutional: round3(country.institutional),
                infrastructure: round3(country.infrastructure),
                kind: EntryKind::Forecast,
            },
        };
        timeline.insert(year, entry);
    }

    TimelineCountry {
        iso3: country.iso3.clone(),
        name: country.name.clone(),
        region: country.region.clone(),
        income: country.income.clone(),
        lat: country.lat,
        lon: country.lon,
        timeline,
    }
}
