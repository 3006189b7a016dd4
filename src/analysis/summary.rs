use crate::models::{CountryForecast, TimelineCountry};

/// Quartile summary of the cross-country score distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDistribution {
    pub count: usize,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

/// Linear-interpolated percentile over a sorted sample (numpy-style).
/// `q` is on the 0-100 scale. Returns None for an empty sample.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 100.0);
    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Some(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
}

impl ScoreDistribution {
    /// Summarize the scores of countries with data (score > 0; the 0
    /// sentinel rows are excluded from all statistics).
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let mut with_data: Vec<f64> = scores.iter().copied().filter(|&s| s > 0.0).collect();
        with_data.sort_by(|a, b| a.partial_cmp(b).unwrap());
        if with_data.is_empty() {
            return None;
        }

        Some(Self {
            count: with_data.len(),
            min: with_data[0],
            p25: percentile(&with_data, 25.0)?,
            median: percentile(&with_data, 50.0)?,
            p75: percentile(&with_data, 75.0)?,
            max: with_data[with_data.len() - 1],
        })
    }
}

/// Expected change between the current score and a forecast year.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pub name: String,
    pub current: f64,
    pub projected: f64,
    pub change: f64,
}

/// Countries ranked by expected score change to `target_year`, best first.
/// Zero-score pass-through rows are excluded.
pub fn movers(forecasts: &[CountryForecast], target_year: i32) -> Vec<Mover> {
    let mut movers: Vec<Mover> = forecasts
        .iter()
        .filter(|c| c.current_score > 0.0)
        .filter_map(|c| {
            let projected = c.forecasts.get(&target_year)?.mean;
            Some(Mover {
                name: c.name.clone(),
                current: c.current_score,
                projected,
                change: projected - c.current_score,
            })
        })
        .collect();

    movers.sort_by(|a, b| b.change.partial_cmp(&a.change).unwrap());
    movers
}

/// The `n` countries with the strongest outlier weight, heaviest first.
pub fn top_weighted(forecasts: &[CountryForecast], n: usize) -> Vec<&CountryForecast> {
    let mut with_data: Vec<&CountryForecast> =
        forecasts.iter().filter(|c| c.current_score > 0.0).collect();
    with_data.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap());
    with_data.truncate(n);
    with_data
}

/// Average forecast mean for one year across countries with data.
pub fn forecast_year_average(forecasts: &[CountryForecast], year: i32) -> Option<f64> {
    let means: Vec<f64> = forecasts
        .iter()
        .filter(|c| c.current_score > 0.0)
        .filter_map(|c| c.forecasts.get(&year))
        .map(|p| p.mean)
        .filter(|&m| m > 0.0)
        .collect();

    if means.is_empty() {
        return None;
    }
    Some(means.iter().sum::<f64>() / means.len() as f64)
}

/// Average `overall` for one timeline year across countries with data.
pub fn timeline_year_average(timeline: &[TimelineCountry], year: i32) -> Option<f64> {
    let overalls: Vec<f64> = timeline
        .iter()
        .filter_map(|c| c.timeline.get(&year))
        .map(|y| y.overall)
        .filter(|&v| v > 0.0)
        .collect();

    if overalls.is_empty() {
        return None;
    }
    Some(overalls.iter().sum::<f64>() / overalls.len() as f64)
}
