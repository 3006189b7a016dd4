use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One raw measurement from an upstream source (World Bank API etc).
/// Immutable once fetched; the scoring core only reads these.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndicatorValue {
    pub country_code: String,
    pub indicator_id: String,
    pub year: i32,
    pub value: f64,
}

/// Normalized scores for the four thematic pillars.
/// 0.0 is the "no data" sentinel, not a valid score — consumers filter
/// score == 0 before computing statistics.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PillarScores {
    pub financial: f64,
    pub social: f64,
    pub institutional: f64,
    pub infrastructure: f64,
}

impl PillarScores {
    /// Unconditional mean over all four pillars (zero pillars count).
    pub fn mean(&self) -> f64 {
        (self.financial + self.social + self.institutional + self.infrastructure) / 4.0
    }
}

/// One country row of the input dataset (the shape the fetch/merge
/// collaborators produce). `score` is the overall resilience score.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryRecord {
    pub iso3: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub income: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub score: f64,
    pub financial: f64,
    pub social: f64,
    pub institutional: f64,
    pub infrastructure: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// One forecast year: mean plus 95% interval bounds, all clamped to [0,1].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ForecastPoint {
    pub fn zero() -> Self {
        Self { mean: 0.0, lower: 0.0, upper: 0.0 }
    }
}

/// One country row of the forecast output file.
/// `forecasts` is keyed by year (serialized as string keys, like the
/// original artifact).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryForecast {
    pub iso3: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub income: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub current_score: f64,
    pub financial: f64,
    pub social: f64,
    pub institutional: f64,
    pub infrastructure: f64,
    pub weight: f64,
    pub forecasts: BTreeMap<i32, ForecastPoint>,
}

/// Whether a timeline year is (synthetic) history or a model projection.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Historical,
    Forecast,
}

/// One (country, year) point of the timeline file.
/// Forecast years additionally carry interval bounds for `overall` only;
/// pillar sub-scores are held flat (design simplification, no pillar-level
/// uncertainty is modeled).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimelineYear {
    pub overall: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_upper: Option<f64>,
    pub financial: f64,
    pub social: f64,
    pub institutional: f64,
    pub infrastructure: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// One country row of the timeline output file (2019-2030).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimelineCountry {
    pub iso3: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub income: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timeline: BTreeMap<i32, TimelineYear>,
}
