use std::collections::HashMap;

use chrono::Utc;

use crate::indicators::registry::Registry;
use crate::indicators::Pillar;
use crate::models::{CountryRecord, IndicatorValue, PillarScores};

/// Round to 3 decimals, the precision of every published score.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Normalize a raw indicator value to a 0-1 "goodness" scale.
///
/// Missing (or NaN) values return the 0 sentinel — "absent", conflated with
/// "worst possible". Known wart, kept for compatibility with the published
/// datasets; see DESIGN.md.
///
/// With `reverse` the direction flips (lower raw value = better score).
/// Output is always clamped to [0, 1], even for inputs outside the bounds.
pub fn normalize_score(value: Option<f64>, min_val: f64, max_val: f64, reverse: bool) -> f64 {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return 0.0,
    };

    let scaled = (value - min_val) / (max_val - min_val);
    let normalized = if reverse { 1.0 - scaled } else { scaled };

    normalized.clamp(0.0, 1.0)
}

/// Normalize one indicator by its registry bounds.
/// Indicators without calibrated bounds contribute a fixed neutral 0.5
/// whenever a value is present (observed behavior of the source pipeline).
pub fn score_indicator(slug: &str, value: Option<f64>) -> f64 {
    if value.map_or(true, |v| !v.is_finite()) {
        return 0.0;
    }
    match Registry::get_metadata(slug).and_then(|m| m.bounds) {
        Some(b) => normalize_score(value, b.min, b.max, b.reverse),
        None => 0.5,
    }
}

/// Average the available indicator scores of one pillar.
///
/// Scores of exactly 0 are treated as "no data" and dropped before
/// averaging — which means a legitimately worst-possible 0.0 is
/// indistinguishable from missing and silently excluded. Preserved
/// as-is from the source pipeline (see DESIGN.md).
pub fn aggregate_pillar(scores: &[f64]) -> f64 {
    let present: Vec<f64> = scores.iter().copied().filter(|&s| s != 0.0).collect();
    if present.is_empty() {
        return 0.0;
    }
    present.iter().sum::<f64>() / present.len() as f64
}

/// Overall resilience score: unconditional mean of the four pillars.
/// Note the asymmetry with `aggregate_pillar`: a pillar with no data still
/// counts as 0 here. Also preserved as observed (see DESIGN.md).
pub fn overall_score(pillars: &PillarScores) -> f64 {
    pillars.mean()
}

/// Reduce raw measurements to the most recent value per (country, indicator).
/// The World Bank returns several years per series; only the latest one
/// feeds the scores.
pub fn latest_values(values: &[IndicatorValue]) -> HashMap<String, HashMap<String, IndicatorValue>> {
    let mut result: HashMap<String, HashMap<String, IndicatorValue>> = HashMap::new();

    for iv in values {
        if !iv.value.is_finite() {
            continue;
        }
        let per_country = result.entry(iv.country_code.clone()).or_default();
        match per_country.get(&iv.indicator_id) {
            Some(existing) if existing.year >= iv.year => {}
            _ => {
                per_country.insert(iv.indicator_id.clone(), iv.clone());
            }
        }
    }

    result
}

/// Full indicator → pillar path for one country.
/// `values` is keyed by indicator slug; absent indicators simply don't
/// contribute.
pub fn score_country(values: &HashMap<String, f64>) -> PillarScores {
    let mut pillars = PillarScores::default();

    for pillar in Pillar::ALL {
        let scores: Vec<f64> = Registry::for_pillar(pillar)
            .iter()
            .filter_map(|meta| values.get(&meta.slug).map(|&v| score_indicator(&meta.slug, Some(v))))
            .collect();

        let score = aggregate_pillar(&scores);
        match pillar {
            Pillar::Financial => pillars.financial = score,
            Pillar::Social => pillars.social = score,
            Pillar::Institutional => pillars.institutional = score,
            Pillar::Infrastructure => pillars.infrastructure = score,
        }
    }

    pillars
}

/// Assemble the published per-country row from its pillar scores, rounded
/// to publication precision and stamped with the assembly date.
/// Coordinates and labels come from the (external) country metadata merge;
/// countries missing from it carry empty labels and null coordinates.
pub fn build_country_record(
    iso3: &str,
    name: &str,
    region: &str,
    income: &str,
    lat: Option<f64>,
    lon: Option<f64>,
    pillars: &PillarScores,
) -> CountryRecord {
    CountryRecord {
        iso3: iso3.to_string(),
        name: name.to_string(),
        region: region.to_string(),
        income: income.to_string(),
        lat,
        lon,
        score: round3(overall_score(pillars)),
        financial: round3(pillars.financial),
        social: round3(pillars.social),
        institutional: round3(pillars.institutional),
        infrastructure: round3(pillars.infrastructure),
        last_updated: Some(Utc::now().format("%Y-%m-%d").to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range() {
        // Midpoint maps to 0.5
        assert!((normalize_score(Some(100.0), 0.0, 200.0, false) - 0.5).abs() < 1e-9);
        // Values outside the bounds clamp, never escape [0, 1]
        assert_eq!(normalize_score(Some(500.0), 0.0, 200.0, false), 1.0);
        assert_eq!(normalize_score(Some(-50.0), 0.0, 200.0, false), 0.0);
        assert_eq!(normalize_score(Some(500.0), 0.0, 200.0, true), 0.0);
        assert_eq!(normalize_score(Some(-50.0), 0.0, 200.0, true), 1.0);
    }

    #[test]
    fn test_reverse_endpoints() {
        // reverse=true: min bound is the best possible raw value
        assert_eq!(normalize_score(Some(25.0), 25.0, 65.0, true), 1.0);
        assert_eq!(normalize_score(Some(65.0), 25.0, 65.0, true), 0.0);
    }

    #[test]
    fn test_missing_is_sentinel_zero() {
        assert_eq!(normalize_score(None, 0.0, 100.0, false), 0.0);
        assert_eq!(normalize_score(Some(f64::NAN), 0.0, 100.0, false), 0.0);
        assert_eq!(score_indicator("gini", None), 0.0);
    }

    #[test]
    fn test_score_indicator_uses_registry_bounds() {
        // gini 45 in (25, 65, reverse) -> 1 - 0.5 = 0.5
        assert!((score_indicator("gini", Some(45.0)) - 0.5).abs() < 1e-9);
        // WGI 0.0 in (-2.5, 2.5) -> 0.5
        assert!((score_indicator("rule_of_law", Some(0.0)) - 0.5).abs() < 1e-9);
        // Unbounded indicators are neutral when present
        assert_eq!(score_indicator("gdp", Some(1.0e12)), 0.5);
    }

    #[test]
    fn test_aggregate_pillar_drops_sentinel_zeros() {
        assert!((aggregate_pillar(&[0.4, 0.0, 0.6]) - 0.5).abs() < 1e-9);
        assert_eq!(aggregate_pillar(&[0.0, 0.0]), 0.0);
        assert_eq!(aggregate_pillar(&[]), 0.0);
    }

    #[test]
    fn test_overall_counts_empty_pillars() {
        // Unlike the pillar step, a zero pillar is NOT filtered here
        let pillars = PillarScores { financial: 0.8, social: 0.0, institutional: 0.8, infrastructure: 0.0 };
        assert!((overall_score(&pillars) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_latest_values_keeps_most_recent_year() {
        let values = vec![
            IndicatorValue { country_code: "KEN".into(), indicator_id: "internet".into(), year: 2021, value: 29.0 },
            IndicatorValue { country_code: "KEN".into(), indicator_id: "internet".into(), year: 2023, value: 35.0 },
            IndicatorValue { country_code: "KEN".into(), indicator_id: "internet".into(), year: 2022, value: 32.0 },
        ];
        let latest = latest_values(&values);
        assert_eq!(latest["KEN"]["internet"].year, 2023);
        assert_eq!(latest["KEN"]["internet"].value, 35.0);
    }

    #[test]
    fn test_score_country_partial_data() {
        let mut values = HashMap::new();
        values.insert("electricity".to_string(), 100.0); // -> 1.0
        values.insert("internet".to_string(), 50.0); // -> 0.5
        let pillars = score_country(&values);

        assert!((pillars.infrastructure - 0.75).abs() < 1e-9);
        // Pillars with no indicators at all get the 0 sentinel
        assert_eq!(pillars.financial, 0.0);
        assert_eq!(pillars.social, 0.0);
        assert_eq!(pillars.institutional, 0.0);
        // ...and still count in the overall mean
        assert!((overall_score(&pillars) - 0.1875).abs() < 1e-9);
    }

    #[test]
    fn test_build_country_record() {
        let pillars = PillarScores { financial: 0.5, social: 0.7, institutional: 0.6, infrastructure: 0.4 };
        let record = build_country_record("NLD", "Netherlands", "Europe & Central Asia",
            "High income", Some(52.1), Some(5.3), &pillars);

        assert_eq!(record.score, 0.55);
        assert_eq!(record.social, 0.7);
        assert!(record.last_updated.is_some());
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(0.9996), 1.0);
    }
}
