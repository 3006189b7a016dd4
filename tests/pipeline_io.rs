use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;

use resilience_engine::core::pipeline;
use resilience_engine::models::{CountryForecast, EntryKind, ForecastPoint, TimelineCountry};

const INPUT_JSON: &str = r#"[
    {
        "iso3": "CHE", "name": "Switzerland", "region": "Europe & Central Asia",
        "income": "High income", "lat": 46.8, "lon": 8.2,
        "score": 0.78, "financial": 0.71, "social": 0.82,
        "institutional": 0.88, "infrastructure": 0.71,
        "last_updated": "2025-10-06"
    },
    {
        "iso3": "KEN", "name": "Kenya", "region": "Sub-Saharan Africa",
        "income": "Lower middle income", "lat": -0.0, "lon": 37.9,
        "score": 0.41, "financial": 0.38, "social": 0.42,
        "institutional": 0.39, "infrastructure": 0.45
    },
    {
        "iso3": "PRK", "name": "Korea, Dem. People's Rep.", "region": "East Asia & Pacific",
        "income": "Low income", "lat": null, "lon": null,
        "score": 0.0, "financial": 0.0, "social": 0.0,
        "institutional": 0.0, "infrastructure": 0.0
    }
]"#;

#[test]
fn full_pipeline_over_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input_path = dir.path().join("resilience_data_complete.json");
    let forecast_path = dir.path().join("resilience_forecasts_2025_2030.json");
    let timeline_path = dir.path().join("resilience_timeline_2019_2030.json");

    fs::write(&input_path, INPUT_JSON).unwrap();

    // 1. Load the input dataset
    let countries = pipeline::load_countries(&input_path).unwrap();
    assert_eq!(countries.len(), 3);

    // 2. Forecast and write the forecast artifact
    let mut rng = StdRng::seed_from_u64(20251006);
    let forecasts = pipeline::run_forecast(&countries, &mut rng);
    pipeline::save_json(&forecast_path, &forecasts).unwrap();

    // Row-count parity: the no-data country is carried through, not dropped
    assert_eq!(forecasts.len(), countries.len());

    // 3. Forecast file round-trips losslessly
    let reloaded: Vec<CountryForecast> = pipeline::load_forecasts(&forecast_path).unwrap();
    assert_eq!(reloaded, forecasts);

    // 4. The zero-score country appears in every forecast year as zeros
    let prk = reloaded.iter().find(|f| f.iso3 == "PRK").unwrap();
    assert_eq!(prk.forecasts.len(), 5);
    for point in prk.forecasts.values() {
        assert_eq!(*point, ForecastPoint::zero());
    }

    // 5. Scored countries get five clamped forecast years
    let che = reloaded.iter().find(|f| f.iso3 == "CHE").unwrap();
    let years: Vec<i32> = che.forecasts.keys().copied().collect();
    assert_eq!(years, vec![2026, 2027, 2028, 2029, 2030]);
    for point in che.forecasts.values() {
        assert!(point.lower <= point.mean && point.mean <= point.upper);
        assert!(point.upper <= 1.0 && point.lower >= 0.0);
    }

    // Interval widths grow with horizon. Checked on the mid-scored
    // country, whose bands stay clear of the [0,1] clamp
    let ken_forecast = reloaded.iter().find(|f| f.iso3 == "KEN").unwrap();
    let widths: Vec<f64> = ken_forecast.forecasts.values().map(|p| p.upper - p.lower).collect();
    for pair in widths.windows(2) {
        assert!(pair[1] > pair[0], "widths must grow: {:?}", widths);
    }

    // 6. Timeline composition and round-trip
    let timeline = pipeline::run_timeline(&countries, &forecasts, &mut rng);
    pipeline::save_json(&timeline_path, &timeline).unwrap();
    let reloaded: Vec<TimelineCountry> = {
        let raw = fs::read_to_string(&timeline_path).unwrap();
        serde_json::from_str(&raw).unwrap()
    };
    assert_eq!(reloaded, timeline);

    for country in &reloaded {
        assert_eq!(country.timeline.len(), 12);
        for (&year, entry) in &country.timeline {
            let expected = if year <= 2025 { EntryKind::Historical } else { EntryKind::Forecast };
            assert_eq!(entry.kind, expected, "{} year {}", country.iso3, year);
            assert!((0.0..=1.0).contains(&entry.overall));
        }
    }

    // The pivot year carries the real current score
    let ken = reloaded.iter().find(|t| t.iso3 == "KEN").unwrap();
    assert_eq!(ken.timeline[&2025].overall, 0.41);
}

#[test]
fn load_errors_carry_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = pipeline::load_countries(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));

    let malformed = dir.path().join("bad.json");
    fs::write(&malformed, "{not json").unwrap();
    let err = pipeline::load_countries(&malformed).unwrap_err();
    assert!(format!("{:#}", err).contains("bad.json"));
}
