use crate::models::ForecastPoint;

/// Innovation gain applied to the level state.
pub const LEVEL_GAIN: f64 = 0.3;
/// Innovation gain applied to the trend state.
pub const TREND_GAIN: f64 = 0.1;
/// Observation noise used to widen the forecast interval with horizon.
pub const SIGMA_OBS: f64 = 0.05;

const Z_95: f64 = 1.96;

/// Smoothed state after one pass over a country's history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FittedState {
    /// Current smoothed score estimate.
    pub level: f64,
    /// Estimated yearly drift.
    pub trend: f64,
}

/// Seam for the forecasting model. The default implementation below uses
/// fixed smoothing gains; a properly fit local-linear-trend Kalman filter
/// can be swapped in without changing the call contract, as long as it
/// keeps a single trend term and non-decreasing forecast uncertainty.
pub trait TrendModel {
    /// Estimate level and trend from an observed history.
    /// `weights[t-1]` dampens the innovation of observation `t`.
    fn fit(&self, history: &[f64], weights: &[f64]) -> FittedState;

    /// Project `horizon` years ahead with 95% interval bounds,
    /// everything clamped to [0, 1].
    fn forecast(&self, state: &FittedState, horizon: usize) -> Vec<ForecastPoint>;
}

/// Local level + trend smoother with fixed gains — a deterministic,
/// explainable stand-in for a full structural time series fit.
#[derive(Debug, Clone, Copy)]
pub struct LevelTrendSmoother {
    pub level_gain: f64,
    pub trend_gain: f64,
    pub sigma_obs: f64,
}

impl Default for LevelTrendSmoother {
    fn default() -> Self {
        Self {
            level_gain: LEVEL_GAIN,
            trend_gain: TREND_GAIN,
            sigma_obs: SIGMA_OBS,
        }
    }
}

impl TrendModel for LevelTrendSmoother {
    fn fit(&self, history: &[f64], weights: &[f64]) -> FittedState {
        let mut level = match history.first() {
            Some(&first) => first,
            // No usable history: degrade to the all-zero state instead of
            // erroring, so the country still appears in the output.
            None => return FittedState::default(),
        };
        let mut trend = 0.0;

        for (t, &observed) in history.iter().enumerate().skip(1) {
            let weight = weights.get(t - 1).copied().unwrap_or(1.0);

            let predicted = level + trend;
            let innovation = (observed - predicted) * weight;

            level = predicted + self.level_gain * innovation;
            trend += self.trend_gain * innovation;
        }

        FittedState { level, trend }
    }

    fn forecast(&self, state: &FittedState, horizon: usize) -> Vec<ForecastPoint> {
        (1..=horizon)
            .map(|h| {
                let mean = state.level + state.trend * h as f64;
                let std = self.sigma_obs * (h as f64).sqrt();

                ForecastPoint {
                    mean: mean.clamp(0.0, 1.0),
                    lower: (mean - Z_95 * std).clamp(0.0, 1.0),
                    upper: (mean + Z_95 * std).clamp(0.0, 1.0),
                }
            })
            .collect()
    }
}
