/// Percentile rank of `score` within the comparison set (0-100 scale):
/// the mean of the strict rank (fraction below) and the weak rank
/// (fraction at or below). This is the rank definition the published
/// weights were computed with; it puts a sample member at the median at
/// exactly 50, so its weight below is exactly 0.
///
/// An empty comparison set ranks at the median, so the weight below
/// degrades to 0 instead of blowing up.
pub fn percentile_of_score(score: f64, all_scores: &[f64]) -> f64 {
    if all_scores.is_empty() {
        return 50.0;
    }

    let below = all_scores.iter().filter(|&&v| v < score).count();
    let at_or_below = all_scores.iter().filter(|&&v| v <= score).count();
    ((below + at_or_below) as f64 / (2 * all_scores.len()) as f64) * 100.0
}

/// Zero percentile weight: emphasize distributional extremes.
/// 0 at the median, 1 at the 0th or 100th percentile. Used only to dampen
/// the innovation term inside the trend smoother; it never changes the
/// current-period score itself.
pub fn zero_percentile_weight(score: f64, all_scores: &[f64]) -> f64 {
    let percentile = percentile_of_score(score, all_scores);
    ((percentile - 50.0).abs() / 50.0).clamp(0.0, 1.0)
}
