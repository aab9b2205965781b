//! Percentile helpers producing the value a bar chart highlights.

/// Share of `population` at or below `value`, in percent.
///
/// Returns `None` for an empty population or a non-finite value.
pub fn percentile_rank(population: &[f64], value: f64) -> Option<f64> {
    if population.is_empty() || !value.is_finite() {
        return None;
    }
    let at_or_below = population.iter().filter(|&&v| v <= value).count();
    Some(at_or_below as f64 / population.len() as f64 * 100.0)
}

/// Mean of the known per-feature percentiles over all `feature_count` features.
///
/// Features without a result count as zero.
pub fn average_percentile(ranks: &[Option<f64>], feature_count: usize) -> Option<f64> {
    if feature_count == 0 {
        return None;
    }
    let sum: f64 = ranks.iter().flatten().sum();
    Some(sum / feature_count as f64)
}
