use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Left,
    Bottom,
}

/// Inclusive numeric range encoded in a category label such as `"21-30"`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandRange {
    pub start: f64,
    pub end: f64,
}

impl BandRange {
    /// Parses `"<start>-<end>"`. A leading minus belongs to the start value.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let split_at = label
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)?;
        let start = label[..split_at].trim().parse::<f64>().ok()?;
        let end = label[split_at + 1..].trim().parse::<f64>().ok()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Label of the first band whose range contains `value`.
pub fn band_label_for<'a>(
    value: f64,
    labels: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    labels
        .into_iter()
        .find(|label| BandRange::parse(label).is_some_and(|r| r.contains(value)))
}

/// Explicit y tick values must be finite; their extent becomes the y domain.
pub fn tick_extent(ticks: &[f64]) -> Result<Option<(f64, f64)>> {
    if ticks.is_empty() {
        return Ok(None);
    }
    if ticks.iter().any(|t| !t.is_finite()) {
        return Err(ChartError::InvalidTicks);
    }
    let min = ticks.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return Err(ChartError::InvalidTicks);
    }
    Ok(Some((min, max)))
}
