use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// One category of a bar chart or one slice of a donut.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered `(label, value)` pairs supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    pub points: Vec<Datum>,
}

impl Series {
    pub fn new(points: Vec<Datum>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|d| d.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|d| d.value)
    }

    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// Rejects NaN, infinite and negative values.
    pub fn validate(&self) -> Result<()> {
        validate_values(self.values())
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(l, v)| Datum::new(l, v)).collect())
    }
}

pub(crate) fn validate_values(values: impl IntoIterator<Item = f64>) -> Result<()> {
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidValue { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_negative() {
        let series: Series = [("a", 1.0), ("b", -2.0)].into_iter().collect();
        assert_eq!(
            series.validate(),
            Err(ChartError::InvalidValue {
                index: 1,
                value: -2.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let series: Series = [("a", f64::NAN)].into_iter().collect();
        assert!(series.validate().is_err());
    }

    #[test]
    fn test_total() {
        let series: Series = [("Diabetic", 25.0), ("Non-Diabetic", 75.0)].into_iter().collect();
        assert_eq!(series.total(), 100.0);
        assert_eq!(series.labels().collect::<Vec<_>>(), ["Diabetic", "Non-Diabetic"]);
    }
}
