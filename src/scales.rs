//! Coordinate mapping for the chart axes.
//!
//! `ChartScale` maps numeric values onto a pixel range (the y axis maps onto
//! `[inner_height, 0]` because pixel y grows downward). `BandScale` divides a
//! pixel range into one band per category, and doubles as a point scale when
//! built with [`BandScale::point`].

use d3rs::scale::{LinearScale, Scale as D3Scale};

#[derive(Clone)]
pub struct ChartScale {
    scale: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            scale,
            domain: (d_min, d_max),
            range,
        }
    }

    /// Builds the y scale of a plot: `domain.0` at the bottom, `domain.1` at the top.
    pub fn vertical(domain: (f64, f64), inner_height: f32) -> Self {
        Self::new_linear(domain, (inner_height, 0.0))
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.scale.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.scale.invert(pixel as f64).unwrap_or(self.domain.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }

    /// Rounds the domain outward to the step of the generated ticks.
    ///
    /// Only needed when ticks are derived automatically; explicit tick
    /// values are used as given.
    pub fn nice(&self, count: usize) -> Self {
        let ticks = self.ticks(count);
        if ticks.len() < 2 {
            return self.clone();
        }
        let step = ticks[1] - ticks[0];
        if step <= 0.0 || !step.is_finite() {
            return self.clone();
        }
        let (d_min, d_max) = self.domain;
        let nice_min = (d_min / step).floor() * step;
        let nice_max = (d_max / step).ceil() * step;
        Self::new_linear((nice_min, nice_max), self.range)
    }

    pub fn format_tick(&self, value: f64) -> String {
        format_number(value)
    }
}

/// Integers print without decimals, everything else loses its trailing zeros.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }
    let text = format!("{:.6}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Categorical scale with equal bands and configurable padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    align: f32,
    step: f32,
    start: f32,
    bandwidth: f32,
}

impl BandScale {
    /// Bands separated (and surrounded) by `padding` times the step.
    pub fn new<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        range: (f32, f32),
        padding: f32,
    ) -> Self {
        Self::with_paddings(labels, range, padding, padding)
    }

    /// Point scale: zero-width bands, outer padding expressed in steps.
    pub fn point<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        range: (f32, f32),
        padding: f32,
    ) -> Self {
        Self::with_paddings(labels, range, 1.0, padding)
    }

    pub fn with_paddings<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        range: (f32, f32),
        padding_inner: f32,
        padding_outer: f32,
    ) -> Self {
        let mut scale = Self {
            labels: labels.into_iter().map(Into::into).collect(),
            range,
            padding_inner: padding_inner.clamp(0.0, 1.0),
            padding_outer: padding_outer.max(0.0),
            align: 0.5,
            step: 0.0,
            start: range.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        scale
    }

    fn rescale(&mut self) {
        let n = self.labels.len() as f32;
        let (r0, r1) = self.range;
        let span = (r1 - r0).max(0.0);
        // max(1, ..) keeps a single category from dividing by zero
        let denom = (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.step = span / denom;
        self.start = r0 + (span - self.step * (n - self.padding_inner)) * self.align;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn band_start(&self, index: usize) -> Option<f32> {
        if index >= self.labels.len() {
            return None;
        }
        Some(self.start + self.step * index as f32)
    }

    pub fn center(&self, index: usize) -> Option<f32> {
        self.band_start(index).map(|x| x + self.bandwidth * 0.5)
    }

    /// Band start of a category, by label.
    pub fn position(&self, label: &str) -> Option<f32> {
        self.index_of(label).and_then(|i| self.band_start(i))
    }

    /// Index of the band covering `x`, padding excluded.
    pub fn band_at(&self, x: f32) -> Option<usize> {
        (0..self.labels.len()).find(|&i| {
            self.band_start(i)
                .is_some_and(|start| x >= start && x <= start + self.bandwidth)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(25.0), "25");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-12.125), "-12.125");
    }

    #[test]
    fn test_point_scale_centers() {
        let scale = BandScale::point(["A", "B", "C"], (0.0, 300.0), 0.5);
        assert_eq!(scale.bandwidth(), 0.0);
        assert!((scale.center(0).unwrap() - 50.0).abs() < 1e-4);
        assert!((scale.center(1).unwrap() - 150.0).abs() < 1e-4);
        assert!((scale.center(2).unwrap() - 250.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_band_scale() {
        let scale = BandScale::new(Vec::<String>::new(), (0.0, 100.0), 0.4);
        assert!(scale.is_empty());
        assert!(scale.band_start(0).is_none());
        assert!(scale.band_at(50.0).is_none());
    }
}
