use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const BAR: Margins = Margins::new(20.0, 30.0, 40.0, 30.0);
    pub const LINE: Margins = Margins::new(20.0, 30.0, 40.0, 40.0);
    pub const ZERO: Margins = Margins::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn validate(&self) -> Result<()> {
        let all = [self.top, self.right, self.bottom, self.left];
        if all.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ChartError::InvalidGeometry(format!(
                "margins must be finite and non-negative: {:?}",
                self
            )));
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::ZERO
    }
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidGeometry(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn fraction(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ChartError::InvalidGeometry(format!(
            "{name} must lie in [0, 1], got {value}"
        )))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    /// Width used until the container has been measured.
    pub width: f32,
    pub height: f32,
    /// Height used while the viewport is at most `compact_breakpoint` wide.
    pub compact_height: f32,
    pub compact_breakpoint: f32,
    pub margins: Margins,
    /// Fraction of a band step left empty between bars.
    pub band_padding: f32,
    /// Value range of the y axis; `None` derives it from the tick values.
    pub y_domain: Option<(f64, f64)>,
    pub y_caption: String,
    pub x_caption: String,
    pub duration_ms: u64,
    pub stagger_ms: u64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            compact_height: 200.0,
            compact_breakpoint: 480.0,
            margins: Margins::BAR,
            band_padding: 0.4,
            y_domain: Some((0.0, 100.0)),
            y_caption: "Percentages \u{2192}".to_string(),
            x_caption: "Range \u{2192}".to_string(),
            duration_ms: 2000,
            stagger_ms: 100,
        }
    }
}

impl BarChartConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("compact_height", self.compact_height)?;
        fraction("band_padding", self.band_padding)?;
        self.margins.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
    /// Outer padding of the point scale, in steps.
    pub point_padding: f32,
    pub y_domain: Option<(f64, f64)>,
    pub stroke_width: f32,
    pub marker_radius: f32,
    pub duration_ms: u64,
    pub marker_fade_ms: u64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            margins: Margins::LINE,
            point_padding: 0.5,
            y_domain: Some((0.0, 100.0)),
            stroke_width: 3.0,
            marker_radius: 4.0,
            duration_ms: 2000,
            marker_fade_ms: 300,
        }
    }
}

impl LineChartConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn marker_fade(&self) -> Duration {
        Duration::from_millis(self.marker_fade_ms)
    }

    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("stroke_width", self.stroke_width)?;
        if !(self.point_padding.is_finite() && self.point_padding >= 0.0) {
            return Err(ChartError::InvalidGeometry(format!(
                "point_padding must be non-negative, got {}",
                self.point_padding
            )));
        }
        self.margins.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutChartConfig {
    pub width: f32,
    pub height: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Number of slices the donut requires; `None` accepts any non-empty series.
    pub slice_count: Option<usize>,
    pub stroke_width: f32,
    pub heading: String,
    pub heading_height: f32,
    pub show_legend: bool,
    pub legend_height: f32,
    pub spin_degrees: f32,
    pub duration_ms: u64,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 120.0,
            inner_radius: 25.0,
            outer_radius: 45.0,
            slice_count: Some(2),
            stroke_width: 2.0,
            heading: "Analysis".to_string(),
            heading_height: 36.0,
            show_legend: true,
            legend_height: 20.0,
            spin_degrees: 360.0,
            duration_ms: 2000,
        }
    }
}

impl DonutChartConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("outer_radius", self.outer_radius)?;
        if !(self.inner_radius.is_finite() && self.inner_radius >= 0.0) {
            return Err(ChartError::InvalidGeometry(format!(
                "inner_radius must be non-negative, got {}",
                self.inner_radius
            )));
        }
        if self.outer_radius <= self.inner_radius {
            return Err(ChartError::InvalidGeometry(format!(
                "outer_radius ({}) must exceed inner_radius ({})",
                self.outer_radius, self.inner_radius
            )));
        }
        Ok(())
    }
}
