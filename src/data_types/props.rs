//! Call-time parameters of the three chart facades.
//!
//! Field names follow the host's JSON (camelCase) so dashboards can hand
//! over their payloads unchanged.

use super::data::{Datum, Series};
use super::percentile::average_percentile;
use eyre::{Result, WrapErr};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    serde_json::from_str(json).wrap_err_with(|| format!("failed to parse {what}"))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartProps {
    pub data: Series,
    pub y_axis_labels: Vec<f64>,
    pub x_axis_labels: Vec<String>,
    pub user_value_data: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl BarChartProps {
    /// Props whose x axis lists the series labels in order.
    pub fn from_series(data: Series, y_axis_labels: Vec<f64>, user_value_data: f64) -> Self {
        let x_axis_labels = data.labels().map(str::to_string).collect();
        Self {
            data,
            y_axis_labels,
            x_axis_labels,
            user_value_data,
            width: None,
            height: None,
        }
    }

    /// Emphasizes the band holding the user's mean percentile over
    /// `feature_count` features. Features without a rank count as zero.
    pub fn with_user_percentiles(mut self, ranks: &[Option<f64>], feature_count: usize) -> Self {
        self.user_value_data = average_percentile(ranks, feature_count).unwrap_or(0.0);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        parse(json, "bar chart props")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartProps {
    pub x_axis_labels: Vec<String>,
    pub y_axis_labels: Vec<f64>,
    pub line_data1: Vec<f64>,
    pub line_data2: Vec<f64>,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

impl LineChartProps {
    pub fn from_json(json: &str) -> Result<Self> {
        parse(json, "line chart props")
    }

    pub fn lines(&self) -> [&[f64]; 2] {
        [&self.line_data1, &self.line_data2]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutChartProps {
    pub data: Vec<Datum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f32>,
    #[serde(default)]
    pub is_grayed_out: bool,
    #[serde(default)]
    pub is_heading_required: bool,
}

impl DonutChartProps {
    pub fn new(data: Vec<Datum>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        parse(json, "donut chart props")
    }

    pub fn grayed_out(mut self, grayed_out: bool) -> Self {
        self.is_grayed_out = grayed_out;
        self
    }
}
