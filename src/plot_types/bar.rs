use super::PlotRenderer;
use crate::animation::{lerp, FrameTime, Transition};
use crate::data_types::{BandRange, BarHighlight, Series};
use crate::error::{ChartError, Result};
use crate::layout::PlotArea;
use crate::scales::{BandScale, ChartScale};
use crate::scene::{SceneGraph, SceneNode};
use gpui::{point, size, Bounds, Hsla};
use std::time::Duration;

/// Final geometry of one bar, in plot-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    pub label: String,
    pub value: f64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub emphasized: bool,
}

/// Whether `label` should carry the emphasis color for `highlight`.
pub fn is_emphasized(index: usize, label: &str, highlight: &BarHighlight) -> bool {
    if highlight.hovered == Some(index) {
        return true;
    }
    highlight.user_value.is_some_and(|value| {
        BandRange::parse(label).is_some_and(|range| range.contains(value))
    })
}

/// Bar plot type
pub struct BarPlot {
    pub bars: Vec<BarShape>,
    pub area: PlotArea,
    pub base_color: Hsla,
    pub emphasis_color: Hsla,
    pub transition: Transition,
}

impl BarPlot {
    /// Lays out one bar per datum. Every label must be a category of `x`.
    pub fn layout(
        series: &Series,
        x: &BandScale,
        y: &ChartScale,
        inner_height: f32,
        highlight: &BarHighlight,
    ) -> Result<Vec<BarShape>> {
        series
            .points
            .iter()
            .enumerate()
            .map(|(i, datum)| {
                let band = x
                    .position(&datum.label)
                    .ok_or_else(|| ChartError::UnknownCategory(datum.label.clone()))?;
                // Values at or below the domain floor collapse onto the baseline
                let height = (inner_height - y.map(datum.value)).max(0.0);
                Ok(BarShape {
                    label: datum.label.clone(),
                    value: datum.value,
                    x: band,
                    y: inner_height - height,
                    width: x.bandwidth(),
                    height,
                    emphasized: is_emphasized(i, &datum.label, highlight),
                })
            })
            .collect()
    }

    pub fn new(bars: Vec<BarShape>, area: PlotArea, transition: Transition) -> Self {
        Self {
            bars,
            area,
            base_color: gpui::blue(),
            emphasis_color: gpui::blue(),
            transition,
        }
    }

    pub fn with_colors(mut self, base: Hsla, emphasis: Hsla) -> Self {
        self.base_color = base;
        self.emphasis_color = emphasis;
        self
    }

    /// Bar geometry at `frame`: rising from the baseline, one after another.
    pub fn bar_at(&self, index: usize, frame: FrameTime) -> Option<BarShape> {
        let bar = self.bars.get(index)?;
        let t = self.transition.progress(frame, index);
        let baseline = self.area.inner_height();
        Some(BarShape {
            y: lerp(baseline, bar.y, t),
            height: lerp(0.0, bar.height, t),
            ..bar.clone()
        })
    }
}

impl PlotRenderer for BarPlot {
    fn render(&self, frame: FrameTime, scene: &mut SceneGraph) {
        for index in 0..self.bars.len() {
            let Some(bar) = self.bar_at(index, frame) else {
                continue;
            };
            let origin = self.area.to_surface(point(bar.x, bar.y));
            let fill = if bar.emphasized {
                self.emphasis_color
            } else {
                self.base_color
            };
            scene.push(SceneNode::Rect {
                bounds: Bounds::new(origin, size(bar.width, bar.height)),
                fill,
            });
        }
    }

    fn settle_time(&self) -> Duration {
        self.transition.total(self.bars.len())
    }
}
