use super::{ChartFacade, Composition};
use crate::animation::{Easing, Transition};
use crate::axis_renderer::{label_font_size, AxisRenderer};
use crate::data_types::{tick_extent, BarChartConfig, BarChartProps, BarHighlight, Series};
use crate::error::{ChartError, Result};
use crate::layout::{HeightPolicy, PlotArea, ResponsiveLayout, WidthPolicy};
use crate::plot_types::BarPlot;
use crate::scales::{BandScale, ChartScale};
use crate::theme::ChartTheme;
use gpui::Point;
use tracing::warn;

/// Bar chart of percentages per range, emphasizing the user's band.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    data: Series,
    y_ticks: Vec<f64>,
    x_labels: Vec<String>,
    y_domain: (f64, f64),
    highlight: BarHighlight,
    config: BarChartConfig,
}

impl BarChart {
    pub fn new(props: BarChartProps) -> Result<Self> {
        Self::with_config(props, BarChartConfig::default())
    }

    pub fn with_config(props: BarChartProps, mut config: BarChartConfig) -> Result<Self> {
        if let Some(width) = props.width {
            config.width = width;
        }
        if let Some(height) = props.height {
            config.height = height;
        }
        config.validate()?;
        props.data.validate()?;

        if props.data.len() != props.x_axis_labels.len() {
            return Err(ChartError::LengthMismatch {
                what: "bar data",
                expected: props.x_axis_labels.len(),
                actual: props.data.len(),
            });
        }
        if let Some(unknown) = props
            .data
            .labels()
            .find(|label| !props.x_axis_labels.iter().any(|x| x == label))
        {
            return Err(ChartError::UnknownCategory(unknown.to_string()));
        }

        let y_domain = match (config.y_domain, tick_extent(&props.y_axis_labels)?) {
            (Some(domain), _) => domain,
            (None, Some(extent)) => extent,
            (None, None) => {
                let max = props.data.values().fold(0.0, f64::max);
                let nice = ChartScale::new_linear((0.0, max), (1.0, 0.0)).nice(5);
                nice.domain()
            }
        };
        if !(y_domain.0.is_finite() && y_domain.1.is_finite()) {
            return Err(ChartError::InvalidTicks);
        }

        Ok(Self {
            data: props.data,
            y_ticks: props.y_axis_labels,
            x_labels: props.x_axis_labels,
            y_domain,
            highlight: BarHighlight::user_value(props.user_value_data),
            config,
        })
    }

    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn highlight(&self) -> BarHighlight {
        self.highlight
    }

    pub fn set_user_value(&mut self, value: f64) {
        self.highlight.user_value = Some(value);
    }

    pub fn x_scale(&self, area: &PlotArea) -> BandScale {
        BandScale::new(
            self.x_labels.iter().cloned(),
            (0.0, area.inner_width()),
            self.config.band_padding,
        )
    }

    pub fn y_scale(&self, area: &PlotArea) -> ChartScale {
        ChartScale::vertical(self.y_domain, area.inner_height())
    }

    /// Label of the emphasized band, if any.
    pub fn emphasized_label(&self) -> Option<&str> {
        self.data
            .points
            .iter()
            .enumerate()
            .find(|(i, d)| crate::plot_types::bar::is_emphasized(*i, &d.label, &self.highlight))
            .map(|(_, d)| d.label.as_str())
    }
}

impl ChartFacade for BarChart {
    fn layout(&self) -> ResponsiveLayout {
        ResponsiveLayout {
            width: WidthPolicy::Container {
                fallback: self.config.width,
            },
            height: HeightPolicy::Breakpoint {
                max_width: self.config.compact_breakpoint,
                compact: self.config.compact_height,
                regular: self.config.height,
            },
            margins: self.config.margins,
        }
    }

    fn compose(&self, area: &PlotArea, theme: &ChartTheme) -> Composition {
        let mut composition = Composition::new(*area, area.surface_size());
        let x = self.x_scale(area);
        let y = self.y_scale(area);
        let count = self.data.len();

        let mut axes = AxisRenderer::left(&y, &self.y_ticks, area, theme);
        axes.push(AxisRenderer::caption_left(
            &self.config.y_caption,
            area,
            theme.caption_max_size,
            theme,
        ));
        axes.push(AxisRenderer::caption_bottom(
            &self.config.x_caption,
            area,
            label_font_size(theme.caption_max_size, area.inner_width(), count),
            theme,
        ));
        axes.extend(AxisRenderer::bottom(
            &x,
            area,
            label_font_size(theme.tick_label_max_size, area.inner_width(), count),
            theme,
        ));
        composition.push_static(axes);

        let bars = BarPlot::layout(&self.data, &x, &y, area.inner_height(), &self.highlight)
            .unwrap_or_else(|err| {
                warn!(%err, "bar layout failed");
                Vec::new()
            });
        let transition = Transition::new(self.config.duration())
            .with_stagger(self.config.stagger())
            .with_easing(Easing::CubicInOut);
        composition.push_plot(
            BarPlot::new(bars, *area, transition).with_colors(theme.bar_base, theme.bar_emphasis),
        );
        composition
    }

    fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    fn hit_test(&self, area: &PlotArea, position: Point<f32>) -> Option<usize> {
        let local_y = position.y - area.margins.top;
        if local_y < 0.0 || local_y > area.inner_height() {
            return None;
        }
        let label_index = self.x_scale(area).band_at(position.x - area.margins.left)?;
        let label = self.x_labels.get(label_index)?;
        self.data.labels().position(|l| l == label)
    }

    fn set_hovered(&mut self, index: Option<usize>) -> bool {
        if self.highlight.hovered == index {
            return false;
        }
        self.highlight.hovered = index;
        true
    }
}
