use super::{ChartFacade, Composition};
use crate::animation::{Easing, Transition};
use crate::axis_renderer::{label_font_size, AxisRenderer};
use crate::data_types::data::validate_values;
use crate::data_types::{tick_extent, LineChartConfig, LineChartProps};
use crate::error::{ChartError, Result};
use crate::layout::{HeightPolicy, PlotArea, ResponsiveLayout, WidthPolicy};
use crate::plot_types::LinePlot;
use crate::scales::{BandScale, ChartScale};
use crate::theme::ChartTheme;
use gpui::{point, Hsla, Point};

/// Two series over the same categories: the population and the user.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    props: LineChartProps,
    y_domain: (f64, f64),
    config: LineChartConfig,
}

impl LineChart {
    pub fn new(props: LineChartProps) -> Result<Self> {
        Self::with_config(props, LineChartConfig::default())
    }

    pub fn with_config(props: LineChartProps, config: LineChartConfig) -> Result<Self> {
        config.validate()?;
        let expected = props.x_axis_labels.len();
        for (what, line) in [("lineData1", &props.line_data1), ("lineData2", &props.line_data2)] {
            if line.len() != expected {
                return Err(ChartError::LengthMismatch {
                    what,
                    expected,
                    actual: line.len(),
                });
            }
            validate_values(line.iter().copied())?;
        }

        let y_domain = match (config.y_domain, tick_extent(&props.y_axis_labels)?) {
            (Some(domain), _) => domain,
            (None, Some(extent)) => extent,
            (None, None) => {
                let max = props
                    .lines()
                    .iter()
                    .flat_map(|line| line.iter().copied())
                    .fold(0.0, f64::max);
                ChartScale::new_linear((0.0, max), (1.0, 0.0)).nice(5).domain()
            }
        };

        Ok(Self {
            props,
            y_domain,
            config,
        })
    }

    pub fn props(&self) -> &LineChartProps {
        &self.props
    }

    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    pub fn x_scale(&self, area: &PlotArea) -> BandScale {
        BandScale::point(
            self.props.x_axis_labels.iter().cloned(),
            (0.0, area.inner_width()),
            self.config.point_padding,
        )
    }

    pub fn y_scale(&self, area: &PlotArea) -> ChartScale {
        ChartScale::vertical(self.y_domain, area.inner_height())
    }

    /// Plot-local vertices of every series, one per category.
    pub fn vertices(&self, area: &PlotArea) -> Vec<Vec<Point<f32>>> {
        let x = self.x_scale(area);
        let y = self.y_scale(area);
        self.props
            .lines()
            .iter()
            .map(|line| {
                line.iter()
                    .enumerate()
                    .filter_map(|(i, &value)| Some(point(x.center(i)?, y.map(value))))
                    .collect()
            })
            .collect()
    }
}

impl ChartFacade for LineChart {
    fn layout(&self) -> ResponsiveLayout {
        ResponsiveLayout {
            width: WidthPolicy::Container {
                fallback: self.config.width,
            },
            height: HeightPolicy::Fixed(self.config.height),
            margins: self.config.margins,
        }
    }

    fn compose(&self, area: &PlotArea, theme: &ChartTheme) -> Composition {
        let mut composition = Composition::new(*area, area.surface_size());
        let x = self.x_scale(area);
        let y = self.y_scale(area);
        let count = x.len();

        let mut axes = AxisRenderer::left(&y, &self.props.y_axis_labels, area, theme);
        axes.extend(AxisRenderer::bottom(
            &x,
            area,
            label_font_size(theme.tick_label_max_size, area.inner_width(), count),
            theme,
        ));
        axes.push(AxisRenderer::caption_left(
            &format!("{}\u{2192}", self.props.y_axis_label),
            area,
            theme.caption_max_size,
            theme,
        ));
        axes.push(AxisRenderer::caption_bottom(
            &format!("{}\u{2192}", self.props.x_axis_label),
            area,
            label_font_size(theme.caption_max_size, area.inner_width(), count),
            theme,
        ));
        composition.push_static(axes);

        let series: Vec<(Vec<Point<f32>>, Hsla)> = self
            .vertices(area)
            .into_iter()
            .enumerate()
            .map(|(i, points)| (points, theme.line_color(i)))
            .collect();
        let draw = Transition::new(self.config.duration()).with_easing(Easing::Linear);
        let fade = Transition::new(self.config.marker_fade()).with_easing(Easing::Linear);
        composition.push_plot(LinePlot::new(
            series,
            area,
            self.config.stroke_width,
            self.config.marker_radius,
            draw,
            fade,
        ));
        composition
    }

    fn has_data(&self) -> bool {
        !self.props.x_axis_labels.is_empty()
    }
}
