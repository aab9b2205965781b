use super::{ChartFacade, Composition};
use crate::animation::{Easing, Transition};
use crate::data_types::data::validate_values;
use crate::data_types::{Datum, DonutChartConfig, DonutChartProps, Margins};
use crate::error::{ChartError, Result};
use crate::layout::{HeightPolicy, PlotArea, ResponsiveLayout, WidthPolicy};
use crate::plot_types::{pie, DonutPlot};
use crate::scales::format_number;
use crate::scene::{SceneNode, TextAnchor, TextNode};
use crate::theme::ChartTheme;
use gpui::{point, size, Bounds};

const SWATCH_SIZE: f32 = 8.0;
const SWATCH_GAP: f32 = 4.0;

/// Two-slice ring comparing one feature against the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutChart {
    data: Vec<Datum>,
    grayed_out: bool,
    heading_required: bool,
    config: DonutChartConfig,
}

impl DonutChart {
    pub fn new(props: DonutChartProps) -> Result<Self> {
        Self::with_config(props, DonutChartConfig::default())
    }

    pub fn with_config(props: DonutChartProps, mut config: DonutChartConfig) -> Result<Self> {
        if let Some(expected) = config.slice_count {
            if props.data.len() != expected {
                return Err(ChartError::SliceCount {
                    expected,
                    actual: props.data.len(),
                });
            }
        }
        validate_values(props.data.iter().map(|d| d.value))?;

        if let Some(width) = props.width {
            config.width = width;
        }
        if let Some(height) = props.height {
            config.height = height;
        }
        if let Some(inner) = props.inner_radius {
            config.inner_radius = inner;
        }
        if let Some(outer) = props.outer_radius {
            config.outer_radius = outer;
        }
        config.validate()?;

        Ok(Self {
            data: props.data,
            grayed_out: props.is_grayed_out,
            heading_required: props.is_heading_required,
            config,
        })
    }

    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    pub fn grayed_out(&self) -> bool {
        self.grayed_out
    }

    pub fn config(&self) -> &DonutChartConfig {
        &self.config
    }

    fn heading_offset(&self) -> f32 {
        if self.heading_required {
            self.config.heading_height
        } else {
            0.0
        }
    }

    fn legend_height(&self) -> f32 {
        if self.config.show_legend {
            self.config.legend_height
        } else {
            0.0
        }
    }

    fn legend(&self, top: f32, theme: &ChartTheme) -> Vec<SceneNode> {
        let colors = theme.donut_colors(self.grayed_out);
        let font_size = theme.legend_label_size;
        let column = self.config.width / self.data.len().max(1) as f32;
        let mut nodes = Vec::with_capacity(self.data.len() * 2);
        for (i, datum) in self.data.iter().enumerate() {
            let x = column * i as f32 + SWATCH_GAP;
            let center_y = top + self.config.legend_height / 2.0;
            nodes.push(SceneNode::Rect {
                bounds: Bounds::new(
                    point(x, center_y - SWATCH_SIZE / 2.0),
                    size(SWATCH_SIZE, SWATCH_SIZE),
                ),
                fill: colors[i % colors.len()],
            });
            nodes.push(SceneNode::Text(TextNode {
                text: format!("{}: {}%", datum.label, format_number(datum.value)),
                position: point(x + SWATCH_SIZE + SWATCH_GAP, center_y),
                font_size,
                anchor: TextAnchor::Start,
                rotation: 0.0,
                color: theme.axis_label,
            }));
        }
        nodes
    }
}

impl ChartFacade for DonutChart {
    fn layout(&self) -> ResponsiveLayout {
        ResponsiveLayout {
            width: WidthPolicy::Fixed(self.config.width),
            height: HeightPolicy::Fixed(
                self.config.height + self.heading_offset() + self.legend_height(),
            ),
            margins: Margins::ZERO,
        }
    }

    fn compose(&self, area: &PlotArea, theme: &ChartTheme) -> Composition {
        let mut composition = Composition::new(*area, area.surface_size());
        let top = self.heading_offset();

        if self.heading_required {
            composition.push_static([SceneNode::Text(TextNode {
                text: self.config.heading.clone(),
                position: point(self.config.width / 2.0, top / 2.0),
                font_size: theme.heading_size,
                anchor: TextAnchor::Middle,
                rotation: 0.0,
                color: theme.heading,
            })]);
        }

        let slices = pie(self.data.iter().map(|d| (d.label.as_str(), d.value)));
        composition.push_plot(DonutPlot {
            slices,
            center: point(self.config.width / 2.0, top + self.config.height / 2.0),
            inner_radius: self.config.inner_radius,
            outer_radius: self.config.outer_radius,
            palette: theme.donut_colors(self.grayed_out),
            stroke: theme.donut_stroke,
            stroke_width: self.config.stroke_width,
            transition: Transition::new(self.config.duration()).with_easing(Easing::CubicInOut),
            spin_degrees: self.config.spin_degrees,
        });

        if self.config.show_legend {
            composition.push_static(self.legend(top + self.config.height, theme));
        }
        composition
    }

    fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// Grayed-out data is drawn settled; the draw-on waits for live data.
    fn animates_on_arrival(&self) -> bool {
        !self.grayed_out
    }
}
