//! alive_charts: animated bar, line and donut charts for GPUI dashboards

pub mod animation;
pub mod axis_renderer;
pub mod chart;
pub mod chart_view;
pub mod data_types;
pub mod error;
pub mod layout;
pub mod plot_types;
pub mod scales;
pub mod scene;
pub mod theme;
pub mod utils;

pub use chart::{BarChart, ChartFacade, ChartModel, DonutChart, LineChart};
pub use chart_view::ChartView;
pub use data_types::{
    BarChartProps, Datum, DonutChartProps, LineChartProps, Series, Viewport,
};
pub use error::{ChartError, Result};
pub use layout::ViewportSource;
pub use plot_types::{BarPlot, DonutPlot, LinePlot, PlotRenderer};
pub use scene::{SceneGraph, SceneNode};
pub use theme::ChartTheme;
