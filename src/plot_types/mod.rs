//! Animated plot layers drawn into a `SceneGraph`.

pub mod bar;
pub mod donut;
pub mod line;

pub use bar::{BarPlot, BarShape};
pub use donut::{arc_polygon, pie, DonutPlot, PieSlice};
pub use line::{path_length, visible_prefix, LinePath, LinePlot, Marker};

use crate::animation::FrameTime;
use crate::scene::SceneGraph;
use std::time::Duration;

/// Trait for rendering plot types
pub trait PlotRenderer {
    /// Paints the plot as it looks at `frame`.
    fn render(&self, frame: FrameTime, scene: &mut SceneGraph);

    /// Time after which every element has reached its final state.
    fn settle_time(&self) -> Duration;
}
