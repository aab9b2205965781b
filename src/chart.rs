//! Chart Model
//!
//! This module defines the `ChartFacade` contract implemented by the three
//! chart kinds and the `ChartModel` that owns one mounted chart: its
//! animation sequencer, its viewport subscription, and the geometry computed
//! for the current size.
//!
//! Geometry is never patched. Any data, style, container or viewport change
//! drops the cached `Composition` and the next frame recomputes it from
//! scratch.

pub mod bar;
pub mod donut;
pub mod line;

pub use bar::BarChart;
pub use donut::DonutChart;
pub use line::LineChart;

use crate::animation::{AnimationPhase, AnimationSequencer, FrameTime};
use crate::data_types::Viewport;
use crate::layout::{PlotArea, ResponsiveLayout, ViewportSource, ViewportSubscription};
use crate::plot_types::PlotRenderer;
use crate::scene::{SceneGraph, SceneNode};
use crate::theme::ChartTheme;
use gpui::{Point, Size};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Paint layer of a composed chart.
pub enum Layer {
    /// Nodes that do not animate (axes, captions, legends).
    Static(Vec<SceneNode>),
    Plot(Box<dyn PlotRenderer>),
}

/// Everything a chart draws for one size, in paint order.
pub struct Composition {
    pub area: PlotArea,
    pub surface: Size<f32>,
    layers: Vec<Layer>,
}

impl Composition {
    pub fn new(area: PlotArea, surface: Size<f32>) -> Self {
        Self {
            area,
            surface,
            layers: Vec::new(),
        }
    }

    pub fn push_static(&mut self, nodes: impl IntoIterator<Item = SceneNode>) {
        let nodes: Vec<_> = nodes.into_iter().collect();
        if !nodes.is_empty() {
            self.layers.push(Layer::Static(nodes));
        }
    }

    pub fn push_plot(&mut self, plot: impl PlotRenderer + 'static) {
        self.layers.push(Layer::Plot(Box::new(plot)));
    }

    pub fn render(&self, frame: FrameTime) -> SceneGraph {
        let mut scene = SceneGraph::new(self.surface);
        for layer in &self.layers {
            match layer {
                Layer::Static(nodes) => scene.extend(nodes.iter().cloned()),
                Layer::Plot(plot) => plot.render(frame, &mut scene),
            }
        }
        scene
    }

    /// Longest settle time over all plots.
    pub fn settle_time(&self) -> Duration {
        self.layers
            .iter()
            .filter_map(|layer| match layer {
                Layer::Plot(plot) => Some(plot.settle_time()),
                Layer::Static(_) => None,
            })
            .max()
            .unwrap_or_default()
    }
}

/// Public entry point of one chart kind.
pub trait ChartFacade {
    /// How the chart sizes itself against its container and the viewport.
    fn layout(&self) -> ResponsiveLayout;

    /// Computes scales, shapes and axes for `area`.
    fn compose(&self, area: &PlotArea, theme: &ChartTheme) -> Composition;

    /// Whether there is anything to animate yet.
    fn has_data(&self) -> bool;

    /// Whether the first data arrival plays the draw-on animation.
    fn animates_on_arrival(&self) -> bool {
        true
    }

    /// Index of the element under `position` (surface coordinates).
    fn hit_test(&self, _area: &PlotArea, _position: Point<f32>) -> Option<usize> {
        None
    }

    /// Sets the hovered element. Returns `true` when the emphasis changed.
    fn set_hovered(&mut self, _index: Option<usize>) -> bool {
        false
    }

    /// Pure render of the chart at `frame`.
    fn render(&self, area: &PlotArea, theme: &ChartTheme, frame: FrameTime) -> SceneGraph {
        self.compose(area, theme).render(frame)
    }
}

/// Ticket for one scheduled animation frame.
///
/// The ticket is live while the model that issued it exists and still runs
/// the animation generation it was issued for.
#[derive(Clone, Debug)]
pub struct FrameRequest {
    generation: u64,
    owner: Weak<()>,
}

impl FrameRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `false` once the issuing model has been unmounted.
    pub fn is_live(&self) -> bool {
        self.owner.strong_count() > 0
    }
}

/// One mounted chart.
pub struct ChartModel<C: ChartFacade> {
    chart: C,
    theme: ChartTheme,
    sequencer: AnimationSequencer,
    subscription: ViewportSubscription,
    container_width: Option<f32>,
    composition: Option<Composition>,
    alive: Arc<()>,
}

impl<C: ChartFacade> ChartModel<C> {
    /// Subscribes to `source` and starts the draw-on animation if data is present.
    pub fn mount(chart: C, source: &ViewportSource, now: Instant) -> Self {
        let mut model = Self {
            chart,
            theme: ChartTheme::default(),
            sequencer: AnimationSequencer::new(),
            subscription: source.subscribe(),
            container_width: None,
            composition: None,
            alive: Arc::new(()),
        };
        if model.chart.has_data() {
            let animate = model.chart.animates_on_arrival();
            model.sequencer.on_data_arrived(now, animate);
        }
        debug!(viewport = ?model.subscription.viewport(), "chart mounted");
        model
    }

    /// Theme applied before the first frame. The mount animation is kept.
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self.composition = None;
        self
    }

    /// Theme swap on a live chart; settles a running animation.
    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.theme = theme;
        self.sequencer.on_non_geometric_update();
        self.invalidate("theme changed");
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn phase(&self) -> AnimationPhase {
        self.sequencer.phase()
    }

    pub fn generation(&self) -> u64 {
        self.sequencer.generation()
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
    }

    pub fn viewport(&self) -> Viewport {
        self.subscription.viewport()
    }

    pub fn plot_area(&self) -> PlotArea {
        self.chart
            .layout()
            .plot_area(self.container_width, self.viewport())
    }

    /// Replaces the chart's data. Only the first arrival animates.
    pub fn set_chart(&mut self, chart: C, now: Instant) {
        self.chart = chart;
        if self.chart.has_data() {
            let animate = self.chart.animates_on_arrival();
            self.sequencer.on_data_arrived(now, animate);
        }
        self.invalidate("data changed");
    }

    /// Applies a change that leaves geometry untouched (colors, emphasis).
    pub fn update_style(&mut self, update: impl FnOnce(&mut C)) {
        update(&mut self.chart);
        self.sequencer.on_non_geometric_update();
        self.invalidate("style changed");
    }

    pub fn hit_test(&self, position: Point<f32>) -> Option<usize> {
        self.chart.hit_test(&self.plot_area(), position)
    }

    /// Hover emphasis. Returns `true` when a redraw is needed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        if !self.chart.set_hovered(index) {
            return false;
        }
        self.sequencer.on_non_geometric_update();
        self.invalidate("hover changed");
        true
    }

    /// Records the measured container width. Returns `true` when the layout changed.
    pub fn set_container_width(&mut self, width: f32) -> bool {
        if self.container_width == Some(width) {
            return false;
        }
        let first_measure = self.container_width.replace(width).is_none();
        if !self.chart.layout().depends_on_container() {
            return false;
        }
        // The first measurement only replaces the fallback width
        if !first_measure {
            self.sequencer.on_layout_changed();
        }
        self.invalidate("container resized");
        true
    }

    /// Consumes pending viewport changes. Returns `true` when the viewport moved.
    pub fn sync_viewport(&mut self) -> bool {
        let mut changed = false;
        while self.subscription.take_change().is_some() {
            changed = true;
        }
        if changed {
            self.sequencer.on_layout_changed();
            self.invalidate("viewport resized");
        }
        changed
    }

    fn invalidate(&mut self, reason: &str) {
        if self.composition.take().is_some() {
            debug!(reason, generation = self.generation(), "full redraw");
        }
    }

    /// Renders the chart as it looks at `now`.
    pub fn frame(&mut self, now: Instant) -> SceneGraph {
        self.sync_viewport();
        let composition = match self.composition.take() {
            Some(composition) => composition,
            None => {
                let area = self.plot_area();
                self.chart.compose(&area, &self.theme)
            }
        };
        let frame = self.sequencer.frame(now, composition.settle_time());
        trace!(?frame, generation = self.generation(), "frame");
        let scene = composition.render(frame);
        self.composition = Some(composition);
        scene
    }

    /// Issues a ticket for the next animation frame while animating.
    pub fn request_frame(&self) -> Option<FrameRequest> {
        if !self.is_animating() {
            return None;
        }
        Some(FrameRequest {
            generation: self.generation(),
            owner: Arc::downgrade(&self.alive),
        })
    }

    /// Whether `request` still belongs to the running animation.
    pub fn accepts(&self, request: &FrameRequest) -> bool {
        request.is_live() && request.generation == self.generation() && self.is_animating()
    }

    /// Stops the animation and releases the viewport subscription.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<C: ChartFacade> Drop for ChartModel<C> {
    fn drop(&mut self) {
        self.sequencer.cancel();
        debug!(generation = self.sequencer.generation(), "chart unmounted");
    }
}
