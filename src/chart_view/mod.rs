pub mod input;
pub mod renderer;

use crate::chart::{ChartFacade, ChartModel};
use crate::layout::ViewportSource;
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

pub use renderer::SceneRenderer;

use self::input::ChartInputHandler;

/// gpui view hosting one chart.
///
/// The view measures its container, drives animation frames while the
/// chart animates, and paints the chart's scene on a canvas.
pub struct ChartView<C: ChartFacade + 'static> {
    model: Rc<RefCell<ChartModel<C>>>,
    bounds: Rc<Cell<Bounds<Pixels>>>,
    input: ChartInputHandler<C>,
}

impl<C: ChartFacade + 'static> ChartView<C> {
    pub fn new(chart: C, source: &ViewportSource, cx: &mut Context<Self>) -> Self {
        Self::themed(chart, ChartTheme::default(), source, cx)
    }

    pub fn themed(
        chart: C,
        theme: ChartTheme,
        source: &ViewportSource,
        _cx: &mut Context<Self>,
    ) -> Self {
        let model = ChartModel::mount(chart, source, Instant::now()).with_theme(theme);
        let model = Rc::new(RefCell::new(model));
        let bounds = Rc::new(Cell::new(Bounds::default()));
        let input = ChartInputHandler::new(model.clone(), bounds.clone());
        Self {
            model,
            bounds,
            input,
        }
    }

    /// Live theme swap; a running animation settles.
    pub fn set_theme(&mut self, theme: ChartTheme, cx: &mut Context<Self>) {
        self.model.borrow_mut().set_theme(theme);
        cx.notify();
    }

    pub fn model(&self) -> std::cell::Ref<'_, ChartModel<C>> {
        self.model.borrow()
    }

    /// New data for the chart. Only the first data arrival animates.
    pub fn set_chart(&mut self, chart: C, cx: &mut Context<Self>) {
        self.model.borrow_mut().set_chart(chart, Instant::now());
        cx.notify();
    }

    /// Style-only change, applied without replaying the animation.
    pub fn update_style(&mut self, update: impl FnOnce(&mut C), cx: &mut Context<Self>) {
        self.model.borrow_mut().update_style(update);
        cx.notify();
    }
}

impl<C: ChartFacade + 'static> Render for ChartView<C> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Size the element from the same viewport the canvas will paint with
        self.model.borrow_mut().sync_viewport();

        if let Some(request) = self.model.borrow().request_frame() {
            let model = Rc::downgrade(&self.model);
            cx.on_next_frame(window, move |_, _, cx| {
                let Some(model) = model.upgrade() else {
                    return;
                };
                if model.borrow().accepts(&request) {
                    cx.notify();
                }
            });
        }

        let height = self.model.borrow().plot_area().height;
        let prepaint_model = self.model.clone();
        let bounds_rc = self.bounds.clone();
        let input = self.input.clone();
        let hover_input = self.input.clone();
        let entity_id = cx.entity_id();

        div()
            .id(("chart-view", entity_id))
            .w_full()
            .h(px(height))
            .relative()
            .child(
                canvas(
                    move |bounds, _, _| {
                        bounds_rc.set(bounds);
                        let mut model = prepaint_model.borrow_mut();
                        model.set_container_width(bounds.size.width.as_f32());
                        model.frame(Instant::now())
                    },
                    move |bounds, scene, window, cx| {
                        SceneRenderer::paint(&scene, bounds.origin, window, cx);
                    },
                )
                .size_full()
                .absolute(),
            )
            .on_mouse_move(cx.listener(move |_, event: &MouseMoveEvent, _, cx| {
                if input.handle_mouse_move(event) {
                    cx.notify();
                }
            }))
            .on_hover(cx.listener(move |_, hovered: &bool, _, cx| {
                if !*hovered && hover_input.handle_hover_end() {
                    cx.notify();
                }
            }))
    }
}
