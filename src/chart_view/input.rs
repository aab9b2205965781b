use crate::chart::{ChartFacade, ChartModel};
use crate::utils::PixelsExt;
use gpui::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// Pointer handling for a mounted chart: maps the cursor to a chart element
/// and forwards hover emphasis to the model.
pub struct ChartInputHandler<C: ChartFacade> {
    model: Rc<RefCell<ChartModel<C>>>,
    bounds: Rc<Cell<Bounds<Pixels>>>,
}

impl<C: ChartFacade> Clone for ChartInputHandler<C> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            bounds: self.bounds.clone(),
        }
    }
}

impl<C: ChartFacade> ChartInputHandler<C> {
    pub fn new(model: Rc<RefCell<ChartModel<C>>>, bounds: Rc<Cell<Bounds<Pixels>>>) -> Self {
        Self { model, bounds }
    }

    /// Surface coordinates of a window position.
    fn to_local(&self, position: Point<Pixels>) -> Point<f32> {
        let origin = self.bounds.get().origin;
        point(
            (position.x - origin.x).as_f32(),
            (position.y - origin.y).as_f32(),
        )
    }

    /// Returns `true` when the hovered element changed.
    pub fn handle_mouse_move(&self, event: &MouseMoveEvent) -> bool {
        let local = self.to_local(event.position);
        let mut model = self.model.borrow_mut();
        let hit = model.hit_test(local);
        let changed = model.set_hovered(hit);
        if changed {
            trace!(?hit, "hover changed");
        }
        changed
    }

    pub fn handle_hover_end(&self) -> bool {
        self.model.borrow_mut().set_hovered(None)
    }
}
