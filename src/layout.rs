//! Responsive layout: plot-area geometry from the injected viewport and the
//! measured container, plus the host-owned viewport source charts subscribe to.

use crate::data_types::{Margins, Viewport};
use gpui::{point, size, Point, Size};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tracing::trace;

/// Outer surface of a chart and the inner rectangle its plots live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PlotArea {
    pub fn new(width: f32, height: f32, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    pub fn inner_width(&self) -> f32 {
        (self.width - self.margins.horizontal()).max(0.0)
    }

    pub fn inner_height(&self) -> f32 {
        (self.height - self.margins.vertical()).max(0.0)
    }

    /// Top-left corner of the inner rectangle on the surface.
    pub fn origin(&self) -> Point<f32> {
        point(self.margins.left, self.margins.top)
    }

    /// Converts plot-local coordinates to surface coordinates.
    pub fn to_surface(&self, local: Point<f32>) -> Point<f32> {
        point(local.x + self.margins.left, local.y + self.margins.top)
    }

    pub fn surface_size(&self) -> Size<f32> {
        size(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightPolicy {
    Fixed(f32),
    /// `compact` while the viewport is at most `max_width` wide, `regular` otherwise.
    Breakpoint {
        max_width: f32,
        compact: f32,
        regular: f32,
    },
}

impl HeightPolicy {
    pub fn height_for(&self, viewport: Viewport) -> f32 {
        match *self {
            Self::Fixed(h) => h,
            Self::Breakpoint {
                max_width,
                compact,
                regular,
            } => {
                if viewport.width <= max_width {
                    compact
                } else {
                    regular
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidthPolicy {
    /// Follow the measured container, `fallback` until it is known.
    Container { fallback: f32 },
    Fixed(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveLayout {
    pub width: WidthPolicy,
    pub height: HeightPolicy,
    pub margins: Margins,
}

impl ResponsiveLayout {
    pub fn plot_area(&self, container_width: Option<f32>, viewport: Viewport) -> PlotArea {
        let width = match self.width {
            WidthPolicy::Fixed(w) => w,
            WidthPolicy::Container { fallback } => container_width
                .filter(|w| w.is_finite() && *w > 0.0)
                .unwrap_or(fallback),
        };
        PlotArea::new(width, self.height.height_for(viewport), self.margins)
    }

    /// Whether a new container width changes the geometry.
    pub fn depends_on_container(&self) -> bool {
        matches!(self.width, WidthPolicy::Container { .. })
    }
}

type Slot = Arc<Mutex<Option<Viewport>>>;

struct SourceInner {
    viewport: Viewport,
    next_id: u64,
    subscribers: HashMap<u64, Slot>,
}

/// Single resize source owned by the host application.
///
/// Every [`ViewportSource::set`] is delivered to every live subscription; a
/// subscription keeps only the latest viewport it has not consumed yet.
#[derive(Clone)]
pub struct ViewportSource {
    inner: Arc<Mutex<SourceInner>>,
}

impl ViewportSource {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SourceInner {
                viewport,
                next_id: 0,
                subscribers: HashMap::new(),
            })),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.inner.lock().viewport
    }

    pub fn set(&self, viewport: Viewport) {
        let mut inner = self.inner.lock();
        inner.viewport = viewport;
        for slot in inner.subscribers.values() {
            *slot.lock() = Some(viewport);
        }
        trace!(
            width = viewport.width,
            height = viewport.height,
            subscribers = inner.subscribers.len(),
            "viewport changed"
        );
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let slot: Slot = Arc::new(Mutex::new(None));
        inner.subscribers.insert(id, slot.clone());
        ViewportSubscription {
            id,
            current: inner.viewport,
            slot,
            source: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

impl Default for ViewportSource {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

/// Registration with a [`ViewportSource`], released on drop.
pub struct ViewportSubscription {
    id: u64,
    current: Viewport,
    slot: Slot,
    source: Weak<Mutex<SourceInner>>,
}

impl ViewportSubscription {
    /// Latest viewport delivered, consumed or not.
    pub fn viewport(&self) -> Viewport {
        let pending = *self.slot.lock();
        pending.unwrap_or(self.current)
    }

    /// Viewport delivered since the last call, if any.
    pub fn take_change(&mut self) -> Option<Viewport> {
        let change = self.slot.lock().take()?;
        self.current = change;
        Some(change)
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.source.upgrade() {
            inner.lock().subscribers.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_height() {
        let policy = HeightPolicy::Breakpoint {
            max_width: 480.0,
            compact: 200.0,
            regular: 300.0,
        };
        assert_eq!(policy.height_for(Viewport::new(480.0, 800.0)), 200.0);
        assert_eq!(policy.height_for(Viewport::new(481.0, 800.0)), 300.0);
    }

    #[test]
    fn test_container_width_fallback() {
        let layout = ResponsiveLayout {
            width: WidthPolicy::Container { fallback: 400.0 },
            height: HeightPolicy::Fixed(300.0),
            margins: Margins::LINE,
        };
        let area = layout.plot_area(None, Viewport::default());
        assert_eq!(area.width, 400.0);
        assert_eq!(area.inner_width(), 330.0);
        assert_eq!(area.inner_height(), 240.0);
        let area = layout.plot_area(Some(0.0), Viewport::default());
        assert_eq!(area.width, 400.0);
        let area = layout.plot_area(Some(640.0), Viewport::default());
        assert_eq!(area.width, 640.0);
    }

    #[test]
    fn test_subscription_receives_every_change() {
        let source = ViewportSource::new(Viewport::new(1024.0, 768.0));
        let mut sub = source.subscribe();
        assert_eq!(sub.take_change(), None);
        source.set(Viewport::new(400.0, 700.0));
        assert_eq!(sub.viewport(), Viewport::new(400.0, 700.0));
        assert_eq!(sub.take_change(), Some(Viewport::new(400.0, 700.0)));
        assert_eq!(sub.viewport(), Viewport::new(400.0, 700.0));
        assert_eq!(sub.take_change(), None);
    }

    #[test]
    fn test_subscription_drop_deregisters() {
        let source = ViewportSource::default();
        let a = source.subscribe();
        let b = source.subscribe();
        assert_eq!(source.listener_count(), 2);
        drop(a);
        assert_eq!(source.listener_count(), 1);
        drop(b);
        assert_eq!(source.listener_count(), 0);
    }
}
