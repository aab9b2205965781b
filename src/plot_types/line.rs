use super::PlotRenderer;
use crate::animation::{FrameTime, Transition};
use crate::layout::PlotArea;
use crate::scene::{Dash, SceneGraph, SceneNode};
use gpui::{point, Hsla, Point};
use std::time::Duration;

/// Total length of the straight segments joining `points`.
pub fn path_length(points: &[Point<f32>]) -> f32 {
    points
        .windows(2)
        .map(|w| {
            let dx = w[1].x - w[0].x;
            let dy = w[1].y - w[0].y;
            (dx * dx + dy * dy).sqrt()
        })
        .sum()
}

/// The first `length` pixels of the path, cutting the last segment if needed.
pub fn visible_prefix(points: &[Point<f32>], length: f32) -> Vec<Point<f32>> {
    let mut out = Vec::with_capacity(points.len());
    let Some(first) = points.first() else {
        return out;
    };
    out.push(*first);
    let mut remaining = length.max(0.0);
    for w in points.windows(2) {
        let dx = w[1].x - w[0].x;
        let dy = w[1].y - w[0].y;
        let seg = (dx * dx + dy * dy).sqrt();
        if seg <= remaining {
            out.push(w[1]);
            remaining -= seg;
            continue;
        }
        if remaining > 0.0 && seg > 0.0 {
            let t = remaining / seg;
            out.push(point(w[0].x + dx * t, w[0].y + dy * t));
        }
        break;
    }
    out
}

/// One polyline in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    pub points: Vec<Point<f32>>,
    pub length: f32,
    pub color: Hsla,
    pub stroke_width: f32,
}

impl LinePath {
    pub fn new(points: Vec<Point<f32>>, color: Hsla, stroke_width: f32) -> Self {
        let length = path_length(&points);
        Self {
            points,
            length,
            color,
            stroke_width,
        }
    }
}

/// Point marker drawn on a vertex, fading in once the line reaches it.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub center: Point<f32>,
    pub radius: f32,
    pub color: Hsla,
    pub delay: Duration,
}

/// Line plot type
pub struct LinePlot {
    pub paths: Vec<LinePath>,
    pub markers: Vec<Marker>,
    /// Dash-offset draw-on of the paths.
    pub draw: Transition,
    /// Fade-in of each marker, started after the marker's own delay.
    pub fade: Transition,
}

impl LinePlot {
    /// Builds one path per series from plot-local vertices.
    ///
    /// Marker delays are proportional to the vertex position along the x axis.
    pub fn new(
        series: Vec<(Vec<Point<f32>>, Hsla)>,
        area: &PlotArea,
        stroke_width: f32,
        marker_radius: f32,
        draw: Transition,
        fade: Transition,
    ) -> Self {
        let inner_width = area.inner_width();
        let mut paths = Vec::with_capacity(series.len());
        let mut markers = Vec::new();
        for (local, color) in series {
            for p in &local {
                let pos = if inner_width > 0.0 {
                    (p.x / inner_width).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                markers.push(Marker {
                    center: area.to_surface(*p),
                    radius: marker_radius,
                    color,
                    delay: draw.duration.mul_f32(pos),
                });
            }
            let points = local.into_iter().map(|p| area.to_surface(p)).collect();
            paths.push(LinePath::new(points, color, stroke_width));
        }
        Self {
            paths,
            markers,
            draw,
            fade,
        }
    }

    /// Dash pattern of `path` at `frame`: the offset runs from the full length to 0.
    pub fn dash_at(&self, path: &LinePath, frame: FrameTime) -> Dash {
        let t = self.draw.progress(frame, 0);
        Dash {
            array: path.length,
            offset: path.length * (1.0 - t),
        }
    }

    pub fn marker_opacity(&self, marker: &Marker, frame: FrameTime) -> f32 {
        self.fade.progress_after(frame, marker.delay)
    }
}

impl PlotRenderer for LinePlot {
    fn render(&self, frame: FrameTime, scene: &mut SceneGraph) {
        for path in &self.paths {
            let dash = self.dash_at(path, frame);
            scene.push(SceneNode::Polyline {
                points: visible_prefix(&path.points, dash.visible_length()),
                stroke: path.color,
                width: path.stroke_width,
                dash: Some(dash),
            });
        }
        for marker in &self.markers {
            scene.push(SceneNode::Circle {
                center: marker.center,
                radius: marker.radius,
                fill: marker.color,
                opacity: self.marker_opacity(marker, frame),
            });
        }
    }

    fn settle_time(&self) -> Duration {
        let last_marker = self
            .markers
            .iter()
            .map(|m| m.delay + self.fade.duration)
            .max()
            .unwrap_or_default();
        self.draw.duration.max(last_marker)
    }
}
