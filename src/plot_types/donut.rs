use super::PlotRenderer;
use crate::animation::{lerp, FrameTime, Transition};
use crate::scene::{SceneGraph, SceneNode};
use gpui::{point, Hsla, Point};
use std::f32::consts::TAU;
use std::time::Duration;

/// Segments used to tessellate a full circle.
const CIRCLE_SEGMENTS: f32 = 128.0;

/// Angular extent of one slice, in radians clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl PieSlice {
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

/// Pie layout: each slice proportional to its value.
///
/// Angles are handed out largest value first, clockwise from 12 o'clock, with
/// ties kept in data order. The returned slices stay in data order so `index`
/// still picks the color. A zero total yields empty slices rather than NaN
/// angles.
pub fn pie<'a>(data: impl IntoIterator<Item = (&'a str, f64)>) -> Vec<PieSlice> {
    let data: Vec<_> = data.into_iter().collect();
    let total: f64 = data.iter().map(|(_, v)| *v).sum();
    let scale = if total > 0.0 { TAU as f64 / total } else { 0.0 };

    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| data[b].1.total_cmp(&data[a].1));
    let mut angles = vec![(0.0f32, 0.0f32); data.len()];
    let mut angle = 0.0f64;
    for i in order {
        let start = angle;
        angle += data[i].1 * scale;
        angles[i] = (start as f32, angle as f32);
    }

    data.into_iter()
        .zip(angles)
        .enumerate()
        .map(|(index, ((label, value), (start_angle, end_angle)))| PieSlice {
            index,
            label: label.to_string(),
            value,
            start_angle,
            end_angle,
        })
        .collect()
}

fn polar(center: Point<f32>, radius: f32, angle: f32) -> Point<f32> {
    point(center.x + radius * angle.sin(), center.y - radius * angle.cos())
}

/// Outline of an annulus segment: outer edge clockwise, inner edge back.
///
/// `rotation` (radians) turns the whole segment around `center`.
pub fn arc_polygon(
    center: Point<f32>,
    inner_radius: f32,
    outer_radius: f32,
    start_angle: f32,
    end_angle: f32,
    rotation: f32,
) -> Vec<Point<f32>> {
    let sweep = end_angle - start_angle;
    if sweep.abs() <= f32::EPSILON {
        return Vec::new();
    }
    let steps = ((sweep.abs() / TAU) * CIRCLE_SEGMENTS).ceil().max(2.0) as usize;
    let start = start_angle + rotation;
    let mut points = Vec::with_capacity(steps * 2 + 2);
    for i in 0..=steps {
        let a = start + sweep * i as f32 / steps as f32;
        points.push(polar(center, outer_radius, a));
    }
    if inner_radius > 0.0 {
        for i in (0..=steps).rev() {
            let a = start + sweep * i as f32 / steps as f32;
            points.push(polar(center, inner_radius, a));
        }
    } else {
        points.push(center);
    }
    points
}

pub struct DonutPlot {
    pub slices: Vec<PieSlice>,
    pub center: Point<f32>,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub palette: [Hsla; 2],
    pub stroke: Hsla,
    pub stroke_width: f32,
    /// Drives both the angle interpolation and the spin.
    pub transition: Transition,
    /// Spin covered over the whole transition, in degrees.
    pub spin_degrees: f32,
}

impl DonutPlot {
    /// Slice color, by position rather than label.
    pub fn color_for(&self, index: usize) -> Hsla {
        self.palette[index % self.palette.len()]
    }

    /// Angles and rotation (radians) at `frame`, interpolated from `(0, 0)`.
    pub fn slice_at(&self, slice: &PieSlice, frame: FrameTime) -> (f32, f32, f32) {
        let t = self.transition.progress(frame, 0);
        let rotation = match frame {
            FrameTime::Settled => 0.0,
            FrameTime::At(_) => (self.spin_degrees * t).to_radians() % TAU,
        };
        (
            lerp(0.0, slice.start_angle, t),
            lerp(0.0, slice.end_angle, t),
            rotation,
        )
    }
}

impl PlotRenderer for DonutPlot {
    fn render(&self, frame: FrameTime, scene: &mut SceneGraph) {
        for slice in &self.slices {
            let (start, end, rotation) = self.slice_at(slice, frame);
            let points = arc_polygon(
                self.center,
                self.inner_radius,
                self.outer_radius,
                start,
                end,
                rotation,
            );
            if points.is_empty() {
                continue;
            }
            scene.push(SceneNode::Polygon {
                points,
                fill: self.color_for(slice.index),
                stroke: Some((self.stroke, self.stroke_width)),
            });
        }
    }

    fn settle_time(&self) -> Duration {
        self.transition.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_largest_slice_first() {
        let slices = pie([("a", 1.0), ("b", 3.0)]);
        assert_eq!(slices[0].index, 0);
        assert_eq!(slices[0].label, "a");
        assert_eq!(slices[1].start_angle, 0.0);
        assert!((slices[1].end_angle - TAU * 0.75).abs() < 1e-5);
        assert_eq!(slices[0].start_angle, slices[1].end_angle);
        assert!((slices[0].end_angle - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_pie_ties_keep_data_order() {
        let slices = pie([("a", 2.0), ("b", 2.0)]);
        assert_eq!(slices[0].start_angle, 0.0);
        assert_eq!(slices[1].start_angle, slices[0].end_angle);
    }

    #[test]
    fn test_pie_zero_total() {
        let slices = pie([("a", 0.0), ("b", 0.0)]);
        assert!(slices.iter().all(|s| s.sweep() == 0.0));
    }

    #[test]
    fn test_arc_polygon_radii() {
        let center = point(60.0, 60.0);
        let points = arc_polygon(center, 25.0, 45.0, 0.0, TAU / 2.0, 0.0);
        let first = points[0];
        assert!((first.x - 60.0).abs() < 1e-4);
        assert!((first.y - 15.0).abs() < 1e-4);
        for p in &points {
            let r = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((r - 45.0).abs() < 1e-3 || (r - 25.0).abs() < 1e-3);
        }
        assert!(arc_polygon(center, 25.0, 45.0, 1.0, 1.0, 0.0).is_empty());
    }
}
