//! Backend-independent description of one rendered chart frame.
//!
//! Coordinates are surface pixels with the origin at the top-left corner of
//! the chart. Nodes are painted in insertion order.

use gpui::{Bounds, Hsla, Point, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    /// Anchor point; the text is vertically centered on it.
    pub position: Point<f32>,
    pub font_size: f32,
    pub anchor: TextAnchor,
    /// Clockwise rotation around `position`, in degrees.
    pub rotation: f32,
    pub color: Hsla,
}

/// Dash pattern of a stroked path: one dash of `array` followed by an equal gap,
/// shifted by `offset` along the path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub array: f32,
    pub offset: f32,
}

impl Dash {
    /// Length of the path prefix that is currently drawn.
    pub fn visible_length(&self) -> f32 {
        (self.array - self.offset).clamp(0.0, self.array)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        bounds: Bounds<f32>,
        fill: Hsla,
    },
    Line {
        from: Point<f32>,
        to: Point<f32>,
        stroke: Hsla,
        width: f32,
    },
    Polyline {
        points: Vec<Point<f32>>,
        stroke: Hsla,
        width: f32,
        dash: Option<Dash>,
    },
    Polygon {
        points: Vec<Point<f32>>,
        fill: Hsla,
        stroke: Option<(Hsla, f32)>,
    },
    Circle {
        center: Point<f32>,
        radius: f32,
        fill: Hsla,
        opacity: f32,
    },
    Text(TextNode),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneGraph {
    pub size: Size<f32>,
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new(size: Size<f32>) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = SceneNode>) {
        self.nodes.extend(nodes);
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Bounds<f32>, Hsla)> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Rect { bounds, fill } => Some((bounds, *fill)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Point<f32>], Option<Dash>)> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Polyline { points, dash, .. } => Some((points.as_slice(), *dash)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[Point<f32>], Hsla)> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Polygon { points, fill, .. } => Some((points.as_slice(), *fill)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point<f32>, f32)> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Circle {
                center, opacity, ..
            } => Some((*center, *opacity)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text(t) => Some(t),
            _ => None,
        })
    }
}
