use crate::scene::{SceneGraph, SceneNode, TextAnchor, TextNode};
use gpui::*;
use tracing::warn;

fn to_screen(origin: Point<Pixels>, p: Point<f32>) -> Point<Pixels> {
    Point::new(origin.x + px(p.x), origin.y + px(p.y))
}

/// Paints a `SceneGraph` through the window's path, quad and text primitives.
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn paint(scene: &SceneGraph, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
        for node in scene.nodes() {
            match node {
                SceneNode::Rect { bounds, fill } => {
                    let bounds = Bounds::new(
                        to_screen(origin, bounds.origin),
                        size(px(bounds.size.width), px(bounds.size.height)),
                    );
                    window.paint_quad(quad(
                        bounds,
                        Corners::all(px(0.0)),
                        *fill,
                        Edges::all(px(0.0)),
                        *fill,
                        BorderStyle::default(),
                    ));
                }
                SceneNode::Line {
                    from,
                    to,
                    stroke,
                    width,
                } => {
                    let mut builder = PathBuilder::stroke(px(*width));
                    builder.move_to(to_screen(origin, *from));
                    builder.line_to(to_screen(origin, *to));
                    if let Ok(path) = builder.build() {
                        window.paint_path(path, *stroke);
                    }
                }
                SceneNode::Polyline {
                    points,
                    stroke,
                    width,
                    ..
                } => Self::paint_polyline(points, origin, *stroke, *width, window),
                SceneNode::Polygon {
                    points,
                    fill,
                    stroke,
                } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    let mut builder = PathBuilder::fill();
                    builder.move_to(to_screen(origin, *first));
                    for p in rest {
                        builder.line_to(to_screen(origin, *p));
                    }
                    builder.close();
                    if let Ok(path) = builder.build() {
                        window.paint_path(path, *fill);
                    }
                    if let Some((color, width)) = stroke {
                        let mut outline = points.clone();
                        outline.push(*first);
                        Self::paint_polyline(&outline, origin, *color, *width, window);
                    }
                }
                SceneNode::Circle {
                    center,
                    radius,
                    fill,
                    opacity,
                } => {
                    if *opacity <= 0.0 {
                        continue;
                    }
                    let color = fill.opacity(*opacity);
                    let bounds = Bounds::from_corners(
                        to_screen(origin, point(center.x - radius, center.y - radius)),
                        to_screen(origin, point(center.x + radius, center.y + radius)),
                    );
                    window.paint_quad(quad(
                        bounds,
                        Corners::all(px(*radius)),
                        color,
                        Edges::all(px(0.0)),
                        color,
                        BorderStyle::default(),
                    ));
                }
                SceneNode::Text(text) => Self::paint_text(text, origin, window, cx),
            }
        }
    }

    fn paint_polyline(
        points: &[Point<f32>],
        origin: Point<Pixels>,
        color: Hsla,
        width: f32,
        window: &mut Window,
    ) {
        if points.len() < 2 {
            return;
        }
        let mut builder = PathBuilder::stroke(px(width));
        builder.move_to(to_screen(origin, points[0]));
        for p in &points[1..] {
            builder.line_to(to_screen(origin, *p));
        }
        if let Ok(path) = builder.build() {
            window.paint_path(path, color);
        }
    }

    fn shape(text: &str, font_size: f32, color: Hsla, window: &mut Window) -> ShapedLine {
        let run = TextRun {
            len: text.len(),
            font: TextStyle::default().font(),
            color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        window
            .text_system()
            .shape_line(text.to_string().into(), px(font_size), &[run], None)
    }

    fn paint_text(node: &TextNode, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
        if node.text.is_empty() || node.font_size <= 0.0 {
            return;
        }
        // Quarter turns are drawn as a vertical stack of glyphs.
        if node.rotation.abs() >= 45.0 {
            let count = node.text.chars().count() as f32;
            let advance = node.font_size * 1.1;
            let mut y = node.position.y - advance * count / 2.0;
            let mut buf = [0u8; 4];
            for ch in node.text.chars() {
                let glyph: &str = ch.encode_utf8(&mut buf);
                let shaped = Self::shape(glyph, node.font_size, node.color, window);
                let w = f32::from(shaped.width);
                let line_height = shaped.ascent + shaped.descent;
                let at = to_screen(origin, point(node.position.x - w / 2.0, y));
                if let Err(err) = shaped.paint(at, line_height, window, cx) {
                    warn!(?err, glyph, "failed to paint text");
                }
                y += advance;
            }
            return;
        }

        let shaped = Self::shape(&node.text, node.font_size, node.color, window);
        let width = f32::from(shaped.width);
        let line_height = shaped.ascent + shaped.descent;
        let dx = match node.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width / 2.0,
            TextAnchor::End => -width,
        };
        let top = node.position.y - f32::from(line_height) / 2.0;
        let at = to_screen(origin, point(node.position.x + dx, top));
        if let Err(err) = shaped.paint(at, line_height, window, cx) {
            warn!(?err, text = %node.text, "failed to paint text");
        }
    }
}
