use crate::layout::PlotArea;
use crate::scales::{BandScale, ChartScale};
use crate::scene::{SceneNode, TextAnchor, TextNode};
use crate::theme::ChartTheme;
use gpui::point;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const Y_CAPTION_OFFSET: f32 = 24.0;
const X_CAPTION_LIFT: f32 = 10.0;

/// Font size for x labels: shrinks as categories crowd the axis.
pub fn label_font_size(max: f32, inner_width: f32, count: usize) -> f32 {
    if count == 0 {
        return max;
    }
    max.min(inner_width / count as f32).max(0.0)
}

/// Emits axis lines, ticks, tick labels and captions as scene nodes.
pub struct AxisRenderer;

impl AxisRenderer {
    /// Left value axis with one tick per entry of `ticks`.
    pub fn left(
        scale: &ChartScale,
        ticks: &[f64],
        area: &PlotArea,
        theme: &ChartTheme,
    ) -> Vec<SceneNode> {
        let mut nodes = Vec::with_capacity(ticks.len() * 2 + 1);
        let (r0, r1) = scale.range();
        nodes.push(SceneNode::Line {
            from: area.to_surface(point(0.0, r0)),
            to: area.to_surface(point(0.0, r1)),
            stroke: theme.axis_line,
            width: 1.0,
        });

        for &tick in ticks {
            let y = scale.map(tick);
            nodes.push(SceneNode::Line {
                from: area.to_surface(point(-TICK_SIZE, y)),
                to: area.to_surface(point(0.0, y)),
                stroke: theme.axis_line,
                width: 1.0,
            });
            nodes.push(SceneNode::Text(TextNode {
                text: scale.format_tick(tick),
                position: area.to_surface(point(-(TICK_SIZE + TICK_PADDING), y)),
                font_size: theme.axis_label_size,
                anchor: TextAnchor::End,
                rotation: 0.0,
                color: theme.axis_label,
            }));
        }
        nodes
    }

    /// Bottom category axis with a tick at every band center.
    pub fn bottom(
        scale: &BandScale,
        area: &PlotArea,
        font_size: f32,
        theme: &ChartTheme,
    ) -> Vec<SceneNode> {
        let h = area.inner_height();
        let (r0, r1) = scale.range();
        let mut nodes = Vec::with_capacity(scale.len() * 2 + 1);
        nodes.push(SceneNode::Line {
            from: area.to_surface(point(r0, h)),
            to: area.to_surface(point(r1, h)),
            stroke: theme.axis_line,
            width: 1.0,
        });

        for (i, label) in scale.labels().iter().enumerate() {
            let Some(x) = scale.center(i) else {
                continue;
            };
            nodes.push(SceneNode::Line {
                from: area.to_surface(point(x, h)),
                to: area.to_surface(point(x, h + TICK_SIZE)),
                stroke: theme.axis_line,
                width: 1.0,
            });
            nodes.push(SceneNode::Text(TextNode {
                text: label.clone(),
                position: area.to_surface(point(x, h + TICK_SIZE + TICK_PADDING + font_size / 2.0)),
                font_size,
                anchor: TextAnchor::Middle,
                rotation: 0.0,
                color: theme.axis_label,
            }));
        }
        nodes
    }

    /// Caption left of the y axis, rotated to read bottom-up.
    pub fn caption_left(text: &str, area: &PlotArea, font_size: f32, theme: &ChartTheme) -> SceneNode {
        SceneNode::Text(TextNode {
            text: text.to_string(),
            position: area.to_surface(point(-Y_CAPTION_OFFSET, area.inner_height() / 2.0)),
            font_size,
            anchor: TextAnchor::Middle,
            rotation: -90.0,
            color: theme.caption,
        })
    }

    /// Caption centered below the x axis.
    pub fn caption_bottom(text: &str, area: &PlotArea, font_size: f32, theme: &ChartTheme) -> SceneNode {
        let y = area.inner_height() + area.margins.bottom - X_CAPTION_LIFT;
        SceneNode::Text(TextNode {
            text: text.to_string(),
            position: area.to_surface(point(area.inner_width() / 2.0, y)),
            font_size,
            anchor: TextAnchor::Middle,
            rotation: 0.0,
            color: theme.caption,
        })
    }
}
