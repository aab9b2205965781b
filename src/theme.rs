use gpui::*;

fn hex(value: u32) -> Hsla {
    rgb(value).into()
}

/// Colors and font sizes shared by every chart kind.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub background: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: f32,
    pub caption: Hsla,
    pub tick_label_max_size: f32,
    pub caption_max_size: f32,

    pub bar_base: Hsla,
    pub bar_emphasis: Hsla,

    /// Stroke color per line series, by series index.
    pub line_colors: Vec<Hsla>,

    pub donut_palette: [Hsla; 2],
    pub donut_muted: [Hsla; 2],
    pub donut_stroke: Hsla,
    pub heading: Hsla,
    pub heading_size: f32,
    pub legend_label_size: f32,
}

impl ChartTheme {
    /// Donut slice colors; the muted pair replaces the whole palette.
    pub fn donut_colors(&self, grayed_out: bool) -> [Hsla; 2] {
        if grayed_out {
            self.donut_muted
        } else {
            self.donut_palette
        }
    }

    pub fn line_color(&self, index: usize) -> Hsla {
        if self.line_colors.is_empty() {
            return self.bar_base;
        }
        self.line_colors[index % self.line_colors.len()]
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        let light = hex(0x3DD5F3);
        let dark = hex(0x1D9BCE);
        Self {
            background: gpui::white(),
            axis_line: gpui::black(),
            axis_label: gpui::black(),
            axis_label_size: 10.0,
            caption: gpui::black(),
            tick_label_max_size: 6.0,
            caption_max_size: 8.0,
            bar_base: light,
            bar_emphasis: dark,
            line_colors: vec![light, dark],
            donut_palette: [dark, light],
            donut_muted: [hex(0xB0B0B0), hex(0xD3D3D3)],
            donut_stroke: gpui::white(),
            heading: hex(0x1880A9),
            heading_size: 25.0,
            legend_label_size: 10.0,
        }
    }
}
