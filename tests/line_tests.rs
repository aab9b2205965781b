use alive_charts::animation::FrameTime;
use alive_charts::data_types::Viewport;
use alive_charts::plot_types::path_length;
use alive_charts::{ChartError, ChartFacade, ChartTheme, LineChart, LineChartProps};
use gpui::{point, Point};
use std::time::Duration;

fn abc_props() -> LineChartProps {
    LineChartProps {
        x_axis_labels: vec!["A".into(), "B".into(), "C".into()],
        y_axis_labels: vec![0.0, 25.0, 50.0, 75.0, 100.0],
        line_data1: vec![25.0, 25.0, 25.0],
        line_data2: vec![75.0, 35.0, 95.0],
        x_axis_label: "Health Features".into(),
        y_axis_label: "Percentages".into(),
    }
}

fn assert_close(actual: &[Point<f32>], expected: &[(f32, f32)]) {
    assert_eq!(actual.len(), expected.len());
    for (a, (x, y)) in actual.iter().zip(expected) {
        assert!(
            (a.x - x).abs() < 1e-3 && (a.y - y).abs() < 1e-3,
            "got {:?}, expected ({x}, {y})",
            a
        );
    }
}

#[test]
fn test_two_polylines_at_expected_pixels() {
    let chart = LineChart::new(abc_props()).unwrap();
    let area = chart.layout().plot_area(Some(400.0), Viewport::default());
    assert_eq!(area.inner_width(), 330.0);
    assert_eq!(area.inner_height(), 240.0);

    let scene = chart.render(&area, &ChartTheme::default(), FrameTime::Settled);
    let lines: Vec<_> = scene.polylines().collect();
    assert_eq!(lines.len(), 2);

    // plot-local x = 55, 165, 275; margins shift by (40, 20)
    assert_close(lines[0].0, &[(95.0, 200.0), (205.0, 200.0), (315.0, 200.0)]);
    assert_close(lines[1].0, &[(95.0, 80.0), (205.0, 176.0), (315.0, 32.0)]);

    for (points, _) in &lines {
        assert!(path_length(points) > 0.0);
    }
}

#[test]
fn test_markers_on_every_vertex() {
    let chart = LineChart::new(abc_props()).unwrap();
    let area = chart.layout().plot_area(Some(400.0), Viewport::default());
    let scene = chart.render(&area, &ChartTheme::default(), FrameTime::Settled);
    let circles: Vec<_> = scene.circles().collect();
    assert_eq!(circles.len(), 6);
    assert!(circles.iter().all(|(_, opacity)| *opacity == 1.0));
    assert!((circles[0].0.x - 95.0).abs() < 1e-3);
}

#[test]
fn test_dash_offset_draw_on() {
    let chart = LineChart::new(abc_props()).unwrap();
    let area = chart.layout().plot_area(Some(400.0), Viewport::default());
    let theme = ChartTheme::default();

    let start = chart.render(&area, &theme, FrameTime::start());
    for (points, dash) in start.polylines() {
        let dash = dash.unwrap();
        assert_eq!(dash.offset, dash.array);
        assert_eq!(points.len(), 1);
    }
    assert!(start.circles().all(|(_, opacity)| opacity == 0.0));

    // linear: half the time reveals half the path
    let half = chart.render(&area, &theme, FrameTime::At(Duration::from_millis(1000)));
    for (points, dash) in half.polylines() {
        let dash = dash.unwrap();
        assert!((dash.offset - dash.array / 2.0).abs() < 1e-2);
        assert!((path_length(points) - dash.array / 2.0).abs() < 1e-2);
    }
    let first_marker = half.circles().next().unwrap();
    assert!(first_marker.1 > 0.0);
    let last_marker = half.circles().last().unwrap();
    assert_eq!(last_marker.1, 0.0);
}

#[test]
fn test_width_follows_container() {
    let chart = LineChart::new(abc_props()).unwrap();
    let layout = chart.layout();
    assert_eq!(layout.plot_area(None, Viewport::default()).width, 400.0);
    let wide = layout.plot_area(Some(800.0), Viewport::new(300.0, 600.0));
    assert_eq!(wide.width, 800.0);
    assert_eq!(wide.height, 300.0);

    let narrow = layout.plot_area(Some(200.0), Viewport::default());
    let vertices = chart.vertices(&narrow);
    assert!(vertices[0].iter().all(|p| p.x >= 0.0 && p.x <= narrow.inner_width()));
}

#[test]
fn test_rejects_length_mismatch() {
    let mut props = abc_props();
    props.line_data2.push(10.0);
    assert_eq!(
        LineChart::new(props),
        Err(ChartError::LengthMismatch {
            what: "lineData2",
            expected: 3,
            actual: 4,
        })
    );

    let mut props = abc_props();
    props.line_data1[1] = f64::NAN;
    assert!(matches!(
        LineChart::new(props),
        Err(ChartError::InvalidValue { index: 1, .. })
    ));
}

#[test]
fn test_captions_carry_arrow() {
    let chart = LineChart::new(abc_props()).unwrap();
    let area = chart.layout().plot_area(Some(400.0), Viewport::default());
    let scene = chart.render(&area, &ChartTheme::default(), FrameTime::Settled);
    let texts: Vec<&str> = scene.texts().map(|t| t.text.as_str()).collect();
    assert!(texts.contains(&"Health Features\u{2192}"));
    assert!(texts.contains(&"Percentages\u{2192}"));
}

#[test]
fn test_label_fonts_shrink_with_crowded_axis() {
    let theme = ChartTheme::default();
    let sizes = |props: LineChartProps| {
        let chart = LineChart::new(props).unwrap();
        let area = chart.layout().plot_area(Some(400.0), Viewport::default());
        let scene = chart.render(&area, &theme, FrameTime::Settled);
        let size_of = |text: &str| {
            scene
                .texts()
                .find(|t| t.text == text)
                .map(|t| t.font_size)
                .unwrap()
        };
        let first_label = chart.props().x_axis_labels[0].clone();
        (
            size_of(&first_label),
            size_of("Health Features\u{2192}"),
            size_of("Percentages\u{2192}"),
        )
    };

    assert_eq!(sizes(abc_props()), (6.0, 8.0, 8.0));

    // 330px of inner width over 110 categories
    let labels: Vec<String> = (0..110).map(|i| format!("L{i}")).collect();
    let crowded = LineChartProps {
        line_data1: vec![25.0; labels.len()],
        line_data2: vec![50.0; labels.len()],
        x_axis_labels: labels,
        ..abc_props()
    };
    assert_eq!(sizes(crowded), (3.0, 3.0, 8.0));
}
