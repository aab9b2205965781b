use alive_charts::animation::{AnimationPhase, FrameTime};
use alive_charts::data_types::{DonutChartConfig, Viewport};
use alive_charts::plot_types::pie;
use alive_charts::{
    ChartError, ChartFacade, ChartModel, ChartTheme, Datum, DonutChart, DonutChartProps,
    ViewportSource,
};
use gpui::Hsla;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

fn donut(a: f64, b: f64) -> DonutChartProps {
    DonutChartProps::new(vec![Datum::new("Diabetic", a), Datum::new("Non-Diabetic", b)])
}

fn slice_fills(chart: &DonutChart, frame: FrameTime) -> Vec<Hsla> {
    let area = chart.layout().plot_area(None, Viewport::default());
    let scene = chart.render(&area, &ChartTheme::default(), frame);
    scene.polygons().map(|(_, fill)| fill).collect()
}

#[test]
fn test_angles_are_proportional() {
    for (a, b) in [(25.0, 75.0), (50.0, 50.0), (1.0, 99.0), (90.0, 10.0)] {
        let slices = pie([("a", a), ("b", b)]);
        let total: f32 = slices.iter().map(|s| s.sweep()).sum();
        assert!((total - TAU).abs() < 1e-4);
        for (slice, value) in slices.iter().zip([a, b]) {
            let expected = 360.0 * value / (a + b);
            assert!((slice.sweep().to_degrees() as f64 - expected).abs() < 1e-3);
        }
    }
}

#[test]
fn test_largest_slice_starts_at_twelve_oclock() {
    let chart = DonutChart::new(donut(25.0, 75.0)).unwrap();
    let area = chart.layout().plot_area(None, Viewport::default());
    let scene = chart.render(&area, &ChartTheme::default(), FrameTime::Settled);
    let polygons: Vec<_> = scene.polygons().collect();
    assert_eq!(polygons.len(), 2);

    // "Diabetic" (25%) is painted first in its own color, from 270 degrees
    let theme = ChartTheme::default();
    let (small, fill) = polygons[0];
    assert_eq!(fill, theme.donut_palette[0]);
    assert!((small[0].x - 15.0).abs() < 1e-3, "x = {}", small[0].x);
    assert!((small[0].y - 60.0).abs() < 1e-3);

    // "Non-Diabetic" (75%) takes the sweep from 12 o'clock
    let (large, fill) = polygons[1];
    assert_eq!(fill, theme.donut_palette[1]);
    assert!((large[0].x - 60.0).abs() < 1e-3);
    assert!((large[0].y - 15.0).abs() < 1e-3);
}

#[test]
fn test_zero_slice_is_not_drawn() {
    let chart = DonutChart::new(donut(0.0, 100.0)).unwrap();
    assert_eq!(slice_fills(&chart, FrameTime::Settled).len(), 1);
}

#[test]
fn test_grayed_out_changes_both_colors() {
    let theme = ChartTheme::default();
    for (a, b) in [(25.0, 75.0), (60.0, 40.0)] {
        let live = DonutChart::new(donut(a, b)).unwrap();
        let gray = DonutChart::new(donut(a, b).grayed_out(true)).unwrap();
        let live_fills = slice_fills(&live, FrameTime::Settled);
        let gray_fills = slice_fills(&gray, FrameTime::Settled);
        assert_eq!(live_fills, theme.donut_palette.to_vec());
        assert_eq!(gray_fills, theme.donut_muted.to_vec());
        for gray_fill in &gray_fills {
            assert!(!theme.donut_palette.contains(gray_fill));
        }
    }
}

#[test]
fn test_ring_radii() {
    let chart = DonutChart::new(donut(25.0, 75.0)).unwrap();
    let area = chart.layout().plot_area(None, Viewport::default());
    let scene = chart.render(&area, &ChartTheme::default(), FrameTime::Settled);
    let (cx, cy) = (60.0, 60.0);
    for (points, _) in scene.polygons() {
        for p in points {
            let r = ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt();
            assert!((r - 45.0).abs() < 1e-2 || (r - 25.0).abs() < 1e-2, "r = {r}");
        }
    }
}

#[test]
fn test_slices_grow_from_zero() {
    let chart = DonutChart::new(donut(25.0, 75.0)).unwrap();
    assert!(slice_fills(&chart, FrameTime::start()).is_empty());
    let mid = slice_fills(&chart, FrameTime::At(Duration::from_millis(1000)));
    assert_eq!(mid.len(), 2);
}

#[test]
fn test_legend_and_heading() {
    let props = DonutChartProps {
        is_heading_required: true,
        ..donut(25.0, 75.0)
    };
    let chart = DonutChart::new(props).unwrap();
    let area = chart.layout().plot_area(None, Viewport::default());
    assert_eq!(area.height, 120.0 + 36.0 + 20.0);

    let scene = chart.render(&area, &ChartTheme::default(), FrameTime::Settled);
    let texts: Vec<&str> = scene.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["Analysis", "Diabetic: 25%", "Non-Diabetic: 75%"]);
    assert_eq!(scene.rects().count(), 2);
}

#[test]
fn test_rejects_wrong_slice_count() {
    let props = DonutChartProps::new(vec![Datum::new("only", 100.0)]);
    assert_eq!(
        DonutChart::new(props),
        Err(ChartError::SliceCount {
            expected: 2,
            actual: 1,
        })
    );

    let config = DonutChartConfig {
        slice_count: None,
        ..Default::default()
    };
    let three = DonutChartProps::new(vec![
        Datum::new("a", 1.0),
        Datum::new("b", 1.0),
        Datum::new("c", 1.0),
    ]);
    assert!(DonutChart::with_config(three, config).is_ok());

    let props = DonutChartProps {
        inner_radius: Some(50.0),
        ..donut(25.0, 75.0)
    };
    assert!(matches!(
        DonutChart::new(props),
        Err(ChartError::InvalidGeometry(_))
    ));
}

#[test]
fn test_grayed_out_defers_animation() {
    let source = ViewportSource::default();
    let now = Instant::now();

    let gray = DonutChart::new(donut(25.0, 75.0).grayed_out(true)).unwrap();
    let mut model = ChartModel::mount(gray, &source, now);
    assert_eq!(model.phase(), AnimationPhase::Unanimated);
    assert!(model.request_frame().is_none());

    // first live data after the grayed-out mount still draws on
    let later = now + Duration::from_secs(1);
    model.set_chart(DonutChart::new(donut(25.0, 75.0)).unwrap(), later);
    assert_eq!(model.phase(), AnimationPhase::Animating { started_at: later });

    let live = DonutChart::new(donut(25.0, 75.0)).unwrap();
    let model = ChartModel::mount(live, &source, now);
    assert_eq!(model.phase(), AnimationPhase::Animating { started_at: now });
}
