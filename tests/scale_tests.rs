use alive_charts::scales::{BandScale, ChartScale};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

#[test]
fn test_bands_stay_inside_range() {
    for n in 1..=12 {
        for width in [40.0f32, 330.0, 1000.0] {
            let scale = BandScale::new(labels(n), (0.0, width), 0.4);
            let first = scale.band_start(0).unwrap();
            let last = scale.band_start(n - 1).unwrap() + scale.bandwidth();
            assert!(first >= -1e-3, "n={n} w={width} first={first}");
            assert!(last <= width + 1e-3, "n={n} w={width} last={last}");

            // bands plus the gaps between them fit in the range
            let gaps = (scale.step() - scale.bandwidth()) * (n - 1) as f32;
            assert!(scale.bandwidth() * n as f32 + gaps <= width + 1e-3);
        }
    }
}

#[test]
fn test_bands_are_ordered_and_disjoint() {
    let scale = BandScale::new(labels(10), (0.0, 340.0), 0.4);
    for i in 1..scale.len() {
        let prev_end = scale.band_start(i - 1).unwrap() + scale.bandwidth();
        assert!(scale.band_start(i).unwrap() > prev_end);
    }
}

#[test]
fn test_single_category_is_centered() {
    let scale = BandScale::new(["only"], (0.0, 200.0), 0.4);
    assert!(scale.bandwidth() > 0.0);
    let center = scale.center(0).unwrap();
    assert!((center - 100.0).abs() < 1e-3);

    let point = BandScale::point(["only"], (0.0, 200.0), 0.5);
    assert!((point.center(0).unwrap() - 100.0).abs() < 1e-3);
}

#[test]
fn test_empty_domain() {
    let scale = BandScale::new(Vec::<String>::new(), (0.0, 200.0), 0.4);
    assert!(scale.is_empty());
    assert_eq!(scale.band_start(0), None);
    assert_eq!(scale.band_at(100.0), None);
}

#[test]
fn test_band_at_ignores_padding() {
    let scale = BandScale::new(labels(4), (0.0, 400.0), 0.4);
    let center = scale.center(2).unwrap();
    assert_eq!(scale.band_at(center), Some(2));
    let gap = scale.band_start(2).unwrap() - 1.0;
    assert_eq!(scale.band_at(gap), None);
}

#[test]
fn test_vertical_scale() {
    let y = ChartScale::vertical((0.0, 100.0), 240.0);
    assert_eq!(y.map(0.0), 240.0);
    assert_eq!(y.map(100.0), 0.0);
    assert!((y.map(25.0) - 180.0).abs() < 1e-4);
    assert!((y.invert(60.0) - 75.0).abs() < 1e-6);
}

#[test]
fn test_degenerate_domain_is_padded() {
    let y = ChartScale::vertical((5.0, 5.0), 100.0);
    assert_eq!(y.domain(), (4.5, 5.5));
    assert!((y.map(5.0) - 50.0).abs() < 1e-4);
}
