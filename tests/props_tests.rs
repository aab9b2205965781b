use alive_charts::data_types::{
    average_percentile, band_label_for, percentile_rank, BarChartConfig, DonutChartConfig,
};
use alive_charts::{
    BarChart, BarChartProps, DonutChart, DonutChartProps, LineChart, LineChartProps, Series,
};

#[test]
fn test_bar_props_from_host_json() {
    let json = r#"{
        "data": [{"label": "0-10", "value": 30}, {"label": "61-70", "value": 90}],
        "yAxisLabels": [0, 25, 50, 75, 100],
        "xAxisLabels": ["0-10", "61-70"],
        "userValueData": 66
    }"#;
    let props = BarChartProps::from_json(json).unwrap();
    assert_eq!(props.data.len(), 2);
    assert_eq!(props.user_value_data, 66.0);
    assert_eq!(props.width, None);

    let chart = BarChart::new(props).unwrap();
    assert_eq!(chart.emphasized_label(), Some("61-70"));
}

#[test]
fn test_line_props_from_host_json() {
    let json = r#"{
        "xAxisLabels": ["A", "B"],
        "yAxisLabels": [0, 100],
        "lineData1": [25, 25],
        "lineData2": [75, 35],
        "xAxisLabel": "Health Features",
        "yAxisLabel": "Percentages"
    }"#;
    let props = LineChartProps::from_json(json).unwrap();
    assert_eq!(props.lines()[1], &[75.0, 35.0]);
    assert!(LineChart::new(props).is_ok());
}

#[test]
fn test_donut_props_defaults() {
    let json = r#"{
        "data": [{"label": "Diabetic", "value": 25}, {"label": "Non-Diabetic", "value": 75}],
        "width": 120, "height": 120, "innerRadius": 25, "outerRadius": 45,
        "isGrayedOut": true
    }"#;
    let props = DonutChartProps::from_json(json).unwrap();
    assert!(props.is_grayed_out);
    assert!(!props.is_heading_required);
    assert_eq!(props.inner_radius, Some(25.0));

    let chart = DonutChart::new(props).unwrap();
    assert!(chart.grayed_out());
    assert_eq!(chart.config().outer_radius, 45.0);
}

#[test]
fn test_malformed_json_reports_context() {
    let err = BarChartProps::from_json("{\"data\": 3}").unwrap_err();
    assert!(format!("{err}").contains("bar chart props"));
}

#[test]
fn test_configs_fill_missing_fields() {
    let config: BarChartConfig = serde_json::from_str(r#"{"stagger_ms": 50}"#).unwrap();
    assert_eq!(config.stagger_ms, 50);
    assert_eq!(config.duration_ms, 2000);
    assert_eq!(config.band_padding, 0.4);

    let config: DonutChartConfig = serde_json::from_str(r#"{"heading": "Risk"}"#).unwrap();
    assert_eq!(config.heading, "Risk");
    assert_eq!(config.slice_count, Some(2));
}

#[test]
fn test_percentile_feeds_bar_highlight() {
    let population: Vec<f64> = (1..=100).map(f64::from).collect();
    let rank = percentile_rank(&population, 66.0).unwrap();
    assert_eq!(rank, 66.0);

    let labels = ["0-10", "11-20", "61-70", "71-80"];
    assert_eq!(band_label_for(rank, labels), Some("61-70"));

    let ranks = [Some(rank), Some(34.0), None, None, None, None, None, None];
    assert_eq!(average_percentile(&ranks, 8), Some(12.5));
}

#[test]
fn test_user_percentiles_pick_emphasized_band() {
    let series: Series = [("0-10", 30.0), ("11-20", 35.0), ("61-70", 90.0), ("71-80", 55.0)]
        .into_iter()
        .collect();
    let population: Vec<f64> = (1..=100).map(f64::from).collect();
    let ranks: Vec<Option<f64>> = [60.0, 72.0]
        .iter()
        .map(|&score| percentile_rank(&population, score))
        .collect();

    let props = BarChartProps::from_series(series, vec![0.0, 50.0, 100.0], 0.0)
        .with_user_percentiles(&ranks, 2);
    assert_eq!(props.user_value_data, 66.0);
    assert_eq!(BarChart::new(props.clone()).unwrap().emphasized_label(), Some("61-70"));

    // without ranked features the user sits in the lowest band
    let props = props.with_user_percentiles(&[], 0);
    assert_eq!(props.user_value_data, 0.0);
    assert_eq!(BarChart::new(props).unwrap().emphasized_label(), Some("0-10"));
}
