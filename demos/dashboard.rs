use alive_charts::data_types::percentile_rank;
use alive_charts::{
    BarChart, BarChartProps, ChartView, Datum, DonutChart, DonutChartProps, LineChart,
    LineChartProps, Series, Viewport, ViewportSource,
};
use eyre::WrapErr;
use gpui::prelude::*;
use gpui::*;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FEATURES: [&str; 8] = [
    "Diabetes",
    "Asthma",
    "Cadiovascular",
    "Arthritis",
    "Heart & Stroke ",
    "Migrane",
    "Bronchitis",
    "Liver Condition",
];

const DONUTS: [(&str, f64, &str, f64); 8] = [
    ("Diabetic", 25.0, "Non-Diabetic", 75.0),
    ("Asthmatic", 0.0, "Non-Asthmatic", 100.0),
    ("Cadiovas", 0.0, "Healthy-Cadiovas", 100.0),
    ("Arthritic", 0.0, "Non-Arthritic", 100.0),
    ("Stroke", 0.0, "Non-Stroke", 100.0),
    ("Migrane", 0.0, "Non-Migrane", 100.0),
    ("Bronchitic", 0.0, "Non-Bronchitic", 100.0),
    ("Liver", 0.0, "Healthy-Liver", 100.0),
];

/// The user's risk score per feature, same order as `FEATURES`.
const USER_SCORES: [f64; 8] = [72.0, 55.0, 68.0, 61.0, 80.0, 59.0, 70.0, 63.0];

/// Reference population of one feature's risk scores.
fn population() -> Vec<f64> {
    (0..100).map(f64::from).collect()
}

struct Charts {
    bar: BarChart,
    line: LineChart,
    donuts: Vec<DonutChart>,
}

fn build_charts() -> eyre::Result<Charts> {
    let percentages = vec![0.0, 25.0, 50.0, 75.0, 100.0];

    let bar_data: Series = [
        ("0-10", 30.0),
        ("11-20", 35.0),
        ("21-30", 80.0),
        ("31-40", 45.0),
        ("41-50", 60.0),
        ("51-60", 20.0),
        ("61-70", 90.0),
        ("71-80", 55.0),
        ("81-90", 45.0),
        ("91-100", 65.0),
    ]
    .into_iter()
    .collect();
    let population = population();
    let ranks: Vec<Option<f64>> = USER_SCORES
        .iter()
        .map(|&score| percentile_rank(&population, score))
        .collect();
    let bar_props = BarChartProps::from_series(bar_data, percentages.clone(), 0.0)
        .with_user_percentiles(&ranks, FEATURES.len());
    info!(percentile = bar_props.user_value_data, "user percentile");
    let bar = BarChart::new(bar_props).wrap_err("bar chart")?;

    let line_props = LineChartProps {
        x_axis_labels: FEATURES.iter().map(|f| f.to_string()).collect(),
        y_axis_labels: percentages,
        line_data1: vec![25.0; FEATURES.len()],
        line_data2: vec![25.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        x_axis_label: "Health Features".to_string(),
        y_axis_label: "Percentages".to_string(),
    };
    let line = LineChart::new(line_props).wrap_err("line chart")?;

    let donuts = DONUTS
        .iter()
        .enumerate()
        .map(|(i, (a, av, b, bv))| {
            let props = DonutChartProps::new(vec![Datum::new(*a, *av), Datum::new(*b, *bv)])
                .grayed_out(i != 0);
            DonutChart::new(props).wrap_err_with(|| format!("donut {a}"))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Charts { bar, line, donuts })
}

struct Dashboard {
    source: ViewportSource,
    bar: Entity<ChartView<BarChart>>,
    line: Entity<ChartView<LineChart>>,
    donuts: Vec<Entity<ChartView<DonutChart>>>,
}

impl Dashboard {
    fn new(charts: Charts, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let source = ViewportSource::new(viewport_of(window));
        cx.observe_window_bounds(window, |this: &mut Self, window, cx| {
            this.source.set(viewport_of(window));
            cx.notify();
        })
        .detach();

        let bar = cx.new(|cx| ChartView::new(charts.bar, &source, cx));
        let line = cx.new(|cx| ChartView::new(charts.line, &source, cx));
        let donuts = charts
            .donuts
            .into_iter()
            .map(|donut| cx.new(|cx| ChartView::new(donut, &source, cx)))
            .collect();
        info!(listeners = source.listener_count(), "dashboard mounted");

        Self {
            source,
            bar,
            line,
            donuts,
        }
    }
}

fn viewport_of(window: &Window) -> Viewport {
    let size = window.viewport_size();
    Viewport::new(f32::from(size.width), f32::from(size.height))
}

impl Render for Dashboard {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let donut_grid = div()
            .flex()
            .flex_wrap()
            .gap_4()
            .children(self.donuts.iter().map(|d| div().w(px(140.0)).child(d.clone())));

        div()
            .size_full()
            .bg(gpui::white())
            .p_4()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_color(rgb(0x1880A9))
                    .text_size(px(24.0))
                    .child("USER DASHBOARD"),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .child(self.bar.clone())
                            .child(self.line.clone()),
                    )
                    .child(div().flex_1().child(donut_grid)),
            )
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard=info,alive_charts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let charts = match build_charts() {
        Ok(charts) => charts,
        Err(err) => {
            error!("{err:?}");
            return;
        }
    };

    Application::new().run(move |cx: &mut App| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1200.0), px(800.0)),
                cx,
            ))),
            ..Default::default()
        };
        if let Err(err) = cx.open_window(options, |window, cx| {
            cx.new(|cx| Dashboard::new(charts, window, cx))
        }) {
            error!("failed to open window: {err:?}");
            cx.quit();
        }
    });
}
