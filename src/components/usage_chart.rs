//! Area-line chart for the month-usage series.
//!
//! Only the point scaling lives here; everything visual is a plain inline
//! SVG polyline sized by a fixed view box.

#[cfg(test)]
#[path = "usage_chart_test.rs"]
mod usage_chart_test;

use leptos::prelude::*;

/// View-box width of the chart.
pub const CHART_WIDTH: f64 = 640.0;
/// View-box height of the chart.
pub const CHART_HEIGHT: f64 = 160.0;

/// One sample on the usage chart.
#[derive(Clone, Debug, PartialEq)]
pub struct UsagePoint {
    /// Display date (`year-month-day`).
    pub date: String,
    /// Active-user count for that day.
    pub count: u64,
}

/// Scale `points` into an SVG polyline `points` attribute for a
/// `width` x `height` view box. The x axis spreads samples evenly; the y
/// axis is normalized so the series maximum touches the top edge.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn polyline_points(points: &[UsagePoint], width: f64, height: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1) as f64;
    let n = points.len();
    let step = if n > 1 { width / (n - 1) as f64 } else { 0.0 };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if n > 1 { i as f64 * step } else { width / 2.0 };
            let y = height - (p.count as f64 / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The month-usage line with a first/last date footer.
#[component]
pub fn UsageChart(
    #[prop(into)] points: Signal<Vec<UsagePoint>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="usage-chart">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="usage-chart__status">"Loading..."</p> }
            >
                <svg
                    class="usage-chart__svg"
                    viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                    attr:preserveAspectRatio="none"
                    role="img"
                >
                    <polyline
                        class="usage-chart__line"
                        fill="none"
                        points=move || polyline_points(&points.get(), CHART_WIDTH, CHART_HEIGHT)
                    ></polyline>
                </svg>
                <div class="usage-chart__range">
                    <span>{move || points.get().first().map(|p| p.date.clone()).unwrap_or_default()}</span>
                    <span>{move || points.get().last().map(|p| p.date.clone()).unwrap_or_default()}</span>
                </div>
            </Show>
        </div>
    }
}
