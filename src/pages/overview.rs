//! Usage overview screen.
//!
//! Fetches today's counters and the trailing-month series once on mount;
//! a failure of either call shows an error toast and leaves the zeroed
//! placeholders in place.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::components::usage_chart::{UsageChart, UsagePoint};
use crate::net::types::{DayUsage, MonthUsage};
use crate::state::toast::ToastState;
use crate::util::date::format_ymd;

fn chart_points(samples: &[MonthUsage]) -> Vec<UsagePoint> {
    samples
        .iter()
        .map(|s| UsagePoint {
            date: format_ymd(&s.created_at),
            count: s.user_count,
        })
        .collect()
}

#[cfg(feature = "hydrate")]
async fn load_overview() -> Result<(DayUsage, Vec<UsagePoint>), String> {
    let day = crate::net::api::fetch_day_usage().await?;
    let month = crate::net::api::fetch_month_usage().await?;
    Ok((day, chart_points(&month)))
}

/// Landing screen with headline counters and the month-usage chart.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let day = RwSignal::new(DayUsage::default());
    let chart = RwSignal::new(Vec::<UsagePoint>::new());
    let loading = RwSignal::new(true);

    let _ = toasts;
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = load_overview().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok((counters, points)) => {
                    day.set(counters);
                    chart.set(points);
                }
                Err(err) => {
                    leptos::logging::warn!("overview fetch failed: {err}");
                    toasts.update(|t| {
                        t.push_error(crate::net::status::FETCH_FAILED);
                    });
                }
            }
            loading.set(false);
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="page page--overview">
            <h1 class="page__title">"Welcome back"</h1>
            <div class="stat-grid">
                <StatCard
                    title="Users today"
                    count=Signal::derive(move || day.get().users)
                    unit="users"
                    loading=loading
                />
                <StatCard
                    title="Unanswered messages"
                    count=Signal::derive(move || day.get().messages)
                    unit="messages"
                    loading=loading
                />
                <StatCard
                    title="Open repairs"
                    count=Signal::derive(move || day.get().repairs)
                    unit="tickets"
                    loading=loading
                />
                <StatCard
                    title="Pending reservations"
                    count=Signal::derive(move || day.get().reservations)
                    unit="requests"
                    loading=loading
                />
            </div>
            <div class="usage-section">
                <p class="usage-section__title">
                    "Active users"
                    <span class="usage-section__sub">" last month"</span>
                </p>
                <UsageChart points=chart loading=loading/>
            </div>
        </section>
    }
}
