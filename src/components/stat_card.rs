//! Single counter card for the overview screen.

use leptos::prelude::*;

/// One headline statistic with a unit suffix. Shows a placeholder while the
/// overview fetch is still in flight.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] count: Signal<u64>,
    unit: &'static str,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__count">
                {move || if loading.get() { "...".to_owned() } else { count.get().to_string() }}
                <span class="stat-card__unit">{unit}</span>
            </div>
        </div>
    }
}
