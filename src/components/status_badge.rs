//! Two-state badge for boolean record status columns.

use leptos::prelude::*;

/// Renders one of two mutually exclusive badges for a boolean status.
#[component]
pub fn StatusBadge(value: bool, on_label: &'static str, off_label: &'static str) -> impl IntoView {
    let class = if value {
        "badge badge--success"
    } else {
        "badge badge--error"
    };
    let label = if value { on_label } else { off_label };
    view! { <span class=class>{label}</span> }
}
