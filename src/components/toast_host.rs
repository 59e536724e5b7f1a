//! Renders the shared notification queue.
//!
//! Toasts auto-expire oldest-first on a fixed cadence; clicking a toast
//! dismisses it immediately.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Seconds between auto-dismiss ticks.
#[cfg(feature = "hydrate")]
const DISMISS_INTERVAL_SECS: u64 = 3;

/// Overlay host for the toast queue provided via context.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_INTERVAL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                toasts.update(ToastState::dismiss_oldest);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id children=move |toast: Toast| {
                let id = toast.id;
                let class = match toast.kind {
                    ToastKind::Success => "toast toast--success",
                    ToastKind::Error => "toast toast--error",
                };
                view! {
                    <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                        {toast.text.clone()}
                    </div>
                }
            }/>
        </div>
    }
}
