//! Fetch and delete orchestration shared by the table screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand their list controller to `use_paged_fetch` once; it refetches
//! whenever the controller's fetch key (page or refresh marker) changes.
//! Results are applied only when their sequence stamp is still current and
//! the page is still mounted, so neither a stale response nor a response
//! landing after navigation can overwrite fresher state.

use leptos::prelude::*;

use crate::state::paged::{PagedRecord, PagedState};
use crate::state::toast::ToastState;

/// Refetch the current page of `resource` whenever `state`'s fetch key
/// changes. Failures surface as an error toast and leave prior records in
/// place.
pub(crate) fn use_paged_fetch<T>(
    state: RwSignal<PagedState<T>>,
    toasts: RwSignal<ToastState>,
    resource: &'static str,
) where
    T: serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let fetch_key = Memo::new(move |_| state.get().fetch_key());
    Effect::new(move || {
        fetch_key.track();
        let mut issued = (0_u64, 0_u64, 0_u64);
        state.update(|s| issued = (s.offset(), s.limit(), s.begin_fetch()));
        let (offset, limit, seq) = issued;
        let _ = (offset, limit, seq, resource, toasts);
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_page::<T>(resource, offset, limit).await {
                    Ok(page) => {
                        if alive.load(std::sync::atomic::Ordering::Relaxed) {
                            state.update(|s| {
                                s.apply_page(seq, page.items, page.total);
                            });
                        }
                    }
                    Err(err) => {
                        if alive.load(std::sync::atomic::Ordering::Relaxed) {
                            leptos::logging::warn!("page fetch failed: {resource}: {err}");
                            let mut current = false;
                            state.update(|s| current = s.fetch_failed(seq));
                            if current {
                                toasts.update(|t| {
                                    t.push_error(crate::net::status::FETCH_FAILED);
                                });
                            }
                        }
                    }
                }
            });
        }
    });
}

/// Issue a delete for `id` and, on success, remove it from the current page
/// without refetching. Outcomes surface as toasts; failures leave the list
/// untouched.
pub(crate) fn spawn_delete<T>(
    state: RwSignal<PagedState<T>>,
    toasts: RwSignal<ToastState>,
    resource: &'static str,
    id: i64,
) where
    T: PagedRecord + Clone + Send + Sync + 'static,
{
    let _ = (state, toasts, resource, id);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_by_id(resource, id).await {
            Ok(()) => {
                state.update(|s| {
                    s.remove_by_id(id);
                });
                toasts.update(|t| {
                    t.push_success(crate::net::status::DELETE_OK);
                });
            }
            Err(err) => {
                leptos::logging::warn!("delete failed: {resource}/{id}: {err}");
                toasts.update(|t| {
                    t.push_error(crate::net::status::DELETE_FAILED);
                });
            }
        }
    });
}
