//! Reservation request screen.
//!
//! Paginated table with a detail overlay that can switch into edit mode to
//! mark a request processed; a successful save patches the one changed row
//! in place.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use leptos::prelude::*;

use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::resource_table::ResourceTable;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::Reservation;
use crate::pages::listing;
use crate::state::overlay::Overlay;
use crate::state::paged::PagedState;
use crate::state::toast::ToastState;
use crate::util::text::truncate_ellipsis;

const HEADERS: &[&str] = &["ID", "Type", "Student", "Department", "Content", "Status", "Actions"];

/// Character budget for the content column.
const CONTENT_BUDGET: usize = 20;

fn content_cell(content: &str) -> String {
    truncate_ellipsis(content, CONTENT_BUDGET)
}

/// Reservation request list with view/edit/delete actions.
#[component]
pub fn ReservationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(PagedState::<Reservation>::new());
    let overlay = RwSignal::new(Overlay::<Reservation>::Hidden);
    let pending_delete = RwSignal::new(None::<i64>);

    listing::use_paged_fetch(state, toasts, api::RESERVATIONS);

    let on_page = Callback::new(move |page| state.update(|s| s.set_page(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            listing::spawn_delete(state, toasts, api::RESERVATIONS, id);
        }
        pending_delete.set(None);
    });

    let row = move |record: Reservation| {
        let id = record.id;
        let view_record = record.clone();
        view! {
            <tr>
                <td>{record.id}</td>
                <td>{record.kind.clone()}</td>
                <td>{record.stu_name.clone()}</td>
                <td>{record.sdept.clone()}</td>
                <td>{content_cell(&record.content)}</td>
                <td>
                    <StatusBadge value=record.status on_label="Processed" off_label="Pending"/>
                </td>
                <td class="table-actions">
                    <button
                        class="btn"
                        on:click=move |_| overlay.update(|o| o.open_view(view_record.clone()))
                    >
                        "View"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(id))>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
        .into_any()
    };

    view! {
        <section class="page page--reservations">
            <h1 class="page__title">"Reservations"</h1>
            <ResourceTable state=state headers=HEADERS row=row/>
            <PaginationBar
                page=Signal::derive(move || state.get().page)
                pages=Signal::derive(move || state.get().page_count())
                total=Signal::derive(move || state.get().total)
                on_page=on_page
            />
            <Show when=move || overlay.get().is_open()>
                <ReservationDetailDialog overlay=overlay state=state toasts=toasts/>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    message="This will permanently remove the reservation request."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

/// Detail overlay for one request: read-only by default, with an edit mode
/// that toggles the processed status. A rejected save keeps the dialog
/// open; cancel discards the toggle.
#[component]
fn ReservationDetailDialog(
    overlay: RwSignal<Overlay<Reservation>>,
    state: RwSignal<PagedState<Reservation>>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let processed = RwSignal::new(
        overlay
            .get_untracked()
            .record()
            .map(|r| r.status)
            .unwrap_or(false),
    );
    let busy = RwSignal::new(false);

    let on_cancel = Callback::new(move |()| overlay.update(|o| o.cancelled()));
    let on_edit = Callback::new(move |()| {
        if let Some(record) = overlay.get_untracked().record() {
            processed.set(record.status);
            overlay.update(|o| o.open_edit(record));
        }
    });
    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(mut reservation) = overlay.get_untracked().record() else {
            return;
        };
        reservation.status = processed.get_untracked();
        busy.set(true);
        let _ = (&reservation, state, toasts);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_reservation(&reservation).await {
                Ok(updated) => {
                    state.update(|s| {
                        s.patch(updated);
                    });
                    toasts.update(|t| {
                        t.push_success(crate::net::status::SAVE_OK);
                    });
                    overlay.update(|o| {
                        o.confirmed();
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("reservation update failed: {err}");
                    toasts.update(|t| {
                        t.push_error(crate::net::status::SAVE_FAILED);
                    });
                }
            }
            busy.set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--detail" on:click=move |ev| ev.stop_propagation()>
                <h2>"Reservation Request"</h2>
                {move || {
                    overlay.get().record().map(|r| {
                        view! {
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"ID"</span>
                                <span>{r.id}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Type"</span>
                                <span>{r.kind.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Student"</span>
                                <span>{r.stu_name.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Department"</span>
                                <span>{r.sdept.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Content"</span>
                                <span>{r.content.clone()}</span>
                            </div>
                        }
                    })
                }}
                <Show
                    when=move || overlay.get().is_editing()
                    fallback=move || {
                        view! {
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Status"</span>
                                <span>
                                    {move || {
                                        overlay
                                            .get()
                                            .record()
                                            .map(|r| if r.status { "Processed" } else { "Pending" })
                                    }}
                                </span>
                            </div>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| on_cancel.run(())>
                                    "Close"
                                </button>
                                <button class="btn btn--primary" on:click=move |_| on_edit.run(())>
                                    "Edit"
                                </button>
                            </div>
                        }
                    }
                >
                    <label class="dialog__label dialog__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || processed.get()
                            on:change=move |ev| processed.set(event_target_checked(&ev))
                        />
                        "Request processed"
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || busy.get()
                            on:click=move |_| submit.run(())
                        >
                            "Save"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
