//! Dormitory repair ticket screen.
//!
//! Paginated table with a detail overlay that can switch into edit mode to
//! close out a ticket; a successful save patches the one changed row in
//! place instead of refetching.

#[cfg(test)]
#[path = "repairs_test.rs"]
mod repairs_test;

use leptos::prelude::*;

use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::resource_table::ResourceTable;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::RepairTicket;
use crate::pages::listing;
use crate::state::overlay::Overlay;
use crate::state::paged::PagedState;
use crate::state::toast::ToastState;
use crate::util::date::format_ymd_opt;

const HEADERS: &[&str] = &["ID", "Item", "Dorm", "Room", "Submitted", "Status", "Actions"];

fn submitted_cell(created_at: Option<&str>) -> String {
    format_ymd_opt(created_at)
}

/// Repair ticket list with view/edit/delete actions.
#[component]
pub fn RepairsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(PagedState::<RepairTicket>::new());
    let overlay = RwSignal::new(Overlay::<RepairTicket>::Hidden);
    let pending_delete = RwSignal::new(None::<i64>);

    listing::use_paged_fetch(state, toasts, api::REPAIRS);

    let on_page = Callback::new(move |page| state.update(|s| s.set_page(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            listing::spawn_delete(state, toasts, api::REPAIRS, id);
        }
        pending_delete.set(None);
    });

    let row = move |record: RepairTicket| {
        let id = record.id;
        let view_record = record.clone();
        view! {
            <tr>
                <td>{record.id}</td>
                <td>{record.item_name.clone()}</td>
                <td>{record.dorm.clone()}</td>
                <td>{record.room.clone()}</td>
                <td>{submitted_cell(record.created_at.as_deref())}</td>
                <td>
                    <StatusBadge value=record.status on_label="Fixed" off_label="Open"/>
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
        <section class="page page--repairs">
            <h1 class="page__title">"Dorm Repairs"</h1>
            <ResourceTable state=state headers=HEADERS row=row/>
            <PaginationBar
                page=Signal::derive(move || state.get().page)
                pages=Signal::derive(move || state.get().page_count())
                total=Signal::derive(move || state.get().total)
                on_page=on_page
            />
            <Show when=move || overlay.get().is_open()>
                <RepairDetailDialog overlay=overlay state=state toasts=toasts/>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    message="This will permanently remove the repair ticket."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

/// Detail overlay for one ticket: read-only by default, with an edit mode
/// that toggles the completion status. A rejected save keeps the dialog
/// open; cancel discards the toggle.
#[component]
fn RepairDetailDialog(
    overlay: RwSignal<Overlay<RepairTicket>>,
    state: RwSignal<PagedState<RepairTicket>>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let fixed = RwSignal::new(
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
            fixed.set(record.status);
            overlay.update(|o| o.open_edit(record));
        }
    });
    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(mut ticket) = overlay.get_untracked().record() else {
            return;
        };
        ticket.status = fixed.get_untracked();
        busy.set(true);
        let _ = (&ticket, state, toasts);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_repair(&ticket).await {
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
                    leptos::logging::warn!("repair update failed: {err}");
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
                <h2>"Repair Ticket"</h2>
                {move || {
                    overlay.get().record().map(|r| {
                        view! {
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"ID"</span>
                                <span>{r.id}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Item"</span>
                                <span>{r.item_name.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Dorm"</span>
                                <span>{r.dorm.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Room"</span>
                                <span>{r.room.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Submitted"</span>
                                <span>{submitted_cell(r.created_at.as_deref())}</span>
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
                                            .map(|r| if r.status { "Fixed" } else { "Open" })
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
                            prop:checked=move || fixed.get()
                            on:change=move |ev| fixed.set(event_target_checked(&ev))
                        />
                        "Repair completed"
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
