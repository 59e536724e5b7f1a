//! Lost-and-found registry screen.
//!
//! Paginated table with a read-only detail overlay and confirm-then-delete
//! row actions.

#[cfg(test)]
#[path = "lost_and_found_test.rs"]
mod lost_and_found_test;

use leptos::prelude::*;

use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::resource_table::ResourceTable;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::LostItem;
use crate::pages::listing;
use crate::state::overlay::Overlay;
use crate::state::paged::PagedState;
use crate::state::toast::ToastState;
use crate::util::text::{or_missing, truncate_ellipsis};

const HEADERS: &[&str] = &["ID", "Item", "Location", "Description", "Lost", "Status", "Actions"];

/// Character budget for the description column.
const DESCRIPTION_BUDGET: usize = 25;

fn description_cell(description: &str) -> String {
    truncate_ellipsis(description, DESCRIPTION_BUDGET)
}

/// Lost-and-found list with view/delete actions per row.
#[component]
pub fn LostAndFoundPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(PagedState::<LostItem>::new());
    let overlay = RwSignal::new(Overlay::<LostItem>::Hidden);
    let pending_delete = RwSignal::new(None::<i64>);

    listing::use_paged_fetch(state, toasts, api::LOST_AND_FOUND);

    let on_page = Callback::new(move |page| state.update(|s| s.set_page(page)));
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            listing::spawn_delete(state, toasts, api::LOST_AND_FOUND, id);
        }
        pending_delete.set(None);
    });

    let row = move |record: LostItem| {
        let id = record.id;
        let view_record = record.clone();
        view! {
            <tr>
                <td>{record.id}</td>
                <td>{record.item_name.clone()}</td>
                <td>{or_missing(record.location.as_deref())}</td>
                <td>{description_cell(&record.description)}</td>
                <td>{or_missing(record.lost_time.as_deref())}</td>
                <td>
                    <StatusBadge value=record.status on_label="Claimed" off_label="Unclaimed"/>
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
        <section class="page page--lost-and-found">
            <h1 class="page__title">"Lost & Found"</h1>
            <ResourceTable state=state headers=HEADERS row=row/>
            <PaginationBar
                page=Signal::derive(move || state.get().page)
                pages=Signal::derive(move || state.get().page_count())
                total=Signal::derive(move || state.get().total)
                on_page=on_page
            />
            <Show when=move || overlay.get().is_viewing()>
                <LostItemDetail overlay=overlay/>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    message="This will permanently remove the lost-and-found record."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

/// Read-only detail overlay; never mutates the record.
#[component]
fn LostItemDetail(overlay: RwSignal<Overlay<LostItem>>) -> impl IntoView {
    let on_close = Callback::new(move |()| overlay.update(|o| o.cancelled()));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--detail" on:click=move |ev| ev.stop_propagation()>
                <h2>"Lost Item Detail"</h2>
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
                                <span class="dialog__detail-label">"Location"</span>
                                <span>{or_missing(r.location.as_deref())}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Description"</span>
                                <span>{r.description.clone()}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Lost"</span>
                                <span>{or_missing(r.lost_time.as_deref())}</span>
                            </div>
                            <div class="dialog__detail-row">
                                <span class="dialog__detail-label">"Status"</span>
                                <span>{if r.status { "Claimed" } else { "Unclaimed" }}</span>
                            </div>
                        }
                    })
                }}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
