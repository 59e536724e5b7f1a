//! Phone directory screen.
//!
//! Paginated table with an add-entry editor overlay; editor completion
//! triggers a full refetch since the new entry may land on another page.

#[cfg(test)]
#[path = "phonebook_test.rs"]
mod phonebook_test;

use leptos::prelude::*;

use crate::components::confirm_delete::ConfirmDeleteDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::resource_table::ResourceTable;
use crate::net::api;
use crate::net::types::PhoneEntry;
use crate::pages::listing;
use crate::state::overlay::Overlay;
use crate::state::paged::PagedState;
use crate::state::toast::ToastState;

const HEADERS: &[&str] = &["ID", "Department", "Phone", "Actions"];

fn entry_is_valid(dept_name: &str, phone: &str) -> bool {
    !dept_name.trim().is_empty() && !phone.trim().is_empty()
}

/// Phone directory list with create and delete actions.
#[component]
pub fn PhoneBookPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(PagedState::<PhoneEntry>::new());
    let overlay = RwSignal::new(Overlay::<PhoneEntry>::Hidden);
    let pending_delete = RwSignal::new(None::<i64>);

    listing::use_paged_fetch(state, toasts, api::PHONEBOOK);

    let on_page = Callback::new(move |page| state.update(|s| s.set_page(page)));
    let on_add = move |_| overlay.update(|o| o.open_create());
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            listing::spawn_delete(state, toasts, api::PHONEBOOK, id);
        }
        pending_delete.set(None);
    });

    let row = move |record: PhoneEntry| {
        let id = record.id;
        view! {
            <tr>
                <td>{record.id}</td>
                <td>{record.dept_name.clone()}</td>
                <td>{record.phone.clone()}</td>
                <td class="table-actions">
                    <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(id))>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
        .into_any()
    };

    view! {
        <section class="page page--phonebook">
            <h1 class="page__title">"Phone Directory"</h1>
            <div class="page__toolbar">
                <button class="btn btn--primary" on:click=on_add>
                    "+ Add Entry"
                </button>
            </div>
            <ResourceTable state=state headers=HEADERS row=row/>
            <PaginationBar
                page=Signal::derive(move || state.get().page)
                pages=Signal::derive(move || state.get().page_count())
                total=Signal::derive(move || state.get().total)
                on_page=on_page
            />
            <Show when=move || overlay.get().is_editing()>
                <PhoneEditorDialog overlay=overlay state=state toasts=toasts/>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDeleteDialog
                    message="This will permanently remove the directory entry."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

/// Editor overlay for creating a directory entry. Stays open and surfaces
/// an error toast when the save is rejected; cancel discards the form.
#[component]
fn PhoneEditorDialog(
    overlay: RwSignal<Overlay<PhoneEntry>>,
    state: RwSignal<PagedState<PhoneEntry>>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let dept_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_cancel = Callback::new(move |()| overlay.update(|o| o.cancelled()));
    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let dept_value = dept_name.get_untracked().trim().to_owned();
        let phone_value = phone.get_untracked().trim().to_owned();
        if !entry_is_valid(&dept_value, &phone_value) {
            return;
        }
        busy.set(true);
        let _ = (&dept_value, &phone_value, state, toasts);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let entry = crate::net::types::NewPhoneEntry {
                dept_name: dept_value,
                phone: phone_value,
            };
            match api::create_phone_entry(&entry).await {
                Ok(_created) => {
                    toasts.update(|t| {
                        t.push_success(crate::net::status::SAVE_OK);
                    });
                    overlay.update(|o| {
                        o.confirmed();
                    });
                    state.update(PagedState::refresh);
                }
                Err(err) => {
                    leptos::logging::warn!("phone entry create failed: {err}");
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
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Phone Entry"</h2>
                <label class="dialog__label">
                    "Department"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || dept_name.get()
                        on:input=move |ev| dept_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phone"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
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
            </div>
        </div>
    }
}
