//! Prev/next pager rendered under every resource table.

#[cfg(test)]
#[path = "pagination_bar_test.rs"]
mod pagination_bar_test;

use leptos::prelude::*;

fn range_label(page: u64, pages: u64, total: u64) -> String {
    format!("Page {page} / {pages} ({total} total)")
}

/// Pagination controls bound to a list controller's page, page count, and
/// total. Page changes are reported through `on_page`; bounds are enforced
/// here so the controller only ever sees valid page numbers.
#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<u64>,
    #[prop(into)] pages: Signal<u64>,
    #[prop(into)] total: Signal<u64>,
    on_page: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || page.get() <= 1
                on:click=move |_| {
                    let current = page.get();
                    if current > 1 {
                        on_page.run(current - 1);
                    }
                }
            >
                "Prev"
            </button>
            <span class="pager__label">{move || range_label(page.get(), pages.get(), total.get())}</span>
            <button
                class="btn pager__next"
                disabled=move || page.get() >= pages.get()
                on:click=move |_| {
                    let current = page.get();
                    if current < pages.get() {
                        on_page.run(current + 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}
