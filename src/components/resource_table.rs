//! Generic table over a paginated list controller.
//!
//! DESIGN
//! ======
//! One component serves every resource screen: the page supplies the column
//! headers and a row-render closure, the table owns loading/empty states.
//! This replaces what would otherwise be five near-identical table bodies.

use leptos::prelude::*;

use crate::state::paged::PagedState;

/// Striped table rendering the current page of `state`, one `<tr>` per
/// record produced by `row`.
#[component]
pub fn ResourceTable<T, R>(
    state: RwSignal<PagedState<T>>,
    headers: &'static [&'static str],
    row: R,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    R: Fn(T) -> AnyView + Copy + Send + Sync + 'static,
{
    let colspan = headers.len().to_string();
    view! {
        <div class="resource-table">
            <table class="resource-table__table">
                <thead>
                    <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect::<Vec<_>>()}</tr>
                </thead>
                <tbody>
                    {move || {
                        let s = state.get();
                        if s.loading && s.items.is_empty() {
                            view! {
                                <tr>
                                    <td class="resource-table__status" colspan=colspan.clone()>"Loading..."</td>
                                </tr>
                            }
                            .into_any()
                        } else if s.items.is_empty() {
                            view! {
                                <tr>
                                    <td class="resource-table__status" colspan=colspan.clone()>"No records"</td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            s.items.into_iter().map(row).collect::<Vec<_>>().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
