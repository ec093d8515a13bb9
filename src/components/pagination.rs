//! Pagination Component
//!
//! `< Previous  [page]  [page + 1]  Next >`. The shortcut button only
//! appears while a next page exists.

use leptos::prelude::*;

use admin_core::list_query::Pagination;

#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let go = move |page: u32| on_page.run(page);

    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || pagination.get().previous_disabled
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if !p.previous_disabled {
                        go(p.page - 1);
                    }
                }
            >
                "< Previous"
            </button>

            <span class="page-current">{move || pagination.get().page}</span>

            {move || pagination.get().next_shortcut.map(|next| view! {
                <button class="page-btn page-shortcut" on:click=move |_| go(next)>
                    {next}
                </button>
            })}

            <button
                class="page-btn"
                disabled=move || pagination.get().next_disabled
                on:click=move |_| {
                    let p = pagination.get_untracked();
                    if !p.next_disabled {
                        go(p.page + 1);
                    }
                }
            >
                "Next >"
            </button>
        </nav>
    }
}
