use leptos::prelude::*;

use crate::models::pagination::page_links;
use crate::models::PageLink;

/// Where the current page sits in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current: u32,
    pub last: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub summary: String,
}

#[component]
pub fn Pagination(info: Signal<Option<PageInfo>>, on_page: Callback<u32>) -> impl IntoView {
    move || {
        info.get().map(|info| {
            let current = info.current;
            let last = info.last;
            let links = page_links(current, last)
                .into_iter()
                .map(|link| match link {
                    PageLink::Page(n) => view! {
                        <button
                            type="button"
                            class="page-link"
                            class:active=n == current
                            disabled=n == current
                            on:click=move |_| on_page.run(n)
                        >
                            {n}
                        </button>
                    }
                    .into_any(),
                    PageLink::Gap => view! { <span class="page-gap">"…"</span> }.into_any(),
                })
                .collect::<Vec<_>>();

            view! {
                <div class="pagination">
                    <span class="pagination-summary">{info.summary}</span>
                    <div class="pagination-links">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=!info.has_previous
                            on:click=move |_| on_page.run(current.saturating_sub(1).max(1))
                        >
                            "Previous"
                        </button>
                        {links}
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=!info.has_next
                            on:click=move |_| on_page.run(current + 1)
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
