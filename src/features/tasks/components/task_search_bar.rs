use leptos::ev;
use leptos::prelude::*;

use crate::models::{StatusFilter, TaskQuery};

/// Free-text search plus completion-status select, both showing `controls`.
///
/// Typing only edits `controls`; the owner navigates on submit or filter change.
#[component]
pub fn TaskSearchBar(
    controls: RwSignal<TaskQuery>,
    on_search: Callback<()>,
    on_filter: Callback<StatusFilter>,
) -> impl IntoView {
    let filter = move || controls.with(|c| c.filter);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <div class="task-search-bar">
            <form class="search-form" role="search" on:submit=handle_submit>
                <span class="search-icon">"⌕"</span>
                <input
                    type="search"
                    placeholder="Search tasks..."
                    prop:value=move || controls.with(|c| c.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        controls.update(|c| *c = c.with_search(value));
                    }
                />
            </form>
            <select
                class="status-filter"
                aria-label="Filter by status"
                prop:value=move || filter().as_str()
                on:change=move |ev| on_filter.run(StatusFilter::parse(&event_target_value(&ev)))
            >
                {StatusFilter::all()
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.as_str() selected=move || filter() == option>
                                {option.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
