use leptos::prelude::*;

use crate::models::TaskList;

#[component]
pub fn ListTable(
    lists: Signal<Vec<TaskList>>,
    loading: Signal<bool>,
    on_edit: Callback<TaskList>,
    on_delete: Callback<TaskList>,
) -> impl IntoView {
    let rows = move || {
        let lists = lists.get();
        if lists.is_empty() {
            let message = if loading.get() { "Loading lists..." } else { "No lists yet. Create your first one." };
            return view! {
                <tr class="table-empty">
                    <td colspan="4">{message}</td>
                </tr>
            }
            .into_any();
        }

        lists
            .into_iter()
            .map(|list| {
                let for_edit = list.clone();
                let for_delete = list.clone();
                view! {
                    <tr>
                        <td class="cell-title">{list.title.clone()}</td>
                        <td class="cell-description">{list.description_or_placeholder().to_string()}</td>
                        <td class="cell-count">{list.tasks_count_label()}</td>
                        <td class="cell-actions">
                            <button
                                type="button"
                                class="action-btn edit-btn"
                                title="Edit list"
                                on:click=move |_| on_edit.run(for_edit.clone())
                            >
                                "✎"
                            </button>
                            <button
                                type="button"
                                class="action-btn delete-btn"
                                title="Delete list"
                                on:click=move |_| on_delete.run(for_delete.clone())
                            >
                                "🗑"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="table-wrapper">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Description"</th>
                        <th>"Tasks"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
