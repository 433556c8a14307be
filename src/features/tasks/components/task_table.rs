use chrono::Local;
use leptos::prelude::*;

use crate::models::Task;

#[component]
pub fn TaskTable(
    tasks: Signal<Vec<Task>>,
    loading: Signal<bool>,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let rows = move || {
        let tasks = tasks.get();
        if tasks.is_empty() {
            let message = if loading.get() { "Loading tasks..." } else { "No tasks found." };
            return view! {
                <tr class="table-empty">
                    <td colspan="6">{message}</td>
                </tr>
            }
            .into_any();
        }

        let today = Local::now().date_naive();
        tasks
            .into_iter()
            .map(|task| {
                let overdue = task.is_overdue(today);
                let status_class = if task.is_completed { "status-badge status-badge--done" } else { "status-badge status-badge--pending" };
                let for_edit = task.clone();
                let for_delete = task.clone();
                view! {
                    <tr class:row-completed=task.is_completed>
                        <td class="cell-title">{task.title.clone()}</td>
                        <td class="cell-description">{task.description_or_placeholder().to_string()}</td>
                        <td class="cell-list">
                            <span class="list-chip">{task.list_title().to_string()}</span>
                        </td>
                        <td class="cell-due" class:overdue=overdue>{task.due_date_label()}</td>
                        <td>
                            <span class=status_class>{task.status_label()}</span>
                        </td>
                        <td class="cell-actions">
                            <button
                                type="button"
                                class="action-btn edit-btn"
                                title="Edit task"
                                on:click=move |_| on_edit.run(for_edit.clone())
                            >
                                "✎"
                            </button>
                            <button
                                type="button"
                                class="action-btn delete-btn"
                                title="Delete task"
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
                        <th>"List"</th>
                        <th>"Due Date"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
