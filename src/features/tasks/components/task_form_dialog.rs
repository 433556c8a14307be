use leptos::ev;
use leptos::prelude::*;

use crate::components::Modal;
use crate::core::hooks::FormHandle;
use crate::models::{ListSummary, Task, TaskDraft};

/// Create/edit dialog for a task. `lists` feeds the owning-list select.
#[component]
pub fn TaskFormDialog(
    form: FormHandle<Task, TaskDraft>,
    lists: Signal<Vec<ListSummary>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let title = Signal::derive(move || {
        if form.is_editing() {
            "Edit Task".to_string()
        } else {
            "Create New Task".to_string()
        }
    });

    let list_options = move || {
        let selected = form.field(|d| d.list_id);
        lists
            .get()
            .into_iter()
            .map(|list| {
                let is_selected = selected == Some(list.id);
                view! {
                    <option value=list.id.to_string() selected=is_selected>{list.title}</option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Modal
            open=Signal::derive(move || form.is_open())
            title=title
            on_close=Callback::new(move |_| form.close())
        >
            <form class="modal-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="task-title">"Title"</label>
                    <input
                        id="task-title"
                        type="text"
                        placeholder="Task title..."
                        prop:value=move || form.field(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|d| d.title = value);
                        }
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="task-description">"Description"</label>
                    <textarea
                        id="task-description"
                        placeholder="Task description..."
                        rows="4"
                        prop:value=move || form.field(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|d| d.description = value);
                        }
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="task-list">"List"</label>
                    <select
                        id="task-list"
                        prop:value=move || form.field(|d| d.list_id_value())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|d| d.set_list_id(&value));
                        }
                        required
                    >
                        <option value="" disabled selected=move || form.field(|d| d.list_id.is_none())>
                            "Select a list"
                        </option>
                        {list_options}
                    </select>
                </div>
                <div class="form-group">
                    <label for="task-due-date">"Due Date"</label>
                    <input
                        id="task-due-date"
                        type="date"
                        prop:value=move || form.field(|d| d.due_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|d| d.due_date = value);
                        }
                    />
                </div>
                <div class="form-group form-check">
                    <input
                        id="task-completed"
                        type="checkbox"
                        prop:checked=move || form.field(|d| d.is_completed)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.set(|d| d.is_completed = checked);
                        }
                    />
                    <label for="task-completed">"Completed"</label>
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| form.close()>"Cancel"</button>
                    <button type="submit" class="btn-primary" disabled=move || form.is_processing()>
                        {move || if form.is_editing() { "Update" } else { "Create" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
