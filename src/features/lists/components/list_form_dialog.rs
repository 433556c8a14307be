use leptos::ev;
use leptos::prelude::*;

use crate::components::Modal;
use crate::core::hooks::FormHandle;
use crate::models::{ListDraft, TaskList};

#[component]
pub fn ListFormDialog(form: FormHandle<TaskList, ListDraft>, on_submit: Callback<()>) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    let title = Signal::derive(move || {
        if form.is_editing() {
            "Edit List".to_string()
        } else {
            "Create New List".to_string()
        }
    });

    view! {
        <Modal
            open=Signal::derive(move || form.is_open())
            title=title
            on_close=Callback::new(move |_| form.close())
        >
            <form class="modal-form" on:submit=handle_submit>
                <div class="form-group">
                    <label for="list-title">"Title"</label>
                    <input
                        id="list-title"
                        type="text"
                        placeholder="List title..."
                        prop:value=move || form.field(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|d| d.title = value);
                        }
                        required
                    />
                </div>
                <div class="form-group">
                    <label for="list-description">"Description"</label>
                    <textarea
                        id="list-description"
                        placeholder="What is this list for?"
                        rows="3"
                        prop:value=move || form.field(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|d| d.description = value);
                        }
                        required
                    ></textarea>
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
