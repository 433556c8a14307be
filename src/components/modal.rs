use leptos::html::Dialog;
use leptos::prelude::*;

/// `<dialog>` shell whose visibility follows `open`.
///
/// Escape and the × button both report through `on_close`; the owner decides
/// what closing means for its draft.
#[component]
pub fn Modal(
    open: Signal<bool>,
    title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    Effect::new(move |_| {
        let should_open = open.get();
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        if should_open && !dialog.open() {
            if let Err(err) = dialog.show_modal() {
                log::warn!("could not open dialog: {:?}", err);
            }
        } else if !should_open && dialog.open() {
            dialog.close();
        }
    });

    view! {
        <dialog node_ref=dialog_ref class="modal" on:close=move |_| on_close.run(())>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{move || title.get()}</h3>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {children()}
            </div>
        </dialog>
    }
}
