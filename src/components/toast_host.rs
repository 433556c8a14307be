use leptos::prelude::*;

use crate::core::hooks::use_toast;

/// Renders the single visible toast, if any.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    move || {
        toast.current().map(|current| {
            let (class, icon) = if current.is_success() {
                ("toast toast--success", "✓")
            } else {
                ("toast toast--error", "✕")
            };
            view! {
                <div class=class role="status" aria-live="polite">
                    <span class="toast-icon">{icon}</span>
                    <span class="toast-message">{current.message}</span>
                    <button type="button" class="toast-close" on:click=move |_| toast.dismiss()>"×"</button>
                </div>
            }
        })
    }
}
