use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::core::browser::set_document_title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: &'static str,
    pub href: &'static str,
}

impl Breadcrumb {
    pub const fn new(title: &'static str, href: &'static str) -> Self {
        Self { title, href }
    }
}

/// Page chrome: navigation, breadcrumbs and the document title.
#[component]
pub fn AppLayout(
    title: &'static str,
    breadcrumbs: Vec<Breadcrumb>,
    children: Children,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    set_document_title(&config.document_title(title));

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="app-brand">{config.app_name.clone()}</span>
                <nav class="app-nav">
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/lists">"Lists"</A>
                    <A href="/tasks">"Tasks"</A>
                </nav>
            </header>
            <nav class="breadcrumbs" aria-label="Breadcrumb">
                {breadcrumbs
                    .into_iter()
                    .map(|crumb| view! { <A href=crumb.href>{crumb.title}</A> })
                    .collect::<Vec<_>>()}
            </nav>
            <main class="page">{children()}</main>
        </div>
    }
}
