use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::ToastHost;
use crate::config::AppConfig;
use crate::core::hooks::provide_toast;
use crate::core::services::ApiClient;
use crate::pages::{DashboardPage, ListsPage, TasksPage};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(ApiClient::new(&config));
    provide_context(config);
    provide_toast();

    view! {
        <Router>
            <ToastHost />
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard" /> } />
                <Route path=StaticSegment("dashboard") view=DashboardPage />
                <Route path=StaticSegment("lists") view=ListsPage />
                <Route path=StaticSegment("tasks") view=TasksPage />
            </Routes>
        </Router>
    }
}
