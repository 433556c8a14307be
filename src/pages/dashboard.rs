use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{AppLayout, Breadcrumb};
use crate::core::hooks::{use_toast, PageSnapshot};
use crate::core::services::{ApiClient, ApiRoute};
use crate::features::dashboard::StatTile;
use crate::models::DashboardPayload;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let page = PageSnapshot::<DashboardPayload>::new(use_toast());

    page.visit(
        async move { api.load(ApiRoute::Dashboard, None).await },
        |_| {},
    );

    let tiles = move || {
        page.with(|props| props.map(|p| p.stats).unwrap_or_default())
            .cards()
            .into_iter()
            .map(|card| view! { <StatTile card=card /> })
            .collect::<Vec<_>>()
    };

    view! {
        <AppLayout title="Dashboard" breadcrumbs=vec![Breadcrumb::new("Dashboard", "/dashboard")]>
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">"Welcome back! Here's your overview"</p>
                </div>
                <div class="page-header-actions">
                    <A href="/lists" attr:class="btn-secondary">"View Lists"</A>
                    <A href="/tasks" attr:class="btn-primary">"View Tasks"</A>
                </div>
            </div>

            <div class="stat-grid">{tiles}</div>

            <div class="dashboard-cards">
                <section class="card">
                    <h2>"Quick Actions"</h2>
                    <p class="card-caption">"Jump straight to your work"</p>
                    <div class="quick-actions">
                        <A href="/lists" attr:class="btn-secondary">"Manage Lists"</A>
                        <A href="/tasks" attr:class="btn-secondary">"Manage Tasks"</A>
                    </div>
                </section>
                <section class="card">
                    <h2>"Recent Activity"</h2>
                    <p class="card-caption">"Your latest updates"</p>
                    <div class="activity-item">
                        <span class="activity-dot" aria-hidden="true"></span>
                        <div>
                            <p class="activity-title">"Welcome to Task Manager"</p>
                            <p class="activity-caption">"Create lists and tasks to get started"</p>
                        </div>
                    </div>
                </section>
            </div>
        </AppLayout>
    }
}
