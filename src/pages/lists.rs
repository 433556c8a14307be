use leptos::prelude::*;

use crate::components::{AppLayout, Breadcrumb};
use crate::core::browser::confirm;
use crate::core::hooks::{use_toast, FormHandle, PageSnapshot};
use crate::core::services::{ApiClient, ApiRoute, Resource};
use crate::features::lists::{ListFormDialog, ListTable};
use crate::models::{ListDraft, ListsPayload, TaskList};

#[component]
pub fn ListsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let page = PageSnapshot::<ListsPayload>::new(use_toast());
    let form = FormHandle::<TaskList, ListDraft>::new();

    let loader = api.clone();
    page.visit(
        async move { loader.load(ApiRoute::Index(Resource::Lists), None).await },
        |_| {},
    );

    let submitter = api.clone();
    let on_submit = Callback::new(move |_| {
        form.submit(page, submitter.clone(), Resource::Lists);
    });

    let on_edit = Callback::new(move |list: TaskList| form.open_edit(&list));

    let on_delete = Callback::new(move |list: TaskList| {
        if !confirm(&format!("Delete the list \"{}\" and all of its tasks?", list.title)) {
            return;
        }
        let api = api.clone();
        log::info!("deleting list {}", list.id);
        page.visit(
            async move {
                api.submit::<_, ()>(ApiRoute::Destroy(Resource::Lists, list.id), None)
                    .await
            },
            |_| {},
        );
    });

    let lists = Signal::derive(move || page.with(|p| p.map(|p| p.lists.clone()).unwrap_or_default()));
    let loading = Signal::derive(move || page.is_loading());

    view! {
        <AppLayout
            title="Lists"
            breadcrumbs=vec![
                Breadcrumb::new("Dashboard", "/dashboard"),
                Breadcrumb::new("Lists", "/lists"),
            ]
        >
            <div class="page-header">
                <div>
                    <h1>"Lists"</h1>
                    <p class="page-subtitle">"Group your tasks into lists"</p>
                </div>
                <button type="button" class="btn-primary" on:click=move |_| form.open_create()>
                    "+ New List"
                </button>
            </div>

            <ListTable lists=lists loading=loading on_edit=on_edit on_delete=on_delete />
            <ListFormDialog form=form on_submit=on_submit />
        </AppLayout>
    }
}
