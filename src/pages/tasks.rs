use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::{AppLayout, Breadcrumb, PageInfo, Pagination};
use crate::core::browser::confirm;
use crate::core::hooks::{use_toast, FormHandle, PageSnapshot};
use crate::core::services::{ApiClient, ApiRoute, Resource};
use crate::features::tasks::{TaskFormDialog, TaskSearchBar, TaskTable};
use crate::models::{StatusFilter, Task, TaskDraft, TaskQuery, TasksPayload};

#[component]
pub fn TasksPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let page = PageSnapshot::<TasksPayload>::new(use_toast());
    let form = FormHandle::<Task, TaskDraft>::new();

    let params = use_query_map();
    let query = Memo::new(move |_| TaskQuery::from_params(|key| params.with(|p| p.get(key))));
    // The search box and status select both show this; every navigation
    // starts from it.
    let controls = RwSignal::new(query.get_untracked().without_page());

    // Re-fetch whenever the URL query changes.
    let loader = api.clone();
    Effect::new(move |_| {
        let query_string = query.get().to_query_string();
        let api = loader.clone();
        page.visit(
            async move {
                api.load(ApiRoute::Index(Resource::Tasks), Some(&query_string))
                    .await
            },
            |_| {},
        );
    });

    // The backend echoes the filters it applied; the controls follow them.
    Effect::new(move |_| {
        let applied = page.with(|p| p.map(|p| TaskQuery::from_filters(&p.filters)));
        if let Some(applied) = applied {
            controls.set(applied);
        }
    });

    Effect::new(move |_| {
        page.with(|p| {
            if let Some(tasks) = p.map(|p| &p.tasks) {
                if !tasks.range_matches_data() {
                    log::warn!(
                        "page {} reports rows {:?}..={:?} but carries {} tasks",
                        tasks.current_page,
                        tasks.from,
                        tasks.to,
                        tasks.data.len()
                    );
                }
            }
        })
    });

    let navigate = use_navigate();
    let go = move |next: TaskQuery| {
        log::debug!("navigating to {:?}", next);
        navigate(
            &next.href("/tasks"),
            NavigateOptions {
                scroll: false,
                ..Default::default()
            },
        );
    };

    let go_filter = go.clone();
    let on_filter = Callback::new(move |filter: StatusFilter| {
        let next = controls.with_untracked(|c| c.with_filter(filter));
        controls.set(next.clone());
        go_filter(next);
    });

    let go_search = go.clone();
    let on_search = Callback::new(move |_| go_search(controls.get_untracked().without_page()));

    let on_page = Callback::new(move |n: u32| go(controls.with_untracked(|c| c.with_page(n))));

    let submitter = api.clone();
    let on_submit = Callback::new(move |_| {
        form.submit(page, submitter.clone(), Resource::Tasks);
    });

    let on_edit = Callback::new(move |task: Task| form.open_edit(&task));

    let on_delete = Callback::new(move |task: Task| {
        if !confirm(&format!("Delete the task \"{}\"?", task.title)) {
            return;
        }
        let api = api.clone();
        log::info!("deleting task {}", task.id);
        page.visit(
            async move {
                api.submit::<_, ()>(ApiRoute::Destroy(Resource::Tasks, task.id), None)
                    .await
            },
            |_| {},
        );
    });

    let tasks = Signal::derive(move || page.with(|p| p.map(|p| p.tasks.data.clone()).unwrap_or_default()));
    let lists = Signal::derive(move || page.with(|p| p.map(|p| p.lists.clone()).unwrap_or_default()));
    let loading = Signal::derive(move || page.is_loading());
    let page_info = Signal::derive(move || {
        page.with(|p| {
            p.filter(|p| p.tasks.total > 0).map(|p| PageInfo {
                current: p.tasks.current_page,
                last: p.tasks.last_page,
                has_previous: p.tasks.has_previous(),
                has_next: p.tasks.has_next(),
                summary: p.tasks.range_label(),
            })
        })
    });

    view! {
        <AppLayout
            title="Tasks"
            breadcrumbs=vec![
                Breadcrumb::new("Dashboard", "/dashboard"),
                Breadcrumb::new("Tasks", "/tasks"),
            ]
        >
            <div class="page-header">
                <div>
                    <h1>"Tasks"</h1>
                    <p class="page-subtitle">"Manage your tasks and stay organized"</p>
                </div>
                <button type="button" class="btn-primary" on:click=move |_| form.open_create()>
                    "+ New Task"
                </button>
            </div>

            <TaskSearchBar controls=controls on_search=on_search on_filter=on_filter />
            <TaskTable tasks=tasks loading=loading on_edit=on_edit on_delete=on_delete />
            <Pagination info=page_info on_page=on_page />
            <TaskFormDialog form=form lists=lists on_submit=on_submit />
        </AppLayout>
    }
}
