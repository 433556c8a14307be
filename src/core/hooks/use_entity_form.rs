use leptos::prelude::*;
use serde::Serialize;

use super::use_page::PageSnapshot;
use crate::core::services::{ApiClient, Resource};
use crate::core::state::{EntityForm, Identified};
use crate::models::PageProps;

/// Reactive wrapper around [`EntityForm`] for one dialog.
pub struct FormHandle<E: Send + Sync + 'static, D: Send + Sync + 'static> {
    state: RwSignal<EntityForm<E, D>>,
}

impl<E: Send + Sync + 'static, D: Send + Sync + 'static> Clone for FormHandle<E, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static, D: Send + Sync + 'static> Copy for FormHandle<E, D> {}

impl<E, D> FormHandle<E, D>
where
    E: Identified + Clone + Send + Sync + 'static,
    D: Default + Clone + Serialize + for<'a> From<&'a E> + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(EntityForm::default()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|f| f.is_open())
    }

    pub fn is_processing(&self) -> bool {
        self.state.with(|f| f.is_processing())
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|f| f.is_editing())
    }

    /// Read one draft field.
    pub fn field<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        self.state.with(|form| f(form.draft()))
    }

    pub fn set(&self, f: impl FnOnce(&mut D)) {
        self.state.update(|form| form.update_draft(f));
    }

    pub fn open_create(&self) {
        self.state.update(|f| f.open_create());
    }

    pub fn open_edit(&self, entity: &E) {
        self.state.update(|f| f.open_edit(entity));
    }

    pub fn close(&self) {
        self.state.update(|f| f.close());
    }

    /// Send the draft to the store or update route of `resource`. The dialog
    /// closes only after the backend accepted it; the page then shows the
    /// snapshot the backend returned.
    pub fn submit<P>(&self, page: PageSnapshot<P>, api: ApiClient, resource: Resource)
    where
        P: PageProps + Clone + serde::de::DeserializeOwned + Send + Sync + 'static,
    {
        let begun = self
            .state
            .try_update(|f| f.begin_submit().map(|s| (f.session(), s)))
            .flatten();
        let Some((session, submission)) = begun else {
            log::debug!("submit ignored; a request is already in flight");
            return;
        };
        let route = submission.route(resource);
        let state = self.state;
        page.visit(
            async move { api.submit(route, Some(submission.draft())).await },
            move |success| state.update(|f| f.finish(session, success)),
        );
    }
}

impl<E, D> Default for FormHandle<E, D>
where
    E: Identified + Clone + Send + Sync + 'static,
    D: Default + Clone + Serialize + for<'a> From<&'a E> + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
