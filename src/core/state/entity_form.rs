#[cfg(test)]
#[path = "entity_form_test.rs"]
mod entity_form_test;

use crate::core::services::{ApiRoute, Resource};
use crate::models::{Task, TaskList};

/// Backend-assigned identity of an entity shown in a form.
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for TaskList {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

/// What a submit should send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<D> {
    Create(D),
    Update { id: u64, draft: D },
}

impl<D> Submission<D> {
    pub fn route(&self, resource: Resource) -> ApiRoute {
        match self {
            Submission::Create(_) => ApiRoute::Store(resource),
            Submission::Update { id, .. } => ApiRoute::Update(resource, *id),
        }
    }

    pub fn draft(&self) -> &D {
        match self {
            Submission::Create(draft) | Submission::Update { draft, .. } => draft,
        }
    }
}

/// Create/edit dialog for one entity type: visibility, edit target, draft
/// fields and the in-flight flag.
///
/// The draft lives only until a successful submit or until the dialog is
/// closed. Nothing here touches the displayed collection; that changes only
/// when the backend answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityForm<E, D> {
    open: bool,
    editing: Option<E>,
    draft: D,
    processing: bool,
    session: u64,
}

impl<E, D: Default> Default for EntityForm<E, D> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            draft: D::default(),
            processing: false,
            session: 0,
        }
    }
}

impl<E, D> EntityForm<E, D>
where
    E: Identified + Clone,
    D: Default + Clone + for<'a> From<&'a E>,
{
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn editing(&self) -> Option<&E> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing().is_some()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Bumped by every close; a submit settles only the session it began in.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    /// Empty fields, no edit target.
    pub fn open_create(&mut self) {
        self.editing = None;
        self.draft = D::default();
        self.open = true;
    }

    /// Fields pre-populated from `entity`.
    pub fn open_edit(&mut self, entity: &E) {
        self.draft = D::from(entity);
        self.editing = Some(entity.clone());
        self.open = true;
    }

    /// Dismiss without submitting; the draft and edit target are discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
        self.draft = D::default();
        self.processing = false;
        self.session += 1;
    }

    /// Mark the form in flight. `None` while a previous submit is pending.
    pub fn begin_submit(&mut self) -> Option<Submission<D>> {
        if self.processing {
            return None;
        }
        self.processing = true;
        let draft = self.draft.clone();
        Some(match &self.editing {
            Some(entity) => Submission::Update { id: entity.id(), draft },
            None => Submission::Create(draft),
        })
    }

    /// Settle the submit begun in `session`. Success closes and resets;
    /// failure keeps the dialog and draft so the user can correct and retry.
    /// A submit whose dialog was closed meanwhile settles nothing.
    pub fn finish(&mut self, session: u64, success: bool) {
        if session != self.session {
            return;
        }
        self.processing = false;
        if success {
            self.close();
        }
    }
}
