#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Denormalized summary of the list that owns a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSummary {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub due_date: Option<String>,
    pub list_id: u64,
    #[serde(default)]
    pub list: Option<ListSummary>,
}

impl Task {
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description",
        }
    }

    pub fn list_title(&self) -> &str {
        self.list.as_ref().map_or("Unknown list", |l| l.title.as_str())
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    pub fn due(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_date)
    }

    pub fn due_date_label(&self) -> String {
        match (self.due(), self.due_date.as_deref()) {
            (Some(date), _) => date.format("%b %d, %Y").to_string(),
            (None, Some(raw)) if !raw.trim().is_empty() => raw.to_string(),
            _ => "No due date".to_string(),
        }
    }

    /// Pending and due strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.due().is_some_and(|due| due < today)
    }
}

/// Leading `YYYY-MM-DD` of a date or timestamp string.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Value suitable for an `<input type="date">`.
pub fn form_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Uncommitted task form fields.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    #[serde(serialize_with = "empty_as_null")]
    pub description: String,
    #[serde(serialize_with = "empty_as_null")]
    pub due_date: String,
    pub list_id: Option<u64>,
    pub is_completed: bool,
}

impl TaskDraft {
    /// The list select works on strings; anything unparsable clears the choice.
    pub fn set_list_id(&mut self, value: &str) {
        self.list_id = value.trim().parse().ok();
    }

    pub fn list_id_value(&self) -> String {
        self.list_id.map(|id| id.to_string()).unwrap_or_default()
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date.as_deref().map(form_date).unwrap_or_default(),
            list_id: Some(task.list_id),
            is_completed: task.is_completed,
        }
    }
}

pub(crate) fn empty_as_null<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.trim().is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(value)
    }
}
