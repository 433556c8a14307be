#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use serde::{Deserialize, Serialize};

use super::task::empty_as_null;

/// A named container of tasks, as the backend last reported it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskList {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tasks_count: Option<u64>,
}

impl TaskList {
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description",
        }
    }

    pub fn tasks_count_label(&self) -> String {
        match self.tasks_count.unwrap_or(0) {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    }
}

/// Uncommitted list form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListDraft {
    pub title: String,
    #[serde(serialize_with = "empty_as_null")]
    pub description: String,
}

impl From<&TaskList> for ListDraft {
    fn from(list: &TaskList) -> Self {
        Self {
            title: list.title.clone(),
            description: list.description.clone().unwrap_or_default(),
        }
    }
}
