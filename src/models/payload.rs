#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Deserializer, Serialize};

use super::{DashboardStats, Flash, ListSummary, Paginated, Task, TaskList};

/// Envelope the backend wraps every page response in.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageObject<P> {
    pub component: String,
    pub props: P,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Props of a page that may carry a flash message.
pub trait PageProps {
    fn flash(&self) -> Option<&Flash>;
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ListsPayload {
    #[serde(default)]
    pub lists: Vec<TaskList>,
    #[serde(default)]
    pub flash: Option<Flash>,
}

/// Filters as the backend echoes them back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskFilters {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TasksPayload {
    #[serde(default)]
    pub tasks: Paginated<Task>,
    #[serde(default)]
    pub lists: Vec<ListSummary>,
    #[serde(default, deserialize_with = "object_or_empty_array")]
    pub filters: TaskFilters,
    #[serde(default)]
    pub flash: Option<Flash>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardPayload {
    #[serde(default, deserialize_with = "object_or_empty_array")]
    pub stats: DashboardStats,
    #[serde(default)]
    pub flash: Option<Flash>,
}

impl PageProps for ListsPayload {
    fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }
}

impl PageProps for TasksPayload {
    fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }
}

impl PageProps for DashboardPayload {
    fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }
}

/// PHP serializes an empty associative array as `[]`; `null` is treated the same.
fn object_or_empty_array<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ObjectOrArray<T> {
        Object(T),
        Array(Vec<serde_json::Value>),
        Null(()),
    }

    Ok(match ObjectOrArray::<T>::deserialize(deserializer)? {
        ObjectOrArray::Object(value) => value,
        ObjectOrArray::Array(_) | ObjectOrArray::Null(()) => T::default(),
    })
}
