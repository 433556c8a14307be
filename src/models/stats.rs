#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::{Deserialize, Serialize};

/// Backend-computed counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_lists: u64,
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub completed_tasks: u64,
    #[serde(default)]
    pub pending_tasks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Lists,
    Tasks,
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    pub caption: &'static str,
    pub icon: StatIcon,
}

impl DashboardStats {
    /// Cards in display order. Values are copied verbatim.
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total Lists",
                value: self.total_lists,
                caption: "Your task lists",
                icon: StatIcon::Lists,
            },
            StatCard {
                title: "Total Tasks",
                value: self.total_tasks,
                caption: "All your tasks",
                icon: StatIcon::Tasks,
            },
            StatCard {
                title: "Pending Tasks",
                value: self.pending_tasks,
                caption: "Tasks to complete",
                icon: StatIcon::Pending,
            },
            StatCard {
                title: "Completed Tasks",
                value: self.completed_tasks,
                caption: "Tasks done",
                icon: StatIcon::Completed,
            },
        ]
    }
}
