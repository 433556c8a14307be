pub mod filters;
pub mod flash;
pub mod list;
pub mod pagination;
pub mod payload;
pub mod stats;
pub mod task;

pub use filters::{StatusFilter, TaskQuery};
pub use flash::{Flash, Severity};
pub use list::{ListDraft, TaskList};
pub use pagination::{PageLink, Paginated};
pub use payload::{DashboardPayload, ListsPayload, PageObject, PageProps, TaskFilters, TasksPayload};
pub use stats::{DashboardStats, StatCard, StatIcon};
pub use task::{ListSummary, Task, TaskDraft};
