pub mod dashboard;
pub mod lists;
pub mod tasks;

pub use dashboard::DashboardPage;
pub use lists::ListsPage;
pub use tasks::TasksPage;
