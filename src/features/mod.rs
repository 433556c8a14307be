pub mod dashboard;
pub mod lists;
pub mod tasks;
