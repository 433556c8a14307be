pub mod task_form_dialog;
pub mod task_search_bar;
pub mod task_table;

pub use task_form_dialog::TaskFormDialog;
pub use task_search_bar::TaskSearchBar;
pub use task_table::TaskTable;
