pub mod list_form_dialog;
pub mod list_table;

pub use list_form_dialog::ListFormDialog;
pub use list_table::ListTable;
