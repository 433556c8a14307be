pub mod use_entity_form;
pub mod use_page;
pub mod use_toast;

#[cfg(test)]
pub(crate) mod test_support;

pub use use_entity_form::FormHandle;
pub use use_page::PageSnapshot;
pub use use_toast::{provide_toast, use_toast};
