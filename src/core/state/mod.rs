//! Pure page-state machines. The hooks wrap these in signals; keeping them
//! free of Leptos lets them be tested natively.

pub mod entity_form;
pub mod request_tracker;
pub mod toast;

pub use entity_form::{EntityForm, Identified};
pub use request_tracker::RequestTracker;
pub use toast::{Toast, ToastState, TOAST_DURATION_MS};
