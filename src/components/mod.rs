pub mod app_layout;
pub mod modal;
pub mod pagination;
pub mod toast_host;

pub use app_layout::{AppLayout, Breadcrumb};
pub use modal::Modal;
pub use pagination::{PageInfo, Pagination};
pub use toast_host::ToastHost;
