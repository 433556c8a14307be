pub mod api;
pub mod error;
pub mod routes;

pub use api::ApiClient;
pub use error::ApiError;
pub use routes::{ApiRoute, Resource};
