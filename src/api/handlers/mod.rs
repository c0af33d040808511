//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod status;
pub mod users;

pub use fallback::fallback_handler;
pub use status::status_handler;
pub use users::list_users_handler;
