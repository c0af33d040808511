//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Paginated user listing
pub mod services;
