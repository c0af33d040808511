//! # Users API
//!
//! A mock "list users" service whose core is a validated, deterministic
//! pagination contract.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the pagination contract, and repository traits
//! - **Application Layer** ([`application`]) - Services used by handlers and the admin CLI
//! - **Infrastructure Layer** ([`infrastructure`]) - Users file loader and in-memory repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `GET /api/users/?page=1&size=50` - One page of users with `total` and `pages`
//! - `GET /status` - Liveness check
//!
//! ## Quick Start
//!
//! ```bash
//! export USERS_FILE="users.json"   # Optional, this is the default
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::collection::Collection;
    pub use crate::domain::entities::User;
    pub use crate::domain::pagination::{Page, PageRequest, PaginationError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
