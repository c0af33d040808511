//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the user data set.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - snapshot loaded at startup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns one page of users ordered by ascending id.
    ///
    /// The request is already validated, so a page past the end is an empty
    /// page rather than an error.
    async fn list_page(&self, request: PageRequest) -> Result<Page<User>, AppError>;

    /// Counts all users.
    async fn count(&self) -> Result<u64, AppError>;
}
