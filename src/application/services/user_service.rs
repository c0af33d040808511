//! User listing service.

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for browsing the user data set page by page.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the requested page of users.
    ///
    /// Pages past the end are returned empty with `total` and `pages` intact,
    /// so callers can tell "no more data" apart from a rejected request.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn list_users(&self, request: PageRequest) -> Result<Page<User>, AppError> {
        let page = self.repository.list_page(request).await?;

        tracing::debug!(
            page = page.page,
            size = page.size,
            returned = page.items.len(),
            total = page.total,
            "Listed users"
        );

        Ok(page)
    }

    /// Counts all users.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn total_users(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }
}
