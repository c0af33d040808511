//! In-memory implementation of the user repository.

use async_trait::async_trait;

use crate::domain::collection::Collection;
use crate::domain::entities::User;
use crate::domain::pagination::{Page, PageRequest, Paginator};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Repository over the immutable user snapshot loaded at startup.
///
/// Holds no locks: the snapshot is never mutated, so concurrent reads are safe.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    paginator: Paginator<User>,
}

impl InMemoryUserRepository {
    /// Creates a repository over `users`.
    pub fn new(users: Collection<User>) -> Self {
        Self {
            paginator: Paginator::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_page(&self, request: PageRequest) -> Result<Page<User>, AppError> {
        Ok(self.paginator.paginate(request))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.paginator.total())
    }
}
