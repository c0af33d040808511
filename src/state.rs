//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::collection::Collection;
use crate::domain::entities::User;
use crate::infrastructure::persistence::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryUserRepository>>,
}

impl AppState {
    /// Wires the service stack over a loaded user snapshot.
    pub fn new(users: Collection<User>) -> Self {
        let repository = Arc::new(InMemoryUserRepository::new(users));

        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
