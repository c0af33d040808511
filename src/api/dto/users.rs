//! DTOs for the user listing endpoint.

use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};
use url::Url;

use crate::domain::entities::User;
use crate::domain::pagination::Page;

/// A user as rendered in API responses.
#[serde_as]
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde_as(as = "DisplayFromStr")]
    pub avatar: Url,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar: user.avatar,
        }
    }
}

/// Paginated list of users.
///
/// ```json
/// { "items": [...], "total": 12, "page": 1, "size": 50, "pages": 1 }
/// ```
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<UserItem>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub pages: u64,
}

impl From<Page<User>> for UserListResponse {
    fn from(page: Page<User>) -> Self {
        let page = page.map(UserItem::from);
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            size: page.size,
            pages: page.pages,
        }
    }
}
