//! User entity served by the listing endpoint.

use url::Url;

use crate::domain::collection::Keyed;

/// A user record from the loaded data set.
///
/// Records are validated once by the loader and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Url,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, first_name: String, last_name: String, avatar: Url) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            avatar,
        }
    }

    /// Returns `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Keyed for User {
    fn key(&self) -> i64 {
        self.id
    }
}
