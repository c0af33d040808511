//! Loads the users document into an immutable [`Collection`].
//!
//! The document is a JSON array of objects:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "email": "george.bluth@reqres.in",
//!     "first_name": "George",
//!     "last_name": "Bluth",
//!     "avatar": "https://reqres.in/img/faces/1-image.jpg"
//!   }
//! ]
//! ```
//!
//! Every record must pass schema validation. A single bad record fails the
//! whole load; the service must not start serving a partial data set.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use url::Url;
use validator::{Validate, ValidationError};

use crate::domain::collection::{Collection, CollectionError};
use crate::domain::entities::User;

/// Errors that can occur while loading the users document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read users file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid users document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("User #{index} (id {id}) failed validation: {reason}")]
    InvalidRecord { index: usize, id: i64, reason: String },

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Wire shape of a single user record.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
struct UserRecord {
    id: i64,

    #[validate(email(message = "Invalid email address"))]
    email: String,

    #[validate(length(min = 1, message = "Must not be empty"))]
    first_name: String,

    #[validate(length(min = 1, message = "Must not be empty"))]
    last_name: String,

    #[serde_as(as = "DisplayFromStr")]
    #[validate(custom(function = "validate_http_url"))]
    avatar: Url,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User::new(
            record.id,
            record.email,
            record.first_name,
            record.last_name,
            record.avatar,
        )
    }
}

fn validate_http_url(url: &Url) -> Result<(), ValidationError> {
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        _ => Err(ValidationError::new("http_url").with_message("Avatar must be an HTTP(S) URL".into())),
    }
}

/// Parses and validates a users document.
///
/// # Errors
///
/// - [`LoadError::Parse`] if the JSON is malformed or a field has the wrong type
/// - [`LoadError::InvalidRecord`] if a record fails schema validation
/// - [`LoadError::Collection`] if two records share an id
pub fn parse_users(document: &str) -> Result<Collection<User>, LoadError> {
    let records: Vec<UserRecord> = serde_json::from_str(document)?;

    let users = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record.validate() {
            Ok(()) => Ok(User::from(record)),
            Err(e) => Err(LoadError::InvalidRecord {
                index,
                id: record.id,
                reason: e.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(Collection::new(users)?)
}

/// Reads and validates the users document at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise the same
/// errors as [`parse_users`].
pub async fn load_users(path: impl AsRef<Path>) -> Result<Collection<User>, LoadError> {
    let path = path.as_ref();

    let document = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let users = parse_users(&document)?;
    tracing::info!(count = users.len(), path = %path.display(), "Users loaded");

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, email: &str, avatar: &str) -> String {
        format!(
            r#"{{"id": {id}, "email": "{email}", "first_name": "Janet", "last_name": "Weaver", "avatar": "{avatar}"}}"#
        )
    }

    fn document(records: &[String]) -> String {
        format!("[{}]", records.join(","))
    }

    #[test]
    fn test_parse_valid_document() {
        let doc = document(&[
            record(2, "janet.weaver@reqres.in", "https://reqres.in/img/faces/2-image.jpg"),
            record(1, "george.bluth@reqres.in", "https://reqres.in/img/faces/1-image.jpg"),
        ]);

        let users = parse_users(&doc).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users.as_slice()[0].id, 1);
        assert_eq!(users.as_slice()[1].first_name, "Janet");
    }

    #[test]
    fn test_parse_empty_array() {
        let users = parse_users("[]").unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let doc = document(&[
            record(1, "george.bluth@reqres.in", "https://reqres.in/1.jpg"),
            record(2, "not-an-email", "https://reqres.in/2.jpg"),
        ]);

        match parse_users(&doc).unwrap_err() {
            LoadError::InvalidRecord { index, id, reason } => {
                assert_eq!(index, 1);
                assert_eq!(id, 2);
                assert!(reason.contains("email"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_avatar_is_rejected() {
        let doc = document(&[record(1, "a@example.com", "not a url")]);
        assert!(matches!(parse_users(&doc), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_non_http_avatar_is_rejected() {
        let doc = document(&[record(1, "a@example.com", "ftp://example.com/a.jpg")]);
        assert!(matches!(
            parse_users(&doc),
            Err(LoadError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_non_integer_id_is_rejected() {
        let doc = r#"[{"id": "one", "email": "a@example.com", "first_name": "A", "last_name": "B", "avatar": "https://example.com/a.jpg"}]"#;
        assert!(matches!(parse_users(doc), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let doc = r#"[{"id": 1, "email": "a@example.com", "first_name": "A", "avatar": "https://example.com/a.jpg"}]"#;
        assert!(matches!(parse_users(doc), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let doc = r#"[{"id": 1, "email": "a@example.com", "first_name": "", "last_name": "B", "avatar": "https://example.com/a.jpg"}]"#;
        assert!(matches!(
            parse_users(doc),
            Err(LoadError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let doc = document(&[
            record(3, "a@example.com", "https://example.com/a.jpg"),
            record(3, "b@example.com", "https://example.com/b.jpg"),
        ]);

        assert!(matches!(
            parse_users(&doc),
            Err(LoadError::Collection(CollectionError::DuplicateId(3)))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_users("/nonexistent/users.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/users.json"));
    }
}
