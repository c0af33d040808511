//! Immutable, id-ordered snapshot of records available for pagination.

use std::sync::Arc;

/// A record with a unique, totally ordered identifier.
pub trait Keyed {
    fn key(&self) -> i64;
}

/// Errors raised while assembling a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("duplicate id {0} in collection")]
    DuplicateId(i64),
}

/// Read-only sequence of records sorted by ascending key.
///
/// Built once at startup and shared by reference count afterwards; cloning a
/// collection never copies the records.
#[derive(Debug)]
pub struct Collection<T> {
    items: Arc<[T]>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Keyed> Collection<T> {
    /// Sorts `items` by key and freezes them.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateId`] if two records share a key.
    pub fn new(mut items: Vec<T>) -> Result<Self, CollectionError> {
        items.sort_by_key(|item| item.key());

        if let Some(pair) = items.windows(2).find(|w| w[0].key() == w[1].key()) {
            return Err(CollectionError::DuplicateId(pair[0].key()));
        }

        Ok(Self {
            items: items.into(),
        })
    }

    /// Looks up a record by key.
    pub fn get(&self, key: i64) -> Option<&T> {
        self.items
            .binary_search_by_key(&key, |item| item.key())
            .ok()
            .map(|idx| &self.items[idx])
    }
}

impl<T> Collection<T> {
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
