//! Pagination query parameters.

use serde::Deserialize;

use crate::domain::pagination::{PageRequest, PaginationError};

/// Raw `page` / `size` query parameters.
///
/// Values are kept as strings so that a non-integer input is reported as a
/// rejected parameter by [`PageRequest::parse`] rather than as a generic
/// query deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub size: Option<String>,
}

impl PageParams {
    /// Validates the parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `size`: 50
    ///
    /// # Validation
    ///
    /// - Page must be an integer >= 1
    /// - Size must be an integer between 1 and 100
    pub fn to_request(&self) -> Result<PageRequest, PaginationError> {
        PageRequest::parse(self.page.as_deref(), self.size.as_deref())
    }
}
