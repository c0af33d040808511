//! Page-number pagination over an immutable [`Collection`].
//!
//! A request is validated into a [`PageRequest`] before any data is touched;
//! slicing is then a pure function of the request and the snapshot.
//!
//! # Contract
//!
//! - `total` is the collection length and never depends on the request
//! - `pages` is `ceil(total / size)`, or `1` when the collection is empty
//! - a page past the end yields no items and echoes `page` and `size` back
//!
//! # Example
//!
//! ```
//! use users_api::domain::pagination::{PageRequest, paginate};
//!
//! let ids: Vec<i64> = (1..=7).collect();
//! let page = paginate(&ids, PageRequest::new(3, 3).unwrap());
//!
//! assert_eq!(page.items, vec![7]);
//! assert_eq!(page.total, 7);
//! assert_eq!(page.pages, 3);
//! ```

use crate::domain::collection::{Collection, Keyed};

/// Page number used when the client omits `page`.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the client omits `size`.
pub const DEFAULT_SIZE: u64 = 50;

/// Largest accepted page size.
pub const MAX_SIZE: u64 = 100;

/// Rejected pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The named query parameter is not an integer or is out of range.
    #[error("invalid value for `{0}`")]
    InvalidParameter(&'static str),
}

impl PaginationError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter(name) => name,
        }
    }

    /// Human-readable constraint the parameter failed.
    pub fn requirement(&self) -> &'static str {
        match self.parameter() {
            "page" => "page must be an integer greater than or equal to 1",
            "size" => "size must be an integer between 1 and 100",
            _ => "parameter must be a valid integer",
        }
    }
}

/// Validated `(page, size)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    /// Validates numeric input. `page` is checked before `size`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter("page")` if `page < 1`
    /// - `InvalidParameter("size")` if `size` is outside `1..=100`
    pub fn new(page: i64, size: i64) -> Result<Self, PaginationError> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(PaginationError::InvalidParameter("page"))?;

        let size = u64::try_from(size)
            .ok()
            .filter(|s| (1..=MAX_SIZE).contains(s))
            .ok_or(PaginationError::InvalidParameter("size"))?;

        Ok(Self { page, size })
    }

    /// Validates raw query-string values, applying defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Same as [`PageRequest::new`]; a value that does not parse as an integer
    /// fails its own parameter's rule.
    pub fn parse(page: Option<&str>, size: Option<&str>) -> Result<Self, PaginationError> {
        let page = parse_integer(page, DEFAULT_PAGE, "page")?;
        let size = parse_integer(size, DEFAULT_SIZE, "size")?;
        Self::new(page, size)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Index of the first item on this page. Saturates instead of overflowing.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }
}

fn parse_integer(
    raw: Option<&str>,
    default: u64,
    name: &'static str,
) -> Result<i64, PaginationError> {
    match raw {
        None => Ok(default as i64),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| PaginationError::InvalidParameter(name)),
    }
}

/// One page of results plus derived metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub pages: u64,
}

impl<T> Page<T> {
    /// Converts every item, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
            pages: self.pages,
        }
    }
}

/// Number of pages needed for `total` items. An empty collection still has one page.
pub fn page_count(total: u64, size: u64) -> u64 {
    if total == 0 {
        1
    } else {
        total.div_ceil(size)
    }
}

/// Slices `items` according to `request`.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let start = request.offset();

    let slice = if start < total {
        let end = start.saturating_add(request.size()).min(total);
        items[start as usize..end as usize].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: slice,
        total,
        page: request.page(),
        size: request.size(),
        pages: page_count(total, request.size()),
    }
}

/// Paginates a fixed [`Collection`] snapshot.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    collection: Collection<T>,
}

impl<T: Keyed + Clone> Paginator<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self { collection }
    }

    pub fn paginate(&self, request: PageRequest) -> Page<T> {
        paginate(self.collection.as_slice(), request)
    }

    pub fn total(&self) -> u64 {
        self.collection.len() as u64
    }
}
