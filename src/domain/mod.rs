//! Domain layer: entities, the pagination contract, and repository traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`collection`] - Immutable id-ordered snapshot loaded at startup
//! - [`pagination`] - Request validation and page slicing
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on how the data set is loaded.

pub mod collection;
pub mod entities;
pub mod pagination;
pub mod repositories;
