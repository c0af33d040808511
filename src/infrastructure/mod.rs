//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`loader`] - Reads and validates the users document at startup
//! - [`persistence`] - Repository implementations

pub mod loader;
pub mod persistence;
