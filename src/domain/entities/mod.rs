//! Core domain entities.
//!
//! Entities are plain data structures; validation happens once in the loader
//! (see [`crate::infrastructure::loader`]) before they are constructed.
//!
//! - [`User`] - A user record exposed by `GET /api/users/`

pub mod user;

pub use user::User;
