//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
