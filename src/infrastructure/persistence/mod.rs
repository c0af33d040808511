//! Repository implementations.
//!
//! - [`InMemoryUserRepository`] - Serves the user snapshot loaded at startup

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
