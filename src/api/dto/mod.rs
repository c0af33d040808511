//! Data Transfer Objects for API requests and responses.

pub mod pagination;
pub mod status;
pub mod users;
