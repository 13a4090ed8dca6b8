//! Profiles module: user profile CRUD for the identity service

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
