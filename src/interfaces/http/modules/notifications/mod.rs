//! Notifications module: transactional email

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
