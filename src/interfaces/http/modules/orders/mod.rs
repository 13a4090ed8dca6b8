//! Orders module: order placement, status updates, per-user listings

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
