//! Products module: catalog CRUD, scoped listings, stock updates

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
