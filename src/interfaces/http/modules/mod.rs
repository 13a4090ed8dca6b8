//! Feature modules, one per resource plus operational endpoints

pub mod health;
pub mod metrics;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod request_id;
