//! Application layer: use-case orchestration over the domain

pub mod identity;
pub mod listing;
pub mod notification;
pub mod ports;
pub mod services;

pub use identity::ProfileService;
pub use listing::list_page;
pub use notification::EmailService;
pub use ports::MailProvider;
pub use services::{OrderService, ProductService};
