//! # Storefront Services
//!
//! Product catalog, orders, user profiles and transactional email behind
//! one REST API.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits
//! - **application**: services, the shared paginated listing, outbound ports
//! - **infrastructure**: SeaORM repositories, in-memory repositories, Brevo mail client
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **server**: runtime bootstrap and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use interfaces::http::create_api_router;
