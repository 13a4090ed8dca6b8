//! Infrastructure layer - external concerns

pub mod database;
pub mod mail;
pub mod storage;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use mail::BrevoClient;
pub use storage::InMemoryRepositoryProvider;
