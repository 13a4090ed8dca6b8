//! Application ports (hexagonal architecture boundaries)
//!
//! Outbound ports are the traits use cases call to reach third-party
//! systems. Infrastructure adapters implement them.

pub mod outbound;

pub use outbound::MailProvider;
