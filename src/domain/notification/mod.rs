//! Outbound email notifications

pub mod model;

pub use model::{DispatchResult, EmailIntent, ProviderEnvelope, Recipient, Sender};
