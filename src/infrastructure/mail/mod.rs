//! Outbound mail adapters

mod brevo;

pub use brevo::BrevoClient;
