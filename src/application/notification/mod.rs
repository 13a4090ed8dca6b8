//! Email notification dispatch

pub mod service;

pub use service::EmailService;
