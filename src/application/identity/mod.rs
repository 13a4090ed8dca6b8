//! Identity module: user profile management
//!
//! Contains the `ProfileService` which orchestrates profile use-cases:
//! registration of a profile, lookups, updates and listing.

pub mod service;

pub use service::ProfileService;
