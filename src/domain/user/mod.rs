//! User profile aggregate
//!
//! Contains the UserProfile entity, DTOs, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_update;

pub use model::UserProfile;

pub use dto_create::CreateProfileDto;
pub use dto_update::UpdateProfileDto;

pub use repository::UserProfileRepository;
