//! Database entities module

pub mod order;
pub mod product;
pub mod user_profile;

pub use order::Entity as Order;
pub use product::Entity as Product;
pub use user_profile::Entity as UserProfile;
