//! Entities

pub mod actor;
pub mod user;

pub use actor::Actor;
pub use user::User;
