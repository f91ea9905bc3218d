//! Value Objects

pub mod role;
pub mod user_id;

pub use role::{Role, RoleSet, UnknownRole};
pub use user_id::UserId;
