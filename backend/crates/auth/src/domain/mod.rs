//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the
//! identity-verification seam.

pub mod entity;
pub mod repository;
pub mod value_object;
pub mod verifier;

// Re-exports
pub use entity::{Actor, User};
pub use repository::UserRepository;
pub use value_object::{Role, RoleSet, UserId};
pub use verifier::IdentityVerifier;
