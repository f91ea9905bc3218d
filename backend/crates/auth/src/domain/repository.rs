//! Repository Traits
//!
//! Interfaces for the user directory. Implementations are in the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::UserId;
use crate::error::AuthResult;

/// User directory trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a user together with its role memberships
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user (with current roles) by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user (with current roles) by user name
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &str) -> AuthResult<bool>;
}
