//! Actor
//!
//! The authenticated caller of a request, as asserted by a verified bearer token.

use crate::domain::entity::user::User;
use crate::domain::value_object::{Role, RoleSet, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub user_name: String,
    pub roles: RoleSet,
}

impl Actor {
    pub fn new(user_id: UserId, user_name: impl Into<String>, roles: RoleSet) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            roles,
        }
    }

    #[inline]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }

    /// Ownership check against a resource author
    #[inline]
    pub fn is(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            user_name: user.user_name.clone(),
            roles: user.roles,
        }
    }
}
