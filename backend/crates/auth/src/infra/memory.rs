//! In-Memory Repository
//!
//! Process-local user directory for tests and database-less runs.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.user_name == user_name)
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &str) -> AuthResult<bool> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|u| u.user_name == user_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{Role, RoleSet};

    #[tokio::test]
    async fn test_user_name_is_unique() {
        let repo = InMemoryUserRepository::new();
        repo.create(&User::new("dup", RoleSet::empty()))
            .await
            .unwrap();

        let second = repo
            .create(&User::new("dup", RoleSet::empty().with(Role::Editor)))
            .await;
        assert!(matches!(second, Err(AuthError::UserNameTaken)));
        assert!(repo.exists_by_user_name("dup").await.unwrap());
        assert!(!repo.exists_by_user_name("other").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_returns_current_roles() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("ed", RoleSet::empty().with(Role::Editor));
        repo.create(&user).await.unwrap();

        let found = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
        assert!(found.has_role(Role::Editor));
        assert!(repo.find_by_user_name("ed").await.unwrap().is_some());
        assert!(repo.find_by_id(&UserId::new("x")).await.unwrap().is_none());
    }
}
