//! Demo Users
//!
//! Creates one user per role so the API can be exercised without an
//! external login flow. Existing users are left untouched.

use std::sync::Arc;

use auth::application::IssueTokenUseCase;
use auth::domain::{Role, RoleSet, User, UserRepository};
use auth::TokenService;

const DEMO_USERS: [(&str, Role); 3] = [
    ("writer", Role::Writer),
    ("subscriber", Role::Subscriber),
    ("editor", Role::Editor),
];

/// Create missing demo users; returns how many were created
pub async fn seed_demo_users<U>(users: &U) -> anyhow::Result<usize>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let mut created = 0;

    for (user_name, role) in DEMO_USERS {
        if users.exists_by_user_name(user_name).await? {
            continue;
        }

        let user = User::new(user_name, RoleSet::empty().with(role));
        users.create(&user).await?;
        created += 1;

        tracing::info!(user_id = %user.user_id, user_name, role = %role, "Seeded demo user");
    }

    Ok(created)
}

/// Log a fresh bearer token for every demo user (development only)
pub async fn log_demo_tokens<U>(users: Arc<U>, tokens: TokenService) -> anyhow::Result<()>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueTokenUseCase::new(users, tokens);

    for (user_name, _) in DEMO_USERS {
        let issued = use_case.execute_by_user_name(user_name).await?;
        tracing::info!(
            user_name,
            expires_at = %issued.expires_at,
            "Demo bearer token: {}",
            issued.token
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::infra::InMemoryUserRepository;
    use auth::JwtConfig;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let users = InMemoryUserRepository::new();

        assert_eq!(seed_demo_users(&users).await.unwrap(), 3);
        assert_eq!(seed_demo_users(&users).await.unwrap(), 0);

        let editor = users.find_by_user_name("editor").await.unwrap().unwrap();
        assert!(editor.has_role(Role::Editor));
        assert!(!editor.has_role(Role::Writer));
    }

    #[tokio::test]
    async fn test_demo_tokens_need_seeded_users() {
        let users = Arc::new(InMemoryUserRepository::new());
        let tokens = TokenService::new(JwtConfig::development()).unwrap();

        assert!(log_demo_tokens(users.clone(), tokens.clone()).await.is_err());

        seed_demo_users(users.as_ref()).await.unwrap();
        assert!(log_demo_tokens(users, tokens).await.is_ok());
    }
}
