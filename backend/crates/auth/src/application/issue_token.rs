//! Issue Token Use Case
//!
//! Looks a user up in the directory and signs a bearer token carrying
//! the roles the user holds right now.

use std::sync::Arc;

use crate::application::token::{IssuedToken, TokenService};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Issue token use case
pub struct IssueTokenUseCase<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> IssueTokenUseCase<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, tokens: TokenService) -> Self {
        Self { user_repo, tokens }
    }

    /// Issue a token for the user with the given id
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<IssuedToken> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.issue_for(&user)
    }

    /// Issue a token for the user with the given user name
    pub async fn execute_by_user_name(&self, user_name: &str) -> AuthResult<IssuedToken> {
        let user = self
            .user_repo
            .find_by_user_name(user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.issue_for(&user)
    }

    fn issue_for(&self, user: &User) -> AuthResult<IssuedToken> {
        let issued = self.tokens.issue(user)?;

        tracing::info!(
            user_id = %user.user_id,
            roles = ?user.roles,
            expires_at = %issued.expires_at,
            "Bearer token issued"
        );

        Ok(issued)
    }
}
