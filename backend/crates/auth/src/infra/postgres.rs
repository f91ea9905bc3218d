//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{RoleSet, UserId};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user directory
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_USER: &str = r#"
    SELECT
        u.user_id,
        u.user_name,
        u.created_at,
        COALESCE(
            array_agg(r.role ORDER BY r.role) FILTER (WHERE r.role IS NOT NULL),
            '{}'
        ) AS roles
    FROM users u
    LEFT JOIN user_roles r ON r.user_id = u.user_id
"#;

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (user_id, user_name, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(&user.user_name)
        .bind(user.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => AuthError::UserNameTaken,
            _ => AuthError::Database(e),
        })?;

        for role in user.roles.iter() {
            sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
                .bind(user.user_id.as_str())
                .bind(role.code())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let query = format!("{SELECT_USER} WHERE u.user_id = $1 GROUP BY u.user_id");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        let query = format!("{SELECT_USER} WHERE u.user_name = $1 GROUP BY u.user_id");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(user_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_user_name(&self, user_name: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name = $1)",
        )
        .bind(user_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: String,
    user_name: String,
    created_at: DateTime<Utc>,
    roles: Vec<String>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::new(self.user_id),
            user_name: self.user_name,
            roles: RoleSet::from_codes(&self.roles),
            created_at: self.created_at,
        }
    }
}
