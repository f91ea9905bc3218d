//! PostgreSQL Repository Implementations

use auth::domain::UserId;
use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, CommentId};
use sqlx::PgPool;

use crate::domain::entity::{Article, ArticleEdit, Author, Comment, NewArticle, NewComment};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::error::{CmsError, CmsResult};

/// Name of the comments → articles foreign key in the migrations
const COMMENT_ARTICLE_FK: &str = "comments_article_fk";

/// PostgreSQL-backed content store
#[derive(Clone)]
pub struct PgCmsRepository {
    pool: PgPool,
}

impl PgCmsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Article Repository Implementation
// ============================================================================

impl ArticleRepository for PgCmsRepository {
    async fn list_articles(&self) -> CmsResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT a.article_id, a.title, a.content, a.author_id,
                   u.user_name AS author_name, a.created_at
            FROM articles a
            JOIN users u ON u.user_id = a.author_id
            ORDER BY a.article_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ArticleRow::into_article).collect())
    }

    async fn find_article(&self, id: ArticleId) -> CmsResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT a.article_id, a.title, a.content, a.author_id,
                   u.user_name AS author_name, a.created_at
            FROM articles a
            JOIN users u ON u.user_id = a.author_id
            WHERE a.article_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleRow::into_article))
    }

    async fn article_exists(&self, id: ArticleId) -> CmsResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)",
        )
        .bind(id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_article(&self, article: &NewArticle) -> CmsResult<Article> {
        let (article_id, created_at) = sqlx::query_as::<_, (i64, DateTime<Utc>)>(
            r#"
            INSERT INTO articles (title, content, author_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING article_id, created_at
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.author.id.as_str())
        .bind(article.created_at)
        .fetch_one(&self.pool)
        .await?;

        let mut created = article.clone().into_article(ArticleId::from_i64(article_id));
        created.created_at = created_at;
        Ok(created)
    }

    async fn update_article(
        &self,
        id: ArticleId,
        edit: &ArticleEdit,
    ) -> CmsResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            WITH updated AS (
                UPDATE articles SET title = $2, content = $3
                WHERE article_id = $1
                RETURNING article_id, title, content, author_id, created_at
            )
            SELECT a.article_id, a.title, a.content, a.author_id,
                   u.user_name AS author_name, a.created_at
            FROM updated a
            JOIN users u ON u.user_id = a.author_id
            "#,
        )
        .bind(id.value())
        .bind(&edit.title)
        .bind(&edit.content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleRow::into_article))
    }

    async fn delete_article(&self, id: ArticleId) -> CmsResult<bool> {
        // comments go with it (ON DELETE CASCADE)
        let deleted = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgCmsRepository {
    async fn list_comments(&self, article_id: Option<ArticleId>) -> CmsResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.comment_id, c.content, c.article_id, c.author_id,
                   u.user_name AS author_name
            FROM comments c
            JOIN users u ON u.user_id = c.author_id
            WHERE $1::BIGINT IS NULL OR c.article_id = $1
            ORDER BY c.comment_id
            "#,
        )
        .bind(article_id.map(|id| id.value()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn find_comment(&self, id: CommentId) -> CmsResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.comment_id, c.content, c.article_id, c.author_id,
                   u.user_name AS author_name
            FROM comments c
            JOIN users u ON u.user_id = c.author_id
            WHERE c.comment_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn create_comment(&self, comment: &NewComment) -> CmsResult<Comment> {
        let comment_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO comments (content, article_id, author_id)
            VALUES ($1, $2, $3)
            RETURNING comment_id
            "#,
        )
        .bind(&comment.content)
        .bind(comment.article_id.value())
        .bind(comment.author.id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            // article deleted between the existence check and the insert
            Some(db) if db.constraint() == Some(COMMENT_ARTICLE_FK) => {
                CmsError::ArticleNotFound(comment.article_id)
            }
            _ => CmsError::Database(e),
        })?;

        Ok(comment.clone().into_comment(CommentId::from_i64(comment_id)))
    }

    async fn update_comment(&self, id: CommentId, content: &str) -> CmsResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH updated AS (
                UPDATE comments SET content = $2
                WHERE comment_id = $1
                RETURNING comment_id, content, article_id, author_id
            )
            SELECT c.comment_id, c.content, c.article_id, c.author_id,
                   u.user_name AS author_name
            FROM updated c
            JOIN users u ON u.user_id = c.author_id
            "#,
        )
        .bind(id.value())
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn delete_comment(&self, id: CommentId) -> CmsResult<bool> {
        let deleted = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    content: String,
    author_id: String,
    author_name: String,
    created_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self) -> Article {
        Article {
            id: ArticleId::from_i64(self.article_id),
            title: self.title,
            content: self.content,
            author: Author::new(UserId::new(self.author_id), self.author_name),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: i64,
    content: String,
    article_id: i64,
    author_id: String,
    author_name: String,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: CommentId::from_i64(self.comment_id),
            content: self.content,
            article_id: ArticleId::from_i64(self.article_id),
            author: Author::new(UserId::new(self.author_id), self.author_name),
        }
    }
}
