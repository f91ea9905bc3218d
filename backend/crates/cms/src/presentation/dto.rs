//! Data Transfer Objects
//!
//! Request and response types for the content API (camelCase JSON).

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, CommentId};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entity::{Article, ArticleEdit, Author, Comment};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: String,
    pub name: String,
}

impl From<Author> for AuthorView {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into_string(),
            name: author.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub author: AuthorView,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleView {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author: article.author.into(),
            created_at: article.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub content: String,
    pub article_id: ArticleId,
    pub author: AuthorView,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            article_id: comment.article_id,
            author: comment.author.into(),
        }
    }
}

/// Body of POST and PUT /article
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
}

impl From<ArticleForm> for ArticleEdit {
    fn from(form: ArticleForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
        }
    }
}

/// Body of POST /comment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentForm {
    pub content: String,
    pub article_id: ArticleId,
}

/// Body of PUT /comment/{id}; any `articleId` sent along is ignored
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCommentForm {
    pub content: String,
}

/// Query of GET /comment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub article_id: Option<ArticleId>,
}

/// `?articleId=` with no value means no filter
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<ArticleId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
