//! Article Entity

use chrono::{DateTime, Utc};
use kernel::id::ArticleId;

use crate::domain::entity::author::Author;

#[derive(Debug, Clone)]
pub struct Article {
    /// Store-assigned, never reused
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    /// Set at creation, never changes
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// Article about to be stored (no id yet)
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author,
            created_at: Utc::now(),
        }
    }

    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

/// Mutable part of an article
#[derive(Debug, Clone)]
pub struct ArticleEdit {
    pub title: String,
    pub content: String,
}
