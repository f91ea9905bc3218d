//! Comment Entity

use kernel::id::{ArticleId, CommentId};

use crate::domain::entity::author::Author;

#[derive(Debug, Clone)]
pub struct Comment {
    /// Store-assigned, never reused
    pub id: CommentId,
    pub content: String,
    /// Article the comment belongs to; fixed at creation
    pub article_id: ArticleId,
    pub author: Author,
}

/// Comment about to be stored (no id yet)
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub article_id: ArticleId,
    pub author: Author,
}

impl NewComment {
    pub fn new(content: impl Into<String>, article_id: ArticleId, author: Author) -> Self {
        Self {
            content: content.into(),
            article_id,
            author,
        }
    }

    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            content: self.content,
            article_id: self.article_id,
            author: self.author,
        }
    }
}
