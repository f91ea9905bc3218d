//! Repository Traits
//!
//! Interfaces for content persistence. Implementations are in the infrastructure layer.

use kernel::id::{ArticleId, CommentId};

use crate::domain::entity::{Article, ArticleEdit, Comment, NewArticle, NewComment};
use crate::error::CmsResult;

/// Article repository trait
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// All articles with authors resolved, in id order
    async fn list_articles(&self) -> CmsResult<Vec<Article>>;

    async fn find_article(&self, id: ArticleId) -> CmsResult<Option<Article>>;

    async fn article_exists(&self, id: ArticleId) -> CmsResult<bool>;

    /// Store a new article and assign its id
    async fn create_article(&self, article: &NewArticle) -> CmsResult<Article>;

    /// Replace title and content; `None` if the article is gone
    async fn update_article(&self, id: ArticleId, edit: &ArticleEdit)
    -> CmsResult<Option<Article>>;

    /// Delete an article and its comments; `false` if nothing was deleted
    async fn delete_article(&self, id: ArticleId) -> CmsResult<bool>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Comments in id order, optionally restricted to one article
    async fn list_comments(&self, article_id: Option<ArticleId>) -> CmsResult<Vec<Comment>>;

    async fn find_comment(&self, id: CommentId) -> CmsResult<Option<Comment>>;

    /// Store a new comment and assign its id
    async fn create_comment(&self, comment: &NewComment) -> CmsResult<Comment>;

    /// Replace content; `None` if the comment is gone
    async fn update_comment(&self, id: CommentId, content: &str) -> CmsResult<Option<Comment>>;

    /// `false` if nothing was deleted
    async fn delete_comment(&self, id: CommentId) -> CmsResult<bool>;
}
