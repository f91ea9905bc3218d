//! Comment Service

use std::sync::Arc;

use auth::domain::Actor;
use kernel::id::{ArticleId, CommentId};

use crate::domain::entity::{Author, Comment, NewComment};
use crate::domain::policy::{Action, Resource, ResourceKind, authorize, precheck};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::error::{CmsError, CmsResult};

pub struct CommentService<C, A>
where
    C: CommentRepository + Clone + Send + Sync + 'static,
    A: ArticleRepository + Clone + Send + Sync + 'static,
{
    comment_repo: Arc<C>,
    article_repo: Arc<A>,
}

impl<C, A> CommentService<C, A>
where
    C: CommentRepository + Clone + Send + Sync + 'static,
    A: ArticleRepository + Clone + Send + Sync + 'static,
{
    pub fn new(comment_repo: Arc<C>, article_repo: Arc<A>) -> Self {
        Self {
            comment_repo,
            article_repo,
        }
    }

    /// All comments, or only those on `article_id`
    pub async fn list(&self, article_id: Option<ArticleId>) -> CmsResult<Vec<Comment>> {
        self.comment_repo.list_comments(article_id).await
    }

    pub async fn get(&self, id: CommentId) -> CmsResult<Comment> {
        self.comment_repo
            .find_comment(id)
            .await?
            .ok_or(CmsError::CommentNotFound(id))
    }

    /// Checked in order: caller present, caller is a Subscriber, article exists
    pub async fn create(
        &self,
        content: String,
        article_id: ArticleId,
        actor: Option<&Actor>,
    ) -> CmsResult<Comment> {
        authorize(Action::Create, Resource::new(ResourceKind::Comment), actor)?;
        let actor = actor.ok_or(CmsError::Unauthenticated)?;

        if !self.article_repo.article_exists(article_id).await? {
            return Err(CmsError::ArticleNotFound(article_id));
        }

        let comment = self
            .comment_repo
            .create_comment(&NewComment::new(content, article_id, Author::from(actor)))
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            article_id = %article_id,
            author = %actor.user_id,
            "Comment created"
        );

        Ok(comment)
    }

    /// Only content changes; author and article are kept
    pub async fn update(
        &self,
        id: CommentId,
        content: String,
        actor: Option<&Actor>,
    ) -> CmsResult<Comment> {
        precheck(Action::Update, ResourceKind::Comment, actor)?;

        let existing = self.get(id).await?;
        authorize(
            Action::Update,
            Resource::owned_by(ResourceKind::Comment, &existing.author.id),
            actor,
        )?;

        let comment = self
            .comment_repo
            .update_comment(id, &content)
            .await?
            .ok_or(CmsError::CommentNotFound(id))?;

        tracing::info!(comment_id = %id, "Comment updated");

        Ok(comment)
    }

    pub async fn delete(&self, id: CommentId, actor: Option<&Actor>) -> CmsResult<()> {
        authorize(Action::Delete, Resource::new(ResourceKind::Comment), actor)?;

        if !self.comment_repo.delete_comment(id).await? {
            return Err(CmsError::CommentNotFound(id));
        }

        tracing::info!(comment_id = %id, "Comment deleted");

        Ok(())
    }
}
