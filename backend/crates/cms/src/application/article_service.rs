//! Article Service

use std::sync::Arc;

use auth::domain::Actor;
use kernel::id::ArticleId;

use crate::domain::entity::{Article, ArticleEdit, Author, NewArticle};
use crate::domain::policy::{Action, Resource, ResourceKind, authorize, precheck};
use crate::domain::repository::ArticleRepository;
use crate::error::{CmsError, CmsResult};

pub struct ArticleService<R>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> ArticleService<R>
where
    R: ArticleRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> CmsResult<Vec<Article>> {
        self.repo.list_articles().await
    }

    pub async fn get(&self, id: ArticleId) -> CmsResult<Article> {
        self.repo
            .find_article(id)
            .await?
            .ok_or(CmsError::ArticleNotFound(id))
    }

    pub async fn create(
        &self,
        title: String,
        content: String,
        actor: Option<&Actor>,
    ) -> CmsResult<Article> {
        authorize(Action::Create, Resource::new(ResourceKind::Article), actor)?;
        let actor = actor.ok_or(CmsError::Unauthenticated)?;

        let article = self
            .repo
            .create_article(&NewArticle::new(title, content, Author::from(actor)))
            .await?;

        tracing::info!(article_id = %article.id, author = %actor.user_id, "Article created");

        Ok(article)
    }

    /// Only title and content change; author and creation time are kept
    pub async fn update(
        &self,
        id: ArticleId,
        edit: ArticleEdit,
        actor: Option<&Actor>,
    ) -> CmsResult<Article> {
        precheck(Action::Update, ResourceKind::Article, actor)?;

        let existing = self.get(id).await?;
        authorize(
            Action::Update,
            Resource::owned_by(ResourceKind::Article, &existing.author.id),
            actor,
        )?;

        let article = self
            .repo
            .update_article(id, &edit)
            .await?
            .ok_or(CmsError::ArticleNotFound(id))?;

        tracing::info!(article_id = %id, "Article updated");

        Ok(article)
    }

    /// Removes the article together with its comments
    pub async fn delete(&self, id: ArticleId, actor: Option<&Actor>) -> CmsResult<()> {
        authorize(Action::Delete, Resource::new(ResourceKind::Article), actor)?;

        if !self.repo.delete_article(id).await? {
            return Err(CmsError::ArticleNotFound(id));
        }

        tracing::info!(article_id = %id, "Article deleted");

        Ok(())
    }
}
