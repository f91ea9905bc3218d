//! In-Memory Repository
//!
//! Process-local content store for tests and database-less runs.
//! Ids come from monotonic counters, so deleted ids are never handed out again.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{ArticleId, CommentId};
use tokio::sync::RwLock;

use crate::domain::entity::{Article, ArticleEdit, Comment, NewArticle, NewComment};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::error::{CmsError, CmsResult};

#[derive(Default)]
struct Store {
    articles: BTreeMap<ArticleId, Article>,
    comments: BTreeMap<CommentId, Comment>,
    last_article_id: i64,
    last_comment_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryCmsRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCmsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleRepository for InMemoryCmsRepository {
    async fn list_articles(&self) -> CmsResult<Vec<Article>> {
        Ok(self.store.read().await.articles.values().cloned().collect())
    }

    async fn find_article(&self, id: ArticleId) -> CmsResult<Option<Article>> {
        Ok(self.store.read().await.articles.get(&id).cloned())
    }

    async fn article_exists(&self, id: ArticleId) -> CmsResult<bool> {
        Ok(self.store.read().await.articles.contains_key(&id))
    }

    async fn create_article(&self, article: &NewArticle) -> CmsResult<Article> {
        let mut store = self.store.write().await;
        store.last_article_id += 1;
        let article = article.clone().into_article(ArticleId::from_i64(store.last_article_id));
        store.articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update_article(
        &self,
        id: ArticleId,
        edit: &ArticleEdit,
    ) -> CmsResult<Option<Article>> {
        let mut store = self.store.write().await;
        Ok(store.articles.get_mut(&id).map(|article| {
            article.title.clone_from(&edit.title);
            article.content.clone_from(&edit.content);
            article.clone()
        }))
    }

    async fn delete_article(&self, id: ArticleId) -> CmsResult<bool> {
        let mut store = self.store.write().await;
        if store.articles.remove(&id).is_none() {
            return Ok(false);
        }
        store.comments.retain(|_, comment| comment.article_id != id);
        Ok(true)
    }
}

impl CommentRepository for InMemoryCmsRepository {
    async fn list_comments(&self, article_id: Option<ArticleId>) -> CmsResult<Vec<Comment>> {
        Ok(self
            .store
            .read()
            .await
            .comments
            .values()
            .filter(|comment| article_id.is_none_or(|id| comment.article_id == id))
            .cloned()
            .collect())
    }

    async fn find_comment(&self, id: CommentId) -> CmsResult<Option<Comment>> {
        Ok(self.store.read().await.comments.get(&id).cloned())
    }

    async fn create_comment(&self, comment: &NewComment) -> CmsResult<Comment> {
        let mut store = self.store.write().await;
        // foreign key
        if !store.articles.contains_key(&comment.article_id) {
            return Err(CmsError::ArticleNotFound(comment.article_id));
        }
        store.last_comment_id += 1;
        let comment = comment.clone().into_comment(CommentId::from_i64(store.last_comment_id));
        store.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update_comment(&self, id: CommentId, content: &str) -> CmsResult<Option<Comment>> {
        let mut store = self.store.write().await;
        Ok(store.comments.get_mut(&id).map(|comment| {
            comment.content = content.to_string();
            comment.clone()
        }))
    }

    async fn delete_comment(&self, id: CommentId) -> CmsResult<bool> {
        Ok(self.store.write().await.comments.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Author;
    use auth::domain::UserId;

    fn author() -> Author {
        Author::new(UserId::new("u-1"), "una")
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryCmsRepository::new();
        let first = repo
            .create_article(&NewArticle::new("a", "a", author()))
            .await
            .unwrap();
        assert!(repo.delete_article(first.id).await.unwrap());

        let second = repo
            .create_article(&NewArticle::new("b", "b", author()))
            .await
            .unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_delete_article_cascades_to_comments() {
        let repo = InMemoryCmsRepository::new();
        let keep = repo
            .create_article(&NewArticle::new("keep", "k", author()))
            .await
            .unwrap();
        let doomed = repo
            .create_article(&NewArticle::new("doomed", "d", author()))
            .await
            .unwrap();
        repo.create_comment(&NewComment::new("on keep", keep.id, author()))
            .await
            .unwrap();
        let orphan = repo
            .create_comment(&NewComment::new("on doomed", doomed.id, author()))
            .await
            .unwrap();

        assert!(repo.delete_article(doomed.id).await.unwrap());

        assert!(repo.find_comment(orphan.id).await.unwrap().is_none());
        assert_eq!(repo.list_comments(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_comment_needs_existing_article() {
        let repo = InMemoryCmsRepository::new();
        let result = repo
            .create_comment(&NewComment::new("x", ArticleId::from_i64(99), author()))
            .await;
        assert!(matches!(result, Err(CmsError::ArticleNotFound(_))));
        assert!(repo.list_comments(None).await.unwrap().is_empty());
    }
}
