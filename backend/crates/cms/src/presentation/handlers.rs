//! HTTP Handlers

use std::sync::Arc;

use auth::presentation::CurrentActor;
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::{ArticleId, CommentId};

use crate::application::{ArticleService, CommentService};
use crate::domain::policy::{Action, ResourceKind, precheck};
use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::error::{CmsError, CmsResult};
use crate::presentation::dto::{
    ArticleForm, ArticleView, CommentListQuery, CommentView, EditCommentForm, HealthResponse,
    NewCommentForm,
};
use crate::presentation::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};

/// Where created resources are served from once the router is mounted under `/api`
const ARTICLE_LOCATION: &str = "/api/article";
const COMMENT_LOCATION: &str = "/api/comment";

/// Shared state for CMS handlers
#[derive(Clone)]
pub struct CmsAppState<R>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> CmsAppState<R>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    fn articles(&self) -> ArticleService<R> {
        ArticleService::new(self.repo.clone())
    }

    fn comments(&self) -> CommentService<R, R> {
        CommentService::new(self.repo.clone(), self.repo.clone())
    }
}

// Mutating handlers take their path and body as `Result` so the caller is
// checked before any parse error is reported.

// ============================================================================
// Articles
// ============================================================================

/// GET /api/article
pub async fn list_articles<R>(
    State(state): State<CmsAppState<R>>,
) -> CmsResult<Json<Vec<ArticleView>>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let articles = state.articles().list().await?;
    Ok(Json(articles.into_iter().map(ArticleView::from).collect()))
}

/// GET /api/article/{id}
pub async fn get_article<R>(
    State(state): State<CmsAppState<R>>,
    ValidatedPath(id): ValidatedPath<ArticleId>,
) -> CmsResult<Json<ArticleView>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let article = state.articles().get(id).await?;
    Ok(Json(article.into()))
}

/// POST /api/article
pub async fn create_article<R>(
    State(state): State<CmsAppState<R>>,
    CurrentActor(actor): CurrentActor,
    form: Result<ValidatedJson<ArticleForm>, CmsError>,
) -> CmsResult<impl IntoResponse>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    precheck(Action::Create, ResourceKind::Article, actor.as_ref())?;
    let ValidatedJson(form) = form?;

    let article = state
        .articles()
        .create(form.title, form.content, actor.as_ref())
        .await?;

    let location = format!("{ARTICLE_LOCATION}/{}", article.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ArticleView::from(article)),
    ))
}

/// PUT /api/article/{id}
pub async fn update_article<R>(
    State(state): State<CmsAppState<R>>,
    CurrentActor(actor): CurrentActor,
    id: Result<ValidatedPath<ArticleId>, CmsError>,
    form: Result<ValidatedJson<ArticleForm>, CmsError>,
) -> CmsResult<Json<ArticleView>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    precheck(Action::Update, ResourceKind::Article, actor.as_ref())?;
    let (ValidatedPath(id), ValidatedJson(form)) = (id?, form?);

    let article = state
        .articles()
        .update(id, form.into(), actor.as_ref())
        .await?;
    Ok(Json(article.into()))
}

/// DELETE /api/article/{id}
pub async fn delete_article<R>(
    State(state): State<CmsAppState<R>>,
    CurrentActor(actor): CurrentActor,
    id: Result<ValidatedPath<ArticleId>, CmsError>,
) -> CmsResult<StatusCode>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    precheck(Action::Delete, ResourceKind::Article, actor.as_ref())?;
    let ValidatedPath(id) = id?;

    state.articles().delete(id, actor.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// GET /api/comment?articleId=
pub async fn list_comments<R>(
    State(state): State<CmsAppState<R>>,
    ValidatedQuery(query): ValidatedQuery<CommentListQuery>,
) -> CmsResult<Json<Vec<CommentView>>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let comments = state.comments().list(query.article_id).await?;
    Ok(Json(comments.into_iter().map(CommentView::from).collect()))
}

/// GET /api/comment/{id}
pub async fn get_comment<R>(
    State(state): State<CmsAppState<R>>,
    ValidatedPath(id): ValidatedPath<CommentId>,
) -> CmsResult<Json<CommentView>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let comment = state.comments().get(id).await?;
    Ok(Json(comment.into()))
}

/// POST /api/comment
pub async fn create_comment<R>(
    State(state): State<CmsAppState<R>>,
    CurrentActor(actor): CurrentActor,
    form: Result<ValidatedJson<NewCommentForm>, CmsError>,
) -> CmsResult<impl IntoResponse>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    precheck(Action::Create, ResourceKind::Comment, actor.as_ref())?;
    let ValidatedJson(form) = form?;

    let comment = state
        .comments()
        .create(form.content, form.article_id, actor.as_ref())
        .await?;

    let location = format!("{COMMENT_LOCATION}/{}", comment.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CommentView::from(comment)),
    ))
}

/// PUT /api/comment/{id}
pub async fn update_comment<R>(
    State(state): State<CmsAppState<R>>,
    CurrentActor(actor): CurrentActor,
    id: Result<ValidatedPath<CommentId>, CmsError>,
    form: Result<ValidatedJson<EditCommentForm>, CmsError>,
) -> CmsResult<Json<CommentView>>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    precheck(Action::Update, ResourceKind::Comment, actor.as_ref())?;
    let (ValidatedPath(id), ValidatedJson(form)) = (id?, form?);

    let comment = state
        .comments()
        .update(id, form.content, actor.as_ref())
        .await?;
    Ok(Json(comment.into()))
}

/// DELETE /api/comment/{id}
pub async fn delete_comment<R>(
    State(state): State<CmsAppState<R>>,
    CurrentActor(actor): CurrentActor,
    id: Result<ValidatedPath<CommentId>, CmsError>,
) -> CmsResult<StatusCode>
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    precheck(Action::Delete, ResourceKind::Comment, actor.as_ref())?;
    let ValidatedPath(id) = id?;

    state.comments().delete(id, actor.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
