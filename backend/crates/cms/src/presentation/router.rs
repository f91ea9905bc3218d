//! CMS Router

use std::sync::Arc;

use auth::domain::IdentityVerifier;
use auth::presentation::{AuthenticateState, authenticate};
use axum::{Router, middleware, routing::get};

use crate::domain::repository::{ArticleRepository, CommentRepository};
use crate::infra::postgres::PgCmsRepository;
use crate::presentation::handlers::{self, CmsAppState};

/// Create the CMS router with PostgreSQL repository
///
/// Mount under `/api`.
pub fn cms_router<V>(repo: PgCmsRepository, verifier: V) -> Router
where
    V: IdentityVerifier,
{
    cms_router_generic(repo, verifier)
}

/// Create a generic CMS router for any repository implementation
pub fn cms_router_generic<R, V>(repo: R, verifier: V) -> Router
where
    R: ArticleRepository + CommentRepository + Clone + Send + Sync + 'static,
    V: IdentityVerifier,
{
    let state = CmsAppState {
        repo: Arc::new(repo),
    };
    let auth_state = AuthenticateState::new(Arc::new(verifier));

    Router::new()
        .route(
            "/article",
            get(handlers::list_articles::<R>).post(handlers::create_article::<R>),
        )
        .route(
            "/article/{id}",
            get(handlers::get_article::<R>)
                .put(handlers::update_article::<R>)
                .delete(handlers::delete_article::<R>),
        )
        .route(
            "/comment",
            get(handlers::list_comments::<R>).post(handlers::create_comment::<R>),
        )
        .route(
            "/comment/{id}",
            get(handlers::get_comment::<R>)
                .put(handlers::update_comment::<R>)
                .delete(handlers::delete_comment::<R>),
        )
        .layer(middleware::from_fn_with_state(
            auth_state,
            authenticate::<V>,
        ))
        .with_state(state)
}

/// Liveness probe, mounted at the root
pub fn health_router() -> Router {
    Router::new().route("/health", get(handlers::health))
}
