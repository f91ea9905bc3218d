//! Auth Middleware
//!
//! Resolves the bearer token (if any) into an [`Actor`] stored in request
//! extensions. Requests are never rejected here: routes decide for
//! themselves whether an anonymous caller is acceptable.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;

use crate::domain::entity::actor::Actor;
use crate::domain::verifier::IdentityVerifier;
use crate::error::AuthError;

/// Middleware state
pub struct AuthenticateState<V>
where
    V: IdentityVerifier,
{
    pub verifier: Arc<V>,
}

impl<V: IdentityVerifier> AuthenticateState<V> {
    pub fn new(verifier: Arc<V>) -> Self {
        Self { verifier }
    }
}

impl<V: IdentityVerifier> Clone for AuthenticateState<V> {
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
        }
    }
}

/// Middleware that attaches the verified caller, if any
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn authenticate<V>(
    State(state): State<AuthenticateState<V>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    V: IdentityVerifier,
{
    if let Some(actor) = resolve_actor(state.verifier.as_ref(), &req) {
        req.extensions_mut().insert(actor);
    }

    next.run(req).await
}

fn resolve_actor<V: IdentityVerifier>(verifier: &V, req: &Request<Body>) -> Option<Actor> {
    let token = match extract_bearer_token(req.headers()) {
        Ok(Some(token)) => token,
        Ok(None) => return None,
        Err(e) => {
            AuthError::from(e).log();
            return None;
        }
    };

    match verifier.verify(&token) {
        Ok(actor) => {
            tracing::debug!(user_id = %actor.user_id, "Bearer token accepted");
            Some(actor)
        }
        Err(e) => {
            e.log();
            None
        }
    }
}
