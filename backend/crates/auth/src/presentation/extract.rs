//! Request Extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::actor::Actor;

/// The caller attached by [`authenticate`](super::middleware::authenticate)
///
/// `None` for anonymous requests and for requests whose token failed
/// verification.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Option<Actor>);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentActor(parts.extensions.get::<Actor>().cloned()))
    }
}
