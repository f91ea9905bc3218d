//! Identity Verification
//!
//! The boundary between "who is calling" and everything downstream.
//! Handlers and services only ever see an [`Actor`]; how the bearer token
//! was checked stays behind this trait.

use crate::domain::entity::actor::Actor;
use crate::error::AuthResult;

/// Verify a bearer token and extract the caller's identity and roles
pub trait IdentityVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> AuthResult<Actor>;
}

impl<V: IdentityVerifier> IdentityVerifier for std::sync::Arc<V> {
    fn verify(&self, token: &str) -> AuthResult<Actor> {
        (**self).verify(token)
    }
}
