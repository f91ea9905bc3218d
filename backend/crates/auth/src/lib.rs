//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, roles, the authenticated actor, repository traits
//! - `application/` - Token issuance and verification
//! - `infra/` - User directory implementations
//! - `presentation/` - Bearer middleware and extractors
//!
//! ## Security Model
//! - Stateless HS256 bearer tokens signed with one shared secret
//! - Tokens carry issuer, audience, expiry and the caller's roles
//! - Roles are read from the token, never re-fetched per request
//! - Unverifiable tokens downgrade the request to anonymous

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::JwtConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryUserRepository;
    pub use crate::infra::postgres::PgUserRepository;
}

pub mod middleware {
    pub use crate::presentation::extract::*;
    pub use crate::presentation::middleware::*;
}
