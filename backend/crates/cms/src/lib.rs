//! CMS (Content Management) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Articles, comments, the authorization policy, repository traits
//! - `application/` - Article and comment services
//! - `infra/` - Content store implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - Reads are public
//! - Writers create articles, Subscribers create comments
//! - Editors or the author edit; only Editors delete
//! - Every decision goes through [`domain::policy::authorize`] before the store is touched

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CmsError, CmsResult};
pub use infra::postgres::PgCmsRepository;
pub use presentation::router::{cms_router, health_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::memory::InMemoryCmsRepository;
    pub use crate::infra::postgres::PgCmsRepository;
}

pub mod router {
    pub use crate::presentation::router::*;
}
