//! Presentation Layer
//!
//! HTTP handlers, DTOs, extractors and router.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;

pub use handlers::CmsAppState;
pub use router::{cms_router, cms_router_generic, health_router};
