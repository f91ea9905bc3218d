//! Application Layer
//!
//! Services that apply the authorization policy around repository calls.

pub mod article_service;
pub mod comment_service;

// Re-exports
pub use article_service::ArticleService;
pub use comment_service::CommentService;
