//! Domain Layer
//!
//! Contains entities, the authorization policy and repository traits.

pub mod entity;
pub mod policy;
pub mod repository;

// Re-exports
pub use entity::{Article, ArticleEdit, Author, Comment, NewArticle, NewComment};
pub use policy::{Action, Decision, Resource, ResourceKind, authorize, evaluate, precheck};
pub use repository::{ArticleRepository, CommentRepository};
