//! Entities

pub mod article;
pub mod author;
pub mod comment;

pub use article::{Article, ArticleEdit, NewArticle};
pub use author::Author;
pub use comment::{Comment, NewComment};
