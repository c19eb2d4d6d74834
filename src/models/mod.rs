//! Data models
//!
//! Plain data holders shared by the repositories and the service layer:
//! - Database entities (Article, Comment)
//! - Input types for the insert statements

mod article;
mod comment;

pub use article::{Article, CreateArticleInput};
pub use comment::{Comment, CreateCommentInput};
