//! Database repositories
//!
//! Repository pattern implementations for database access.
//! Each repository issues the statements for one table.

pub mod article;
pub mod comment;

pub use article::{ArticleRepository, SqlxArticleRepository};
pub use comment::{CommentRepository, SqlxCommentRepository};
