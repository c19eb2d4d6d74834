//! Comment model

use serde::{Deserialize, Serialize};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    /// Display name of the comment author
    pub name: String,
    pub content: String,
    /// Owning article
    pub article_id: i64,
}

/// Input for creating a comment
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentInput {
    pub name: String,
    pub content: String,
    pub article_id: i64,
}

impl CreateCommentInput {
    pub fn new(article_id: i64, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            article_id,
        }
    }
}
