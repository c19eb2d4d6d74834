//! Article model

use serde::{Deserialize, Serialize};

use super::Comment;

/// Article entity together with the comments it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Article title
    pub name: String,
    /// Article body
    pub content: String,
    /// Comments in ascending id order; empty when there are none
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Article {
    /// Create an article with no comments attached
    pub fn new(id: i64, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: content.into(),
            comments: Vec::new(),
        }
    }
}

/// Input for creating an article
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleInput {
    pub name: String,
    pub content: String,
}

impl CreateArticleInput {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
