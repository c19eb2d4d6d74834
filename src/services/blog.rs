//! Blog service
//!
//! Lists, posts and deletes articles and comments. Deleting an article
//! removes its comments first and then the article itself, so the cascade
//! holds even on a schema without `ON DELETE CASCADE`.

use crate::db::repositories::{ArticleRepository, CommentRepository};
use crate::models::{Article, CreateArticleInput, CreateCommentInput};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Blog service coordinating the article and comment repositories
pub struct BlogService {
    articles: Arc<dyn ArticleRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl BlogService {
    pub fn new(articles: Arc<dyn ArticleRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { articles, comments }
    }

    /// All articles, newest first, each with its comments oldest first
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let articles = self.articles.find_all().await?;
        tracing::debug!(count = articles.len(), "Listed articles");
        Ok(articles)
    }

    /// Publish an article, returning its id
    pub async fn post_article(&self, input: CreateArticleInput) -> Result<i64> {
        let id = self.articles.insert(&input).await?;
        tracing::info!(article_id = id, "Article posted");
        Ok(id)
    }

    /// Attach a comment to an existing article, returning its id
    pub async fn post_comment(&self, input: CreateCommentInput) -> Result<i64> {
        let id = self.comments.insert(&input).await?;
        tracing::info!(comment_id = id, article_id = input.article_id, "Comment posted");
        Ok(id)
    }

    /// Delete an article together with its comments.
    ///
    /// A missing id is a no-op.
    pub async fn delete_article(&self, id: i64) -> Result<()> {
        let removed = self
            .comments
            .delete_by_article_id(id)
            .await
            .with_context(|| format!("Failed to delete comments of article {}", id))?;
        self.articles
            .delete_by_id(id)
            .await
            .with_context(|| format!("Failed to delete article {}", id))?;
        tracing::info!(article_id = id, comments = removed, "Article deleted");
        Ok(())
    }
}
