//! Comment repository

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{MySqlPool, SqlitePool};
use std::sync::Arc;

use crate::config::DatabaseDriver;
use crate::db::DynDatabasePool;
use crate::models::CreateCommentInput;

/// Comment repository trait
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment and return its generated id
    async fn insert(&self, input: &CreateCommentInput) -> Result<i64>;

    /// Delete every comment of an article, returning how many were removed
    async fn delete_by_article_id(&self, article_id: i64) -> Result<u64>;
}

/// SQLx-based comment repository implementation
pub struct SqlxCommentRepository {
    pool: DynDatabasePool,
}

impl SqlxCommentRepository {
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn CommentRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn insert(&self, input: &CreateCommentInput) -> Result<i64> {
        let id = match self.pool.driver() {
            DatabaseDriver::Sqlite => insert_sqlite(self.pool.sqlite()?, input).await?,
            DatabaseDriver::Mysql => insert_mysql(self.pool.mysql()?, input).await?,
        };
        tracing::debug!(comment_id = id, article_id = input.article_id, "Inserted comment");
        Ok(id)
    }

    async fn delete_by_article_id(&self, article_id: i64) -> Result<u64> {
        let affected = match self.pool.driver() {
            DatabaseDriver::Sqlite => delete_by_article_sqlite(self.pool.sqlite()?, article_id).await?,
            DatabaseDriver::Mysql => delete_by_article_mysql(self.pool.mysql()?, article_id).await?,
        };
        tracing::debug!(article_id, deleted = affected, "Deleted comments");
        Ok(affected)
    }
}

// SQLite implementations
async fn insert_sqlite(pool: &SqlitePool, input: &CreateCommentInput) -> Result<i64> {
    let result = sqlx::query("INSERT INTO comments (name, content, article_id) VALUES (?, ?, ?)")
        .bind(&input.name)
        .bind(&input.content)
        .bind(input.article_id)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to create comment for article {}", input.article_id))?;

    Ok(result.last_insert_rowid())
}

async fn delete_by_article_sqlite(pool: &SqlitePool, article_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM comments WHERE article_id = ?")
        .bind(article_id)
        .execute(pool)
        .await
        .context("Failed to delete comments")?;

    Ok(result.rows_affected())
}

// MySQL implementations
async fn insert_mysql(pool: &MySqlPool, input: &CreateCommentInput) -> Result<i64> {
    let result = sqlx::query("INSERT INTO comments (name, content, article_id) VALUES (?, ?, ?)")
        .bind(&input.name)
        .bind(&input.content)
        .bind(input.article_id)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to create comment for article {}", input.article_id))?;

    i64::try_from(result.last_insert_id()).context("Comment id out of range")
}

async fn delete_by_article_mysql(pool: &MySqlPool, article_id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM comments WHERE article_id = ?")
        .bind(article_id)
        .execute(pool)
        .await
        .context("Failed to delete comments")?;

    Ok(result.rows_affected())
}
