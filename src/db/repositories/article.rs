//! Article repository
//!
//! Database operations for the `articles` table.
//!
//! This module provides:
//! - `ArticleRepository` trait defining the interface for article data access
//! - `SqlxArticleRepository` implementing the trait for SQLite and MySQL
//!
//! `find_all` is a single LEFT JOIN against `comments`; the rows are
//! stitched back into articles by [`crate::db::flatten`].

use crate::config::DatabaseDriver;
use crate::db::flatten::{try_flatten_rows, JoinedRow};
use crate::db::DynDatabasePool;
use crate::models::{Article, Comment, CreateArticleInput};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{MySqlPool, Row, SqlitePool};
use std::sync::Arc;

/// Articles newest first, each article's comments oldest first.
const FIND_ALL_SQL: &str = r#"
    SELECT a.id, a.name, a.content,
           c.id AS com_id, c.name AS com_name, c.content AS com_content, c.article_id AS com_article_id
    FROM articles AS a
    LEFT OUTER JOIN comments AS c ON a.id = c.article_id
    ORDER BY a.id DESC, c.id ASC
"#;

/// Article repository trait
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// List every article with its comments attached.
    ///
    /// Returns an empty vector when there are no articles.
    async fn find_all(&self) -> Result<Vec<Article>>;

    /// Insert a new article and return its generated id
    async fn insert(&self, input: &CreateArticleInput) -> Result<i64>;

    /// Delete an article by id. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// SQLx-based article repository implementation
///
/// Supports both SQLite and MySQL databases.
pub struct SqlxArticleRepository {
    pool: DynDatabasePool,
}

impl SqlxArticleRepository {
    /// Create a new SQLx article repository
    pub fn new(pool: DynDatabasePool) -> Self {
        Self { pool }
    }

    /// Create a boxed repository for use with dependency injection
    pub fn boxed(pool: DynDatabasePool) -> Arc<dyn ArticleRepository> {
        Arc::new(Self::new(pool))
    }
}

#[async_trait]
impl ArticleRepository for SqlxArticleRepository {
    async fn find_all(&self) -> Result<Vec<Article>> {
        match self.pool.driver() {
            DatabaseDriver::Sqlite => find_all_sqlite(self.pool.sqlite()?).await,
            DatabaseDriver::Mysql => find_all_mysql(self.pool.mysql()?).await,
        }
    }

    async fn insert(&self, input: &CreateArticleInput) -> Result<i64> {
        let id = match self.pool.driver() {
            DatabaseDriver::Sqlite => insert_article_sqlite(self.pool.sqlite()?, input).await?,
            DatabaseDriver::Mysql => insert_article_mysql(self.pool.mysql()?, input).await?,
        };
        tracing::debug!(article_id = id, "Inserted article");
        Ok(id)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let affected = match self.pool.driver() {
            DatabaseDriver::Sqlite => delete_article_sqlite(self.pool.sqlite()?, id).await?,
            DatabaseDriver::Mysql => delete_article_mysql(self.pool.mysql()?, id).await?,
        };
        if affected == 0 {
            tracing::debug!(article_id = id, "No article to delete");
        }
        Ok(())
    }
}

// ============================================================================
// SQLite implementations
// ============================================================================

async fn find_all_sqlite(pool: &SqlitePool) -> Result<Vec<Article>> {
    let rows = sqlx::query(FIND_ALL_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to list articles")?;

    try_flatten_rows(rows.iter().map(row_to_joined_sqlite))
}

async fn insert_article_sqlite(pool: &SqlitePool, input: &CreateArticleInput) -> Result<i64> {
    let result = sqlx::query("INSERT INTO articles (name, content) VALUES (?, ?)")
        .bind(&input.name)
        .bind(&input.content)
        .execute(pool)
        .await
        .context("Failed to create article")?;

    Ok(result.last_insert_rowid())
}

async fn delete_article_sqlite(pool: &SqlitePool, id: i64) -> Result<u64> {
    // comments rows go with it through ON DELETE CASCADE
    let result = sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete article")?;

    Ok(result.rows_affected())
}

fn row_to_joined_sqlite(row: &sqlx::sqlite::SqliteRow) -> Result<JoinedRow> {
    let article_id: i64 = row.try_get("id")?;
    let comment = match row.try_get::<Option<i64>, _>("com_id")? {
        Some(id) => Some(Comment {
            id,
            name: row.try_get("com_name")?,
            content: row.try_get("com_content")?,
            article_id: row.try_get("com_article_id")?,
        }),
        None => None,
    };

    Ok(JoinedRow {
        article_id,
        article_name: row.try_get("name")?,
        article_content: row.try_get("content")?,
        comment,
    })
}

// ============================================================================
// MySQL implementations
// ============================================================================

async fn find_all_mysql(pool: &MySqlPool) -> Result<Vec<Article>> {
    let rows = sqlx::query(FIND_ALL_SQL)
        .fetch_all(pool)
        .await
        .context("Failed to list articles")?;

    try_flatten_rows(rows.iter().map(row_to_joined_mysql))
}

async fn insert_article_mysql(pool: &MySqlPool, input: &CreateArticleInput) -> Result<i64> {
    let result = sqlx::query("INSERT INTO articles (name, content) VALUES (?, ?)")
        .bind(&input.name)
        .bind(&input.content)
        .execute(pool)
        .await
        .context("Failed to create article")?;

    i64::try_from(result.last_insert_id()).context("Article id out of range")
}

async fn delete_article_mysql(pool: &MySqlPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to delete article")?;

    Ok(result.rows_affected())
}

fn row_to_joined_mysql(row: &sqlx::mysql::MySqlRow) -> Result<JoinedRow> {
    let article_id: i64 = row.try_get("id")?;
    let comment = match row.try_get::<Option<i64>, _>("com_id")? {
        Some(id) => Some(Comment {
            id,
            name: row.try_get("com_name")?,
            content: row.try_get("com_content")?,
            article_id: row.try_get("com_article_id")?,
        }),
        None => None,
    };

    Ok(JoinedRow {
        article_id,
        article_name: row.try_get("name")?,
        article_content: row.try_get("content")?,
        comment,
    })
}
