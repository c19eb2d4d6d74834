//! Database layer
//!
//! Supports:
//! - SQLite (default, for single-binary deployment)
//! - MySQL
//!
//! The driver is selected from configuration. Repositories work against
//! the `DatabasePool` trait object and pick the dialect at call time.
//!
//! # Usage
//!
//! ```ignore
//! use bulletin::config::DatabaseConfig;
//! use bulletin::db::{create_pool, migrations};
//! use bulletin::db::repositories::{ArticleRepository, SqlxArticleRepository};
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! migrations::run_migrations(&pool).await?;
//!
//! let articles = SqlxArticleRepository::new(pool.clone()).find_all().await?;
//! ```

pub mod flatten;
pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{
    create_pool, create_test_pool, DatabasePool, DynDatabasePool, MysqlDatabase, SqliteDatabase,
};
