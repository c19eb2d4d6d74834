//! Bulletin - a minimal blog backend

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bulletin::{
    config::Config,
    db::{
        self,
        repositories::{SqlxArticleRepository, SqlxCommentRepository},
    },
    services::BlogService,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulletin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting bulletin...");

    let config = Config::load_with_env(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database).await?;
    tracing::info!("Database connected: {:?}", config.database.driver);

    db::migrations::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    let service = BlogService::new(
        SqlxArticleRepository::boxed(pool.clone()),
        SqlxCommentRepository::boxed(pool.clone()),
    );

    let articles = service.list_articles().await?;
    let comments: usize = articles.iter().map(|a| a.comments.len()).sum();
    tracing::info!(
        articles = articles.len(),
        comments,
        "Store ready"
    );

    pool.close().await;
    Ok(())
}
