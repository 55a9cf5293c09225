//! Populate an empty database with the default site content.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maya_api::config::BootstrapAdmin;
use maya_api::seed::seed_defaults;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maya_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = maya_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    maya_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let admin = BootstrapAdmin::from_env();
    let report = seed_defaults(&pool, &admin)
        .await
        .context("Seeding failed")?;

    if report.is_noop() {
        tracing::info!("Database already seeded; nothing to do");
    } else {
        tracing::info!(?report, "Database seeded");
    }
    Ok(())
}
