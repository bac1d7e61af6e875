//! `storelens db` subcommands.

use storelens_core::AppConfig;

pub(crate) async fn run_ping(config: &AppConfig) -> anyhow::Result<()> {
    let pool = storelens_db::connect_pool_from_config(config).await?;
    storelens_db::health_check(&pool).await?;
    println!("database ok");
    Ok(())
}

pub(crate) async fn run_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = storelens_db::connect_pool_from_config(config).await?;
    let applied = storelens_db::run_migrations(&pool).await?;
    tracing::info!(applied, "migrations complete");
    println!("applied {applied} migration(s)");
    Ok(())
}
