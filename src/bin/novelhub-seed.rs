//! 写入默认分类、标签与管理员账号，可重复执行

use novelhub::config::load_config;
use novelhub::infrastructure::persistence::sqlite::{
    open_database, seed_defaults, SqliteTaxonomyRepository, SqliteUserRepository,
};
use novelhub::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    init_tracing(&config.log);

    let pool = open_database(&config.database).await?;

    tracing::info!("Seeding database");
    let taxonomy = SqliteTaxonomyRepository::new(pool.clone());
    let users = SqliteUserRepository::new(pool.clone());
    let report = seed_defaults(&taxonomy, &users).await?;

    tracing::info!(
        categories_added = report.categories_added,
        tags_added = report.tags_added,
        admin_created = report.admin_created,
        "Seeding completed"
    );

    pool.close().await;
    Ok(())
}
