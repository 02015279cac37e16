//! NovelHub - 小说阅读平台 REST 后端
//!
//! 启动流程：配置 → 日志 → 数据库与迁移 → 仓储 → HTTP 服务

use std::sync::Arc;

use novelhub::config::{load_config, print_config};
use novelhub::infrastructure::http::{AppState, HttpServer};
use novelhub::infrastructure::memory::InMemoryNoteStore;
use novelhub::infrastructure::persistence::sqlite::{
    open_database, SqliteFollowRepository, SqliteNovelRepository, SqliteTaxonomyRepository,
    SqliteUserRepository,
};
use novelhub::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：平铺环境变量 > NOVELHUB_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("NovelHub - novel reading backend");
    print_config(&config);

    if config.database.auth_token.is_some() {
        tracing::warn!("DATABASE_AUTH_TOKEN is set but unused by the SQLite backend");
    }

    // 初始化数据库（含数据目录与迁移）
    let pool = open_database(&config.database).await?;

    // 创建 Repository 适配器
    let novel_repo = Arc::new(SqliteNovelRepository::new(pool.clone()));
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let taxonomy_repo = Arc::new(SqliteTaxonomyRepository::new(pool.clone()));
    let follow_repo = Arc::new(SqliteFollowRepository::new(pool));

    // 笔记演示存储，随进程重启清空
    let note_store = InMemoryNoteStore::with_welcome_note().arc();

    let state = AppState::new(
        config.server.environment,
        novel_repo,
        user_repo,
        taxonomy_repo,
        follow_repo,
        note_store,
    );

    let server = HttpServer::new(config.server.clone(), config.cors.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
