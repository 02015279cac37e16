//! SQLite Database - 数据库连接池

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use super::schema::run_migrations;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// sqlx 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/novelhub.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
        }
    }

    /// 单连接内存数据库，用于测试
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 每个连接都启用外键约束并设置 busy_timeout=5000ms
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        // 内存数据库随最后一个连接关闭而消失
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        // WAL 模式允许并发读写
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created with foreign keys and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 按应用配置打开数据库：创建数据目录、连接池并执行迁移
pub async fn open_database(config: &crate::config::DatabaseConfig) -> anyhow::Result<DbPool> {
    if let Some(parent) = config.file_path().as_deref().and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let db_config = DatabaseConfig::new(config.database_url(), config.max_connections);
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
