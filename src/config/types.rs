//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 安全配置
    #[serde(default)]
    pub security: SecurityConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 运行环境
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Production,
    Test,
}

impl RuntimeEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnvironment::Development => "development",
            RuntimeEnvironment::Production => "production",
            RuntimeEnvironment::Test => "test",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeEnvironment::Production)
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 运行环境
    #[serde(default)]
    pub environment: RuntimeEnvironment,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6969
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: RuntimeEnvironment::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 跨域配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 允许的来源，`*` 表示任意来源
    #[serde(default = "default_cors_origin")]
    pub origin: String,

    /// 是否允许携带凭证
    #[serde(default)]
    pub credentials: bool,
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: default_cors_origin(),
            credentials: false,
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库 URL，同时接受 `sqlite:` 与 `file:` 形式
    #[serde(default = "default_db_url")]
    pub url: String,

    /// 远程数据库的访问令牌（本地 SQLite 不使用）
    #[serde(default)]
    pub auth_token: Option<String>,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_url() -> String {
    "sqlite:data/novelhub.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            auth_token: None,
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// 获取 sqlx 可识别的数据库 URL
    ///
    /// `file:./local.db` 会被改写为 `sqlite:./local.db?mode=rwc`
    pub fn database_url(&self) -> String {
        match self.url.strip_prefix("file:") {
            Some(rest) if rest.contains('?') => format!("sqlite:{}", rest),
            Some(rest) => format!("sqlite:{}?mode=rwc", rest),
            None => self.url.clone(),
        }
    }

    /// 数据库文件路径，内存数据库返回 None
    pub fn file_path(&self) -> Option<PathBuf> {
        let url = self.database_url();
        let rest = url.strip_prefix("sqlite:")?;
        let rest = rest.trim_start_matches("//");
        let path = rest.split('?').next().unwrap_or_default();
        if path.is_empty() || path == ":memory:" {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

/// 安全配置
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// JWT 签名密钥，生产环境必填
    #[serde(default)]
    pub jwt_secret: Option<String>,

    /// 密码哈希轮数
    #[serde(default = "default_bcrypt_rounds")]
    pub bcrypt_rounds: u32,
}

fn default_bcrypt_rounds() -> u32 {
    12
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            bcrypt_rounds: default_bcrypt_rounds(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 6969);
        assert_eq!(config.server.environment, RuntimeEnvironment::Development);
        assert_eq!(config.cors.origin, "*");
        assert!(!config.cors.credentials);
        assert_eq!(config.security.bcrypt_rounds, 12);
        assert!(config.security.jwt_secret.is_none());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "localhost:6969");
    }

    #[test]
    fn test_database_url_passthrough() {
        let config = DatabaseConfig::default();
        assert_eq!(config.database_url(), "sqlite:data/novelhub.db?mode=rwc");
        assert_eq!(config.file_path(), Some(PathBuf::from("data/novelhub.db")));
    }

    #[test]
    fn test_file_url_is_rewritten() {
        let config = DatabaseConfig {
            url: "file:./local.db".to_string(),
            ..Default::default()
        };
        assert_eq!(config.database_url(), "sqlite:./local.db?mode=rwc");
        assert_eq!(config.file_path(), Some(PathBuf::from("./local.db")));
    }

    #[test]
    fn test_memory_database_has_no_file() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        };
        assert_eq!(config.file_path(), None);
    }
}
