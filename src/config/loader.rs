//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 平铺环境变量（`PORT`、`DATABASE_URL` 等）
//! 2. 前缀环境变量（`NOVELHUB_SECTION__KEY`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 平铺环境变量到配置键的映射，同一键的多个变量名按顺序取第一个存在的
const FLAT_ENV_KEYS: &[(&[&str], &str)] = &[
    (&["HOST"], "server.host"),
    (&["PORT"], "server.port"),
    (&["NODE_ENV", "APP_ENV"], "server.environment"),
    (&["CORS_ORIGIN"], "cors.origin"),
    (&["DATABASE_URL"], "database.url"),
    (&["DATABASE_AUTH_TOKEN"], "database.auth_token"),
    (&["JWT_SECRET"], "security.jwt_secret"),
    (&["BCRYPT_ROUNDS"], "security.bcrypt_rounds"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `NODE_ENV=production`
/// - `DATABASE_URL=file:./local.db`
/// - `NOVELHUB_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(config_path, |name| std::env::var(name).ok())
}

/// 使用自定义的平铺变量来源加载配置
pub fn load_config_with<F>(config_path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "localhost")?
        .set_default("server.port", 6969)?
        .set_default("server.environment", "development")?
        .set_default("cors.origin", "*")?
        .set_default("cors.credentials", false)?
        .set_default("database.url", "sqlite:data/novelhub.db?mode=rwc")?
        .set_default("database.max_connections", 5)?
        .set_default("security.bcrypt_rounds", 12)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，例如 NOVELHUB_DATABASE__MAX_CONNECTIONS=10
    builder = builder.add_source(
        Environment::with_prefix("NOVELHUB")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 平铺环境变量
    for (names, key) in FLAT_ENV_KEYS {
        let value = names.iter().find_map(|name| lookup(name));
        builder = builder.set_override_option(*key, value)?;
    }

    // 只有字面量 "true" 开启凭据，其余取值一律为 false
    let credentials = lookup("CORS_CREDENTIALS").map(|v| v == "true");
    builder = builder.set_override_option("cors.credentials", credentials)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Database URL cannot be empty".to_string(),
        ));
    }

    if config.security.bcrypt_rounds == 0 {
        return Err(ConfigError::ValidationError(
            "BCRYPT_ROUNDS must be a positive number".to_string(),
        ));
    }

    let has_secret = config
        .security
        .jwt_secret
        .as_deref()
        .is_some_and(|s| !s.is_empty());
    if config.server.environment.is_production() && !has_secret {
        return Err(ConfigError::ValidationError(
            "JWT_SECRET is required in production".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    let redact = |value: &Option<String>| if value.is_some() { "<set>" } else { "<unset>" };

    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Environment: {}", config.server.environment.as_str());
    tracing::info!(
        "CORS: origin={} credentials={}",
        config.cors.origin,
        config.cors.credentials
    );
    tracing::info!("Database: {}", config.database.database_url());
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Database Auth Token: {}", redact(&config.database.auth_token));
    tracing::info!("JWT Secret: {}", redact(&config.security.jwt_secret));
    tracing::info!("Bcrypt Rounds: {}", config.security.bcrypt_rounds);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::RuntimeEnvironment;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_url() {
        let mut config = AppConfig::default();
        config.database.url = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_bcrypt_rounds() {
        let mut config = AppConfig::default();
        config.security.bcrypt_rounds = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_production_requires_jwt_secret() {
        let mut config = AppConfig::default();
        config.server.environment = RuntimeEnvironment::Production;
        assert!(validate_config(&config).is_err());

        config.security.jwt_secret = Some("s3cret".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[server]
port = 8080

[log]
level = "debug"
"#,
        );

        let config = load_config_with(Some(file.path()), lookup_from(&[])).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_flat_env_overrides_file() {
        let file = write_config("[server]\nport = 8080\n");

        let config = load_config_with(
            Some(file.path()),
            lookup_from(&[
                ("PORT", "9000"),
                ("DATABASE_URL", "file:./local.db"),
                ("CORS_ORIGIN", "https://example.com"),
                ("CORS_CREDENTIALS", "true"),
                ("BCRYPT_ROUNDS", "10"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.database_url(), "sqlite:./local.db?mode=rwc");
        assert_eq!(config.cors.origin, "https://example.com");
        assert!(config.cors.credentials);
        assert_eq!(config.security.bcrypt_rounds, 10);
    }

    #[test]
    fn test_production_without_secret_fails_to_load() {
        let file = write_config("");

        let result = load_config_with(
            Some(file.path()),
            lookup_from(&[("NODE_ENV", "production")]),
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let config = load_config_with(
            Some(file.path()),
            lookup_from(&[("NODE_ENV", "production"), ("JWT_SECRET", "abc")]),
        )
        .unwrap();
        assert!(config.server.environment.is_production());
    }

    #[test]
    fn test_app_env_is_fallback_for_node_env() {
        let file = write_config("");

        let config =
            load_config_with(Some(file.path()), lookup_from(&[("APP_ENV", "test")])).unwrap();
        assert_eq!(config.server.environment, RuntimeEnvironment::Test);

        let config = load_config_with(
            Some(file.path()),
            lookup_from(&[("NODE_ENV", "test"), ("APP_ENV", "production")]),
        )
        .unwrap();
        assert_eq!(config.server.environment, RuntimeEnvironment::Test);
    }

    #[test]
    fn test_cors_credentials_only_literal_true() {
        let file = write_config("[cors]\ncredentials = true\n");

        for raw in ["1", "yes", "TRUE", "garbage", "false"] {
            let config = load_config_with(
                Some(file.path()),
                lookup_from(&[("CORS_CREDENTIALS", raw)]),
            )
            .unwrap();
            assert!(!config.cors.credentials, "{raw}");
        }

        let config = load_config_with(
            Some(file.path()),
            lookup_from(&[("CORS_CREDENTIALS", "true")]),
        )
        .unwrap();
        assert!(config.cors.credentials);

        let config = load_config_with(Some(file.path()), lookup_from(&[])).unwrap();
        assert!(config.cors.credentials);
    }
}
