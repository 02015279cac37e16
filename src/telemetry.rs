//! 日志初始化

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// 初始化全局 tracing subscriber
///
/// `RUST_LOG` 优先，否则使用配置中的级别
pub fn init_tracing(log: &LogConfig) {
    let fallback = format!("{},novelhub={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
