//! 日志系统初始化
//!
//! 日志写到 stderr，stdout 只输出分析报告，方便重定向 JSON 结果。

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};
use crate::models::config::LoggingConfig;

/// 构建过滤器：`RUST_LOG` 优先，否则使用配置中的级别
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| AppError::logging_error(format!("{}: {}", config.level, e))),
    }
}

/// 初始化全局 tracing subscriber（进程内只能调用一次）
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::logging_error(e.to_string()))
}
