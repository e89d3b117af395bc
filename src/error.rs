use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::config::ConfigError;

/**
 * 应用错误类型 - 使用 miette 提供用户友好的错误诊断
 *
 * 日志行解析本身永远不会失败，这里只覆盖外围协作者：
 * 文件读取、配置加载、报告序列化和日志系统初始化。
 */
#[derive(Error, Debug, Diagnostic)]
pub enum AppError {
    #[error("IO error: {0}")]
    #[diagnostic(code(netlog::io_error))]
    Io(#[from] std::io::Error),

    #[error("IO error: {message}")]
    #[diagnostic(
        code(netlog::io_error_detailed),
        help("Ensure the log file exists and is readable")
    )]
    IoDetailed {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(netlog::config_error),
        help("Check the config file and NETLOG_* environment variables")
    )]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(netlog::serialization_error))]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    #[diagnostic(
        code(netlog::logging_error),
        help("Use a valid filter such as `info` or `netlog_analyzer=debug`")
    )]
    Logging(String),
}

impl AppError {
    /**
     * 创建详细的IO错误
     */
    pub fn io_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        AppError::IoDetailed {
            message: message.into(),
            path,
        }
    }

    /**
     * 创建日志系统错误
     */
    pub fn logging_error(message: impl Into<String>) -> Self {
        AppError::Logging(message.into())
    }

    /**
     * 错误关联的文件路径（如果有）
     */
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            AppError::IoDetailed { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

/**
 * 统一结果类型
 */
pub type Result<T> = std::result::Result<T, AppError>;
