//! 配置相关数据结构
//!
//! 本模块定义了输入路径、输出格式和日志系统的配置结构。
//! 加载与校验逻辑见 `infrastructure::config`。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// 默认日志文件路径
pub const DEFAULT_INPUT_PATH: &str = "networks_logs.txt";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 应用配置
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// 待分析的日志文件
    #[validate(length(min = 1, message = "input_path must not be empty"))]
    pub input_path: String,

    #[validate(nested)]
    pub output: OutputConfig,

    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// 输出配置
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// 日志系统配置
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// 默认过滤级别（`RUST_LOG` 优先）
    #[validate(custom(function = "validate_log_level"))]
    pub level: String,

    /// 终端彩色输出
    pub ansi: bool,
}

/// 报告输出格式
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
