//! 配置管理基础设施层
//!
//! 配置按以下优先级叠加（后者覆盖前者）：
//! - 内置默认值 (`AppConfig::default`)
//! - 可选配置文件（TOML / JSON，按扩展名识别）
//! - `NETLOG_` 前缀的环境变量，层级用 `__` 分隔，如 `NETLOG_OUTPUT__FORMAT=json`
//!
//! 命令行参数的覆盖在 `main.rs` 中完成。

use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::models::config::{AppConfig, OutputFormat};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "NETLOG";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置验证失败: {0}")]
    Validation(String),

    #[error("配置文件不存在: {0}")]
    FileNotFound(PathBuf),

    #[error("配置文件格式错误: {0}")]
    FormatError(String),

    #[error("配置值无效: {0}")]
    InvalidValue(String),
}

/// 命令行覆盖项（`None` 表示不覆盖）
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input_path: Option<String>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

/// 配置加载器
#[derive(Debug, Clone)]
pub struct AppConfigLoader {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl AppConfigLoader {
    /// 从可选配置文件和进程环境变量加载配置
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// 同 `load`，但可以注入环境变量表（`None` 表示读取进程环境）
    pub fn load_with_env(
        path: Option<PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| ConfigError::FormatError(e.to_string()))?;

        config
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        debug!(
            source = ?path,
            input_path = %config.input_path,
            format = %config.output.format,
            "Configuration loaded"
        );

        Ok(Self {
            config,
            source: path,
        })
    }

    /// 应用命令行覆盖并重新校验
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(input_path) = overrides.input_path {
            self.config.input_path = input_path;
        }
        if let Some(format) = overrides.format {
            self.config.output.format = format;
        }
        if let Some(level) = overrides.log_level {
            self.config.logging.level = level;
        }

        self.config
            .validate()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        Ok(self)
    }

    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// 配置文件路径（仅使用默认值和环境变量时为 `None`）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
