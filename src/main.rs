//! 网络日志分析器 - 主入口
//!
//! 负责：
//! - 解析命令行参数并加载配置
//! - 初始化日志系统
//! - 读取日志文件、聚合、输出报告

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use netlog_analyzer::infrastructure::config::{AppConfigLoader, ConfigOverrides};
use netlog_analyzer::infrastructure::logging::init_tracing;
use netlog_analyzer::models::OutputFormat;
use netlog_analyzer::services::{aggregate, read_log_file, render};
use netlog_analyzer::AppError;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "netlog-analyzer",
    version,
    about = "Extract fields from network logs and summarize events and errors"
)]
struct Cli {
    /// Log file to analyze (defaults to the configured input path)
    path: Option<PathBuf>,

    /// Config file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Log level filter, overridden by RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let loader = AppConfigLoader::load(cli.config)
        .and_then(|loader| {
            loader.with_overrides(ConfigOverrides {
                input_path: cli.path.map(|p| p.to_string_lossy().into_owned()),
                format: cli.format,
                log_level: cli.log_level,
            })
        })
        .map_err(AppError::from)?;
    let config_source = loader
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let config = loader.into_config();

    init_tracing(&config.logging)?;

    info!(
        config = %config_source,
        "Network Log Analyzer v{} - analyzing {}",
        env!("CARGO_PKG_VERSION"),
        config.input_path
    );

    let lines = read_log_file(Path::new(&config.input_path))?;
    let summary = aggregate(&lines);

    info!(
        total_logs = summary.total_logs,
        errors = summary.error_count(),
        "Analysis complete"
    );

    let report = render(&summary, config.output.format)?;
    io::stdout()
        .lock()
        .write_all(report.as_bytes())
        .map_err(AppError::from)?;
    Ok(())
}
