//! 网络日志分析器
//!
//! 从半结构化日志行中提取时间戳、事件、延迟、状态和错误字段，
//! 并对整份日志做一次顺序聚合：总行数、事件计数、错误记录。
//!
//! ```
//! use netlog_analyzer::aggregate;
//!
//! let summary = aggregate([
//!     "[2024-01-01T10:00:00] EVENT: LOGIN STATUS: OK",
//!     "[2024-01-01T10:00:05] EVENT: CONNECT LATENCY: 120ms ERROR: timeout",
//! ]);
//! assert_eq!(summary.total_logs, 2);
//! assert_eq!(summary.event_counts["LOGIN"], 1);
//! assert_eq!(summary.error_records.len(), 1);
//! ```

pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
pub mod proptest_strategies;

pub use error::{AppError, Result};
pub use models::{AnalysisSummary, AppConfig, LogRecord, OutputFormat};
pub use services::{aggregate, parse_line, read_log_file, render, LineParser, LogAggregator};
