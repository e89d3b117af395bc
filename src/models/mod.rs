pub mod config;
pub mod log_record;
pub mod summary;

// 重新导出核心类型
pub use config::{AppConfig, LoggingConfig, OutputConfig, OutputFormat};
pub use log_record::LogRecord;
pub use summary::AnalysisSummary;
