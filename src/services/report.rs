//! 分析结果展示
//!
//! 把 `AnalysisSummary` 渲染为终端文本或 JSON。

use std::fmt;

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::log_record::LogRecord;
use crate::models::summary::AnalysisSummary;

/// 缺失字段的占位文本
const ABSENT: &str = "None";

/// 按指定格式渲染汇总结果
pub fn render(summary: &AnalysisSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(TextReport(summary).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// 终端文本报告
///
/// 事件计数按次数降序输出，顺序不属于契约。
pub struct TextReport<'a>(pub &'a AnalysisSummary);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(f, "Log Analysis Results:")?;
        writeln!(f, "Total Logs: {}", summary.total_logs)?;

        writeln!(f)?;
        writeln!(f, "Event Counts:")?;
        for (event, count) in summary.sorted_event_counts() {
            writeln!(f, "  {}: {}", event, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Errors:")?;
        if summary.error_records.is_empty() {
            writeln!(f, "  No errors found.")?;
        } else {
            for record in &summary.error_records {
                write_error_line(f, record)?;
            }
        }

        Ok(())
    }
}

fn write_error_line(f: &mut fmt::Formatter<'_>, record: &LogRecord) -> fmt::Result {
    writeln!(
        f,
        "  Timestamp: {}, Event: {}, Error: {}",
        record.timestamp.as_deref().unwrap_or(ABSENT),
        record.event.as_deref().unwrap_or(ABSENT),
        record.error.as_deref().unwrap_or(ABSENT),
    )
}
