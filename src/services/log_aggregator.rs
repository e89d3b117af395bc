//! 日志聚合服务
//!
//! 对行序列做一次顺序 fold：逐行解析，累加总数、事件计数，并按输入顺序收集错误记录。

use tracing::debug;

use crate::models::summary::AnalysisSummary;
use crate::services::line_parser::LineParser;

/// 日志聚合器
pub struct LogAggregator;

impl LogAggregator {
    /// 聚合一组日志行
    ///
    /// # Arguments
    ///
    /// * `lines` - 日志行序列（行尾换行符可有可无）
    ///
    /// # Returns
    ///
    /// 本次运行的 `AnalysisSummary`
    ///
    /// # 说明
    ///
    /// - 每一行都计入 `total_logs`，包括空行和无法识别的行
    /// - 不提前终止、不重排、不去重
    pub fn aggregate<I, S>(lines: I) -> AnalysisSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (summary, unrecognized) = lines.into_iter().fold(
            (AnalysisSummary::new(), 0usize),
            |(mut summary, unrecognized), line| {
                let record = LineParser::parse(line.as_ref());
                let unrecognized = unrecognized + usize::from(record.is_empty());
                summary.record(record);
                (summary, unrecognized)
            },
        );

        debug!(
            total_logs = summary.total_logs,
            distinct_events = summary.event_counts.len(),
            errors = summary.error_count(),
            unrecognized,
            "Aggregated log lines"
        );

        summary
    }
}

/// 聚合日志行（`LogAggregator::aggregate` 的便捷入口）
pub fn aggregate<I, S>(lines: I) -> AnalysisSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LogAggregator::aggregate(lines)
}
