//! 分析汇总结构
//!
//! 一次运行产生一个 `AnalysisSummary`，运行结束后即丢弃。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::log_record::LogRecord;

/// 日志分析汇总
///
/// 不变量：
/// - `total_logs` 等于处理过的行数
/// - `event_counts` 各值之和等于带 `event` 的记录数
/// - `error_records` 按输入行顺序保存所有带 `error` 的记录
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub total_logs: usize,
    pub event_counts: HashMap<String, usize>,
    pub error_records: Vec<LogRecord>,
}

impl AnalysisSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加一条记录（fold 的单步）
    pub fn record(&mut self, record: LogRecord) {
        self.total_logs += 1;

        if let Some(event) = &record.event {
            *self.event_counts.entry(event.clone()).or_insert(0) += 1;
        }

        if record.has_error() {
            self.error_records.push(record);
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_records.len()
    }

    /// 带 `event` 字段的记录总数
    pub fn event_total(&self) -> usize {
        self.event_counts.values().sum()
    }

    /// 按次数降序、同次数按名称升序排列的事件统计（用于稳定输出）
    pub fn sorted_event_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .event_counts
            .iter()
            .map(|(event, count)| (event.as_str(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }
}
