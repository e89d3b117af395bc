use serde::{Deserialize, Serialize};

/// 单行日志解析结果
///
/// 每个字段相互独立，缺失时为 `None`，与"存在但为空字符串"区分开。
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LogRecord {
    /// `[...]` 中的原始内容（不做时间格式校验）
    pub timestamp: Option<String>,
    /// `EVENT: <word>` 中的事件名
    pub event: Option<String>,
    /// `LATENCY: <digits>ms` 中的毫秒数
    pub latency_ms: Option<u64>,
    /// `STATUS: <word>` 或 `STATUS: <digits>%`
    pub status: Option<String>,
    /// `ERROR: ` 之后到行尾的全部内容（不裁剪空白）
    pub error: Option<String>,
}

impl LogRecord {
    /// 所有字段都缺失（空行或无法识别的行）
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none()
            && self.event.is_none()
            && self.latency_ms.is_none()
            && self.status.is_none()
            && self.error.is_none()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
