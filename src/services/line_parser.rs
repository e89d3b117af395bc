//! 日志行解析服务
//!
//! 从半结构化日志行中提取五个相互独立的字段：
//! - `[...]` 时间戳
//! - `EVENT: <word>` 事件名
//! - `LATENCY: <digits>ms` 延迟
//! - `STATUS: <word>` / `STATUS: <digits>%` 状态
//! - `ERROR: <rest-of-line>` 错误详情
//!
//! 每条规则都独立扫描整行，一行可以匹配零个、部分或全部字段。

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::models::log_record::LogRecord;

// 使用 Lazy 静态初始化正则表达式，避免重复编译
static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());
// 字段前缀后必须是一个普通空格，单词只允许 ASCII 字母、数字和下划线
static EVENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"EVENT: ([A-Za-z0-9_]+)").unwrap());
static LATENCY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"LATENCY: ([0-9]+)ms").unwrap());
// 百分比分支必须放在前面：交替是 leftmost-first，单词分支会先吞掉 "87"
static STATUS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"STATUS: ([0-9]+%|[A-Za-z0-9_]+)").unwrap());
// (?m) 让 `$` 停在行尾换行符之前
static ERROR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)ERROR: (.+)$").unwrap());

/// 日志行解析器
///
/// 纯函数、全函数：任何输入都返回一条 `LogRecord`，不会失败。
pub struct LineParser;

impl LineParser {
    /// 解析一行日志
    ///
    /// # 示例
    ///
    /// ```
    /// use netlog_analyzer::services::LineParser;
    ///
    /// let record = LineParser::parse("[t1] EVENT: CONNECT LATENCY: 120ms ERROR: timeout");
    /// assert_eq!(record.timestamp.as_deref(), Some("t1"));
    /// assert_eq!(record.event.as_deref(), Some("CONNECT"));
    /// assert_eq!(record.latency_ms, Some(120));
    /// assert_eq!(record.error.as_deref(), Some("timeout"));
    /// ```
    pub fn parse(line: &str) -> LogRecord {
        LogRecord {
            timestamp: Self::parse_timestamp(line),
            event: Self::parse_event(line),
            latency_ms: Self::parse_latency(line),
            status: Self::parse_status(line),
            error: Self::parse_error(line),
        }
    }

    /// 第一个 `[` 与其后第一个 `]` 之间的原始内容
    pub fn parse_timestamp(line: &str) -> Option<String> {
        first_capture(&TIMESTAMP_PATTERN, line).map(str::to_string)
    }

    pub fn parse_event(line: &str) -> Option<String> {
        first_capture(&EVENT_PATTERN, line).map(str::to_string)
    }

    /// 延迟毫秒数
    ///
    /// 只接受 ASCII 数字；超出 u64 的值解析失败时按缺失处理。
    pub fn parse_latency(line: &str) -> Option<u64> {
        let digits = first_capture(&LATENCY_PATTERN, line)?;
        match digits.parse::<u64>() {
            Ok(value) => Some(value),
            Err(e) => {
                trace!(token = %digits, error = %e, "Rejected latency value");
                None
            }
        }
    }

    pub fn parse_status(line: &str) -> Option<String> {
        first_capture(&STATUS_PATTERN, line).map(str::to_string)
    }

    /// `ERROR: ` 之后直到第一个换行符的内容，不裁剪
    pub fn parse_error(line: &str) -> Option<String> {
        first_capture(&ERROR_PATTERN, line).map(str::to_string)
    }
}

/// 解析一行日志（`LineParser::parse` 的便捷入口）
pub fn parse_line(line: &str) -> LogRecord {
    LineParser::parse(line)
}

fn first_capture<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_line() {
        let record = parse_line("[2024-01-01T10:00:00] EVENT: LOGIN STATUS: OK");
        assert_eq!(
            record,
            LogRecord {
                timestamp: Some("2024-01-01T10:00:00".to_string()),
                event: Some("LOGIN".to_string()),
                latency_ms: None,
                status: Some("OK".to_string()),
                error: None,
            }
        );
    }

    #[test]
    fn test_parse_all_fields() {
        let record = parse_line("[t1] EVENT: CONNECT LATENCY: 120ms STATUS: 87% ERROR: timeout");
        assert_eq!(record.timestamp.as_deref(), Some("t1"));
        assert_eq!(record.event.as_deref(), Some("CONNECT"));
        assert_eq!(record.latency_ms, Some(120));
        assert_eq!(record.status.as_deref(), Some("87%"));
        assert_eq!(record.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(parse_line("").is_empty());
        assert!(parse_line("   ").is_empty());
        assert!(parse_line("nothing to see here").is_empty());
    }

    #[test]
    fn test_timestamp_stops_at_first_bracket() {
        assert_eq!(
            LineParser::parse_timestamp("[a] [b] tail").as_deref(),
            Some("a")
        );
        assert_eq!(LineParser::parse_timestamp("x [a]b] y").as_deref(), Some("a"));
        assert_eq!(LineParser::parse_timestamp("[] empty").as_deref(), Some(""));
    }

    #[test]
    fn test_timestamp_requires_closing_bracket() {
        assert_eq!(LineParser::parse_timestamp("[unterminated"), None);
        assert_eq!(LineParser::parse_timestamp("closing only]"), None);
        assert_eq!(LineParser::parse_timestamp("] before ["), None);
    }

    #[test]
    fn test_event_word_characters() {
        assert_eq!(LineParser::parse_event("EVENT: foo123").as_deref(), Some("foo123"));
        assert_eq!(LineParser::parse_event("EVENT: USER_LOGIN-ok").as_deref(), Some("USER_LOGIN"));
        assert_eq!(LineParser::parse_event("EVENT: "), None);
        assert_eq!(LineParser::parse_event("EVENT:LOGIN"), None);
    }

    #[test]
    fn test_event_word_is_ascii_only() {
        assert_eq!(LineParser::parse_event("EVENT: café").as_deref(), Some("caf"));
        assert_eq!(LineParser::parse_event("EVENT: Ωmega"), None);
    }

    #[test]
    fn test_field_prefix_requires_plain_space() {
        assert_eq!(LineParser::parse_event("EVENT:\tLOGIN"), None);
        assert_eq!(LineParser::parse_event("EVENT:\u{a0}LOGIN"), None);
        assert_eq!(LineParser::parse_event("EVENT:\nLOGIN"), None);
        assert_eq!(LineParser::parse_latency("LATENCY:\t5ms"), None);
        assert_eq!(LineParser::parse_status("STATUS:\tOK"), None);
        assert_eq!(LineParser::parse_error("ERROR:\tboom"), None);
    }

    #[test]
    fn test_status_word_is_ascii_only() {
        assert_eq!(LineParser::parse_status("STATUS: état"), None);
        assert_eq!(LineParser::parse_status("STATUS: OKé").as_deref(), Some("OK"));
    }

    #[test]
    fn test_event_is_case_sensitive() {
        assert_eq!(LineParser::parse_event("event: LOGIN"), None);
        assert_eq!(LineParser::parse_event("Event: LOGIN"), None);
    }

    #[test]
    fn test_event_first_occurrence_wins() {
        assert_eq!(
            LineParser::parse_event("EVENT: FIRST EVENT: SECOND").as_deref(),
            Some("FIRST")
        );
    }

    #[test]
    fn test_latency_is_integer() {
        assert_eq!(LineParser::parse_latency("LATENCY: 42ms"), Some(42));
        assert_eq!(LineParser::parse_latency("LATENCY: 0ms"), Some(0));
        assert_eq!(LineParser::parse_latency("LATENCY: 007ms"), Some(7));
    }

    #[test]
    fn test_latency_requires_ms_unit() {
        assert_eq!(LineParser::parse_latency("LATENCY: 42s"), None);
        assert_eq!(LineParser::parse_latency("LATENCY: 42"), None);
        assert_eq!(LineParser::parse_latency("LATENCY: -42ms"), None);
        assert_eq!(LineParser::parse_latency("LATENCY: 4.2ms"), None);
    }

    #[test]
    fn test_latency_overflow_is_absent() {
        let line = format!("LATENCY: {}ms", "9".repeat(40));
        assert_eq!(LineParser::parse_latency(&line), None);
    }

    #[test]
    fn test_latency_non_ascii_digits_are_absent() {
        assert_eq!(LineParser::parse_latency("LATENCY: ٤٢ms"), None);
        assert_eq!(LineParser::parse_latency("LATENCY: ４２ms"), None);
    }

    #[test]
    fn test_status_word_and_percent() {
        assert_eq!(LineParser::parse_status("STATUS: OK").as_deref(), Some("OK"));
        assert_eq!(LineParser::parse_status("STATUS: 87%").as_deref(), Some("87%"));
        assert_eq!(
            LineParser::parse_status("STATUS: 50% extra").as_deref(),
            Some("50%")
        );
        assert_eq!(LineParser::parse_status("STATUS: 200").as_deref(), Some("200"));
        assert_eq!(LineParser::parse_status("STATUS: %"), None);
    }

    #[test]
    fn test_error_captures_rest_of_line() {
        assert_eq!(
            LineParser::parse_error("ERROR: disk full").as_deref(),
            Some("disk full")
        );
        assert_eq!(
            LineParser::parse_error("[t] ERROR: disk full  ").as_deref(),
            Some("disk full  ")
        );
        assert_eq!(
            LineParser::parse_error("ERROR: a STATUS: OK").as_deref(),
            Some("a STATUS: OK")
        );
    }

    #[test]
    fn test_error_ignores_trailing_newline() {
        assert_eq!(
            LineParser::parse_error("ERROR: timeout\n").as_deref(),
            Some("timeout")
        );
        assert_eq!(
            LineParser::parse_error("ERROR: timeout\r\n").as_deref(),
            Some("timeout\r")
        );
    }

    #[test]
    fn test_error_stops_at_embedded_newline() {
        assert_eq!(LineParser::parse_error("ERROR: a\nb").as_deref(), Some("a"));
    }

    #[test]
    fn test_error_with_empty_remainder_is_absent() {
        assert_eq!(LineParser::parse_error("ERROR: "), None);
        assert_eq!(LineParser::parse_error("ERROR: \n"), None);
    }

    #[test]
    fn test_trailing_newline_does_not_affect_fields() {
        let with_newline = parse_line("[t1] EVENT: PING LATENCY: 5ms STATUS: OK\n");
        let without = parse_line("[t1] EVENT: PING LATENCY: 5ms STATUS: OK");
        assert_eq!(with_newline, without);
    }

    #[test]
    fn test_fields_match_independently_of_order() {
        let record = parse_line("ERROR: boom STATUS: DOWN EVENT: CRASH [late]");
        assert_eq!(record.timestamp.as_deref(), Some("late"));
        assert_eq!(record.event.as_deref(), Some("CRASH"));
        assert_eq!(record.status.as_deref(), Some("DOWN"));
        assert_eq!(record.error.as_deref(), Some("boom STATUS: DOWN EVENT: CRASH [late]"));
    }
}
