//! 字符编码转换工具
//!
//! 日志文件不保证是 UTF-8（网络设备、Windows 主机导出的日志经常是 GBK 或 Windows-1252），
//! 读取时按三层容错策略解码，保证解析阶段总能拿到文本。

use std::fmt;

/// 无效字节占比超过该阈值时放弃 lossy 结果，改用回退编码
const LOSSY_INVALID_RATIO: f64 = 0.3;

/// 实际使用的解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedEncoding {
    Utf8,
    Utf8Lossy,
    Gbk,
    Windows1252,
}

impl DetectedEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedEncoding::Utf8 => "UTF-8",
            DetectedEncoding::Utf8Lossy => "UTF-8-Lossy",
            DetectedEncoding::Gbk => "GBK",
            DetectedEncoding::Windows1252 => "Windows-1252",
        }
    }

    /// 是否使用了非 UTF-8 的回退编码
    pub fn is_fallback(&self) -> bool {
        matches!(self, DetectedEncoding::Gbk | DetectedEncoding::Windows1252)
    }
}

impl fmt::Display for DetectedEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 解码结果
#[derive(Debug, Clone)]
pub struct DecodedLog {
    pub text: String,
    pub encoding: DetectedEncoding,
    /// 原始字节是否包含无效的 UTF-8 序列
    pub had_errors: bool,
}

/// 解码日志文件内容（三层容错策略）
///
/// 1. **UTF-8 快速路径**：encoding_rs SIMD 校验
/// 2. **Lossy 转换**：无效字节替换为 `\u{FFFD}`，占比不超过 30% 时采用
/// 3. **多编码回退**：GBK → Windows-1252
///
/// # 示例
///
/// ```
/// use netlog_analyzer::utils::encoding::{decode_log_bytes, DetectedEncoding};
///
/// let decoded = decode_log_bytes(b"[t1] EVENT: PING");
/// assert_eq!(decoded.encoding, DetectedEncoding::Utf8);
/// assert_eq!(decoded.text, "[t1] EVENT: PING");
/// ```
pub fn decode_log_bytes(bytes: &[u8]) -> DecodedLog {
    use encoding_rs::{GBK, UTF_8, WINDOWS_1252};

    // 第1层：UTF-8 快速路径
    let (cow, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors && !cow.contains('\u{FFFD}') {
        return DecodedLog {
            text: cow.into_owned(),
            encoding: DetectedEncoding::Utf8,
            had_errors: false,
        };
    }

    // 第2层：Lossy 转换
    let lossy = String::from_utf8_lossy(bytes);
    let replacement_count = lossy.chars().filter(|&c| c == '\u{FFFD}').count();
    let invalid_ratio = replacement_count as f64 / lossy.chars().count().max(1) as f64;

    if invalid_ratio <= LOSSY_INVALID_RATIO {
        return DecodedLog {
            text: lossy.into_owned(),
            encoding: DetectedEncoding::Utf8Lossy,
            had_errors: true,
        };
    }

    // 第3层：GBK 回退
    let (cow_gbk, _, had_errors_gbk) = GBK.decode(bytes);
    if !had_errors_gbk {
        return DecodedLog {
            text: cow_gbk.into_owned(),
            encoding: DetectedEncoding::Gbk,
            had_errors: true,
        };
    }

    // Windows-1252 可以解码任意字节
    let (cow_win, _, _) = WINDOWS_1252.decode(bytes);
    DecodedLog {
        text: cow_win.into_owned(),
        encoding: DetectedEncoding::Windows1252,
        had_errors: true,
    }
}
