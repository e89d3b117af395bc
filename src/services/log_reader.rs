//! 日志文件读取服务
//!
//! 一次性把整个日志文件读入内存并拆分为行，供聚合器做单次遍历。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::utils::encoding::decode_log_bytes;

/// 读取日志文件并按行拆分
///
/// # Arguments
///
/// * `path` - 日志文件路径
///
/// # Returns
///
/// 去掉行尾换行符（`\n` / `\r\n` / `\r`）后的行列表；空文件返回空列表
///
/// # Errors
///
/// - 文件不存在或无权限：返回带路径的 `AppError::IoDetailed`，调用方不应再进入解析阶段
///
/// # 特性
///
/// - **编码容错**：非 UTF-8 内容按 `decode_log_bytes` 的回退策略解码
/// - **资源安全**：使用作用域确保文件句柄正确关闭
pub fn read_log_file(path: &Path) -> Result<Vec<String>> {
    let bytes = {
        let file = File::open(path).map_err(|e| {
            AppError::io_error(
                format!("Failed to open log file {}: {}", path.display(), e),
                Some(path.to_path_buf()),
            )
        })?;

        // 64KB 缓冲区，大文件读取更高效
        let mut reader = BufReader::with_capacity(65536, file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| {
            AppError::io_error(
                format!("Failed to read log file {}: {}", path.display(), e),
                Some(path.to_path_buf()),
            )
        })?;
        bytes
    }; // 文件句柄在此关闭

    let decoded = decode_log_bytes(&bytes);
    if decoded.encoding.is_fallback() {
        warn!(
            file = %path.display(),
            encoding = %decoded.encoding,
            "Log file is not valid UTF-8, decoded with fallback encoding"
        );
    } else if decoded.had_errors {
        warn!(
            file = %path.display(),
            "Log file contains invalid UTF-8 sequences, replaced with U+FFFD"
        );
    }

    let lines = split_lines(&decoded.text);

    debug!(
        file = %path.display(),
        bytes = bytes.len(),
        lines_read = lines.len(),
        encoding = %decoded.encoding,
        "Read log file"
    );

    Ok(lines)
}

/// 按行拆分文本
///
/// `\n`、`\r\n` 和单独的 `\r` 都视为行结束符；末尾的结束符不会产生额外的空行。
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}
