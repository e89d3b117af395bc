//! 通用工具函数模块
//!
//! 提供日志文件内容的编码检测与容错解码。

pub mod encoding;

pub use encoding::*;
