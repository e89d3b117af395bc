//! 基础设施层 - 技术实现
//!
//! 提供配置加载和日志系统初始化

pub mod config;
pub mod logging;
