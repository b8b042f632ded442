//! # 工具函数模块
//!
//! 提供美化输出、进度条和能量曲线绘图。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, plot, progress

pub mod output;
pub mod plot;
pub mod progress;
