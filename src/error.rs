//! # 统一错误处理模块
//!
//! 定义 vasptraj 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意：核心解析器 (`OutcarReader::parse`) 与 `export_poscar` 按容错约定
//! 不返回错误；这里的错误类型只用于它们的严格版本和 CLI 层。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// vasptraj 统一错误类型
#[derive(Error, Debug)]
pub enum VasptrajError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析结果错误
    // ─────────────────────────────────────────────────────────────
    #[error("No ionic steps could be reconstructed from: {path}")]
    NoStates { path: String },

    #[error("Step {index} is out of range (file has {count} states)")]
    StateOutOfRange { index: usize, count: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot error: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, VasptrajError>;
