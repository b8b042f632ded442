//! # vasptraj - VASP OUTCAR 离子步重建
//!
//! 从 VASP OUTCAR 日志中重建每个离子步（优化步）的结构，并可将任一离子步
//! 导出为 POSCAR。
//!
//! ## 用法
//! ```no_run
//! use std::path::Path;
//! use vasptraj::parsers::{export_poscar, OutcarReader};
//!
//! let mut reader = OutcarReader::new();
//! let summary = reader.parse(Path::new("OUTCAR"));
//! println!("{} steps, elements {:?}", summary.state_count, summary.elements);
//!
//! if let Some(last) = reader.states().last() {
//!     export_poscar(last, Path::new("POSCAR"), "final step", false);
//! }
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (OUTCAR 解析, POSCAR 导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、绘图)
//!   └── error.rs    (错误处理)
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;

pub use error::{Result, VasptrajError};
pub use models::{Atom, Lattice, Species, State};
pub use parsers::{OutcarReader, ParseSummary};
