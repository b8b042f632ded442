//! # 解析器模块
//!
//! OUTCAR 离子步解析与 POSCAR 导出。
//!
//! ## 数据流
//! ```text
//! LineScanner ─► OutcarReader (patterns 逐阶段匹配) ─► Vec<State>
//!                                                        │
//!                                 poscar::fractional_coordinates ─► POSCAR
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: scanner, patterns, outcar, poscar

pub mod outcar;
pub mod patterns;
pub mod poscar;
pub mod scanner;

pub use outcar::{EmissionStrategy, OutcarReader, ParseSummary, Phase, PhaseSet};
pub use poscar::{export_poscar, fractional_coordinates, write_poscar, PoscarOptions};
