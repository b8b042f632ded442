//! # export 子命令 CLI 定义
//!
//! 将 OUTCAR 中的离子步导出为 POSCAR（分数坐标）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::Args;
use std::path::PathBuf;

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the OUTCAR file
    pub outcar: PathBuf,

    /// 1-based ionic step to export (default: last step)
    #[arg(short, long, conflicts_with = "all")]
    pub step: Option<usize>,

    /// Export every ionic step into the output directory as POSCAR_<step>
    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    /// Output POSCAR file (or directory with --all)
    #[arg(short, long, default_value = "POSCAR")]
    pub output: PathBuf,

    /// Comment line written at the top of the POSCAR
    #[arg(short, long)]
    pub label: Option<String>,

    /// Reserved for the extended POSCAR layout
    #[arg(long, default_value_t = false)]
    pub extended: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
