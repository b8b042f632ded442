//! # scan 子命令 CLI 定义
//!
//! 批量扫描目录中的 OUTCAR 文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory containing VASP calculations
    pub dir: PathBuf,

    /// Glob pattern for OUTCAR file names
    #[arg(short, long, default_value = "OUTCAR*")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "VASPTRAJ_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Write the summary table as CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
