//! # info 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`

use clap::Args;
use std::path::PathBuf;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the OUTCAR file
    pub outcar: PathBuf,

    /// Only print the header summary, not the per-step table
    #[arg(long, default_value_t = false)]
    pub brief: bool,
}
