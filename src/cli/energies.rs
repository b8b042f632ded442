//! # energies 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/energies.rs`

use clap::Args;
use std::path::PathBuf;

/// energies 子命令参数
#[derive(Args, Debug)]
pub struct EnergiesArgs {
    /// Path to the OUTCAR file
    pub outcar: PathBuf,

    /// CSV output file
    #[arg(short, long, default_value = "energies.csv")]
    pub output: PathBuf,

    /// Also plot the energy profile (.png or .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Plot width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}
