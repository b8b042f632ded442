//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `info`: 离子步摘要
//! - `export`: 导出离子步为 POSCAR
//! - `energies`: 能量曲线 (CSV / 图表)
//! - `scan`: 批量扫描目录下的 OUTCAR
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: info, export, energies, scan

pub mod energies;
pub mod export;
pub mod info;
pub mod scan;

use clap::{ArgAction, Parser, Subcommand};

/// vasptraj - VASP OUTCAR 离子步重建工具
#[derive(Parser)]
#[command(name = "vasptraj")]
#[command(version)]
#[command(
    about = "Reconstruct ionic steps from VASP OUTCAR files and export them as POSCAR",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); VASPTRAJ_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 根据 -v 次数得到默认日志级别
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the ionic steps found in an OUTCAR
    Info(info::InfoArgs),

    /// Export one (or every) ionic step as a POSCAR file
    Export(export::ExportArgs),

    /// Write the energy profile as CSV and optionally plot it
    Energies(energies::EnergiesArgs),

    /// Scan a directory tree for OUTCAR files and summarize them
    Scan(scan::ScanArgs),
}
