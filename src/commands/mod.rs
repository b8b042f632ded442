//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `utils/`
//! - 子模块: info, export, energies, scan

pub mod energies;
pub mod export;
pub mod info;
pub mod scan;

use crate::cli::Commands;
use crate::error::{Result, VasptrajError};
use crate::parsers::OutcarReader;
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Info(args) => info::execute(args),
        Commands::Export(args) => export::execute(args),
        Commands::Energies(args) => energies::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 读取 OUTCAR，要求至少重建出一个离子步
pub(crate) fn load_outcar(path: &Path) -> Result<OutcarReader> {
    if !path.is_file() {
        return Err(VasptrajError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = OutcarReader::new();
    reader.read_file(path)?;

    if reader.states().is_empty() {
        return Err(VasptrajError::NoStates {
            path: path.display().to_string(),
        });
    }

    Ok(reader)
}
