//! # export 命令实现
//!
//! 将 OUTCAR 中的离子步导出为 POSCAR。
//!
//! ## 功能
//! - 导出指定离子步（默认最后一步）
//! - `--all` 时每个离子步写一个 `POSCAR_<step>` 文件
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的参数
//! - 使用 `parsers/outcar.rs`, `parsers/poscar.rs`
//! - 使用 `utils/output.rs`

use crate::cli::export::ExportArgs;
use crate::error::{Result, VasptrajError};
use crate::models::State;
use crate::parsers::poscar::{write_poscar, PoscarOptions};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Exporting POSCAR");

    let reader = super::load_outcar(&args.outcar)?;
    let states = reader.states();

    if args.all {
        fs::create_dir_all(&args.output).map_err(|e| VasptrajError::FileWriteError {
            path: args.output.display().to_string(),
            source: e,
        })?;

        let mut written = 0;
        for state in states {
            let path = args
                .output
                .join(format!("POSCAR_{:04}", state.sequence_index()));
            if export_one(state, &path, &args)? {
                written += 1;
            }
        }

        output::print_done(&format!(
            "Exported {} of {} step(s) to '{}'",
            written,
            states.len(),
            args.output.display()
        ));
        return Ok(());
    }

    let state = select_state(states, args.step)?;
    if export_one(state, &args.output, &args)? {
        output::print_done(&format!(
            "Step {} (E = {:.6} eV) exported",
            state.sequence_index(),
            state.energy()
        ));
    }

    Ok(())
}

/// 按 1 起的步号选择离子步，缺省为最后一步
fn select_state(states: &[State], step: Option<usize>) -> Result<&State> {
    let count = states.len();
    let index = step.unwrap_or(count);

    index
        .checked_sub(1)
        .and_then(|i| states.get(i))
        .ok_or(VasptrajError::StateOutOfRange { index, count })
}

/// 写出单个 POSCAR；目标已存在且未指定覆盖时跳过并返回 false
fn export_one(state: &State, path: &Path, args: &ExportArgs) -> Result<bool> {
    if path.exists() && !args.overwrite {
        output::print_skip(&format!("{} exists (use --overwrite)", path.display()));
        return Ok(false);
    }

    let options = PoscarOptions {
        label: args.label.clone().unwrap_or_else(|| default_label(state)),
        extended: args.extended,
    };
    write_poscar(state, path, &options)?;
    output::print_conversion(
        &format!("{} #{}", state.source_identifier(), state.sequence_index()),
        &path.display().to_string(),
    );

    Ok(true)
}

/// 默认标题：来源文件、步号和能量
fn default_label(state: &State) -> String {
    let source = Path::new(state.source_identifier())
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("OUTCAR");
    format!(
        "{} step {} E = {:.6} eV",
        source,
        state.sequence_index(),
        state.energy()
    )
}
