//! # energies 命令实现
//!
//! 导出每个离子步的能量为 CSV，可选绘制能量曲线。
//!
//! ## 依赖关系
//! - 使用 `cli/energies.rs` 定义的参数
//! - 使用 `parsers/outcar.rs`, `utils/plot.rs`
//! - 使用 `csv` + `serde` 写入 CSV

use crate::cli::energies::EnergiesArgs;
use crate::error::{Result, VasptrajError};
use crate::models::State;
use crate::utils::{output, plot};

use serde::Serialize;
use std::path::Path;

/// 单个离子步的能量记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyRow {
    pub step: usize,
    pub energy_ev: f64,
    /// 相对上一步的能量变化，第一步为 0
    pub delta_ev: f64,
    pub max_force: f64,
}

/// 由离子步序列生成能量记录
pub fn energy_rows(states: &[State]) -> Vec<EnergyRow> {
    let mut previous: Option<f64> = None;

    states
        .iter()
        .map(|s| {
            let energy = s.energy();
            let delta = previous.map(|p| energy - p).unwrap_or(0.0);
            previous = Some(energy);
            EnergyRow {
                step: s.sequence_index(),
                energy_ev: energy,
                delta_ev: delta,
                max_force: s.max_force(),
            }
        })
        .collect()
}

/// 执行 energies 命令
pub fn execute(args: EnergiesArgs) -> Result<()> {
    output::print_header("Energy profile");

    let reader = super::load_outcar(&args.outcar)?;
    let rows = energy_rows(reader.states());

    save_rows_csv(&rows, &args.output)?;
    output::print_success(&format!(
        "{} step(s) written to '{}'",
        rows.len(),
        args.output.display()
    ));

    if let Some(ref plot_path) = args.plot {
        let points: Vec<(usize, f64)> = rows.iter().map(|r| (r.step, r.energy_ev)).collect();
        let title = format!("Energy profile: {}", args.outcar.display());
        plot::plot_energy_profile(&points, plot_path, &title, args.width, args.height)?;
        output::print_success(&format!("Plot saved to '{}'", plot_path.display()));
    }

    Ok(())
}

/// 保存能量记录到 CSV
fn save_rows_csv(rows: &[EnergyRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| VasptrajError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
