//! # VASP POSCAR 导出
//!
//! 将单个离子步写成 POSCAR（分数坐标）。
//!
//! ## 输出格式
//! ```text
//! label                  # 调用方给定的标题
//! 1.0                    # scaling factor
//! a1   a2   a3           # 晶格矢量，7 位小数
//! b1   b2   b3
//! c1   c2   c3
//! n1  n2 ...             # 各元素原子数（按原子序数首次出现顺序）
//! Direct
//! x1  y1  z1             # 分数坐标，5 位小数（按声明元素顺序）
//! ...
//! ```
//! 不写元素符号行 (VASP 4 风格)。
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 使用
//! - 使用 `models/state.rs`, `models/lattice.rs`

use crate::error::{Result, VasptrajError};
use crate::models::State;

use log::warn;
use std::fs;
use std::path::Path;

/// POSCAR 导出选项
#[derive(Debug, Clone)]
pub struct PoscarOptions {
    /// 第一行标题
    pub label: String,
    /// 预留给扩展格式，目前不产生额外输出
    pub extended: bool,
}

impl Default for PoscarOptions {
    fn default() -> Self {
        PoscarOptions {
            label: "Generated by vasptraj".to_string(),
            extended: false,
        }
    }
}

/// 按声明元素顺序计算所有原子的分数坐标
pub fn fractional_coordinates(state: &State) -> Vec<[f64; 3]> {
    let lattice = state.lattice();

    if lattice.inverse().is_none() {
        warn!(
            "{} step {}: singular lattice, writing cartesian coordinates",
            state.source_identifier(),
            state.sequence_index()
        );
    }

    state
        .atoms_in_declared_order()
        .iter()
        .map(|a| lattice.cartesian_to_fractional(a.position()))
        .collect()
}

/// 将 State 转换为 POSCAR 格式字符串
pub fn to_poscar_string(state: &State, options: &PoscarOptions) -> String {
    let mut result = String::new();

    // Line 0: Comment
    result.push_str(&format!("{}\n", options.label));

    // Line 1: Scale
    result.push_str("1.0\n");

    // Lines 2-4: Lattice
    for row in &state.lattice().matrix {
        result.push_str(&format!("{:.7}   {:.7}   {:.7}\n", row[0], row[1], row[2]));
    }

    // Line 5: Counts
    let counts: Vec<String> = state
        .species_counts_by_first_appearance()
        .iter()
        .map(|(_, n)| n.to_string())
        .collect();
    result.push_str(&format!("{}\n", counts.join("  ")));

    // Coordinate type
    result.push_str("Direct\n");

    // Atom positions
    for frac in fractional_coordinates(state) {
        result.push_str(&format!("{:.5}  {:.5}  {:.5}\n", frac[0], frac[1], frac[2]));
    }

    result
}

/// 写入 POSCAR 文件（严格版本）
pub fn write_poscar(state: &State, path: &Path, options: &PoscarOptions) -> Result<()> {
    fs::write(path, to_poscar_string(state, options)).map_err(|e| {
        VasptrajError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }
    })
}

/// 写入 POSCAR 文件（容错版本）
///
/// 目标无法打开时不写任何内容、也不报错，调用方需自行检查文件是否存在。
pub fn export_poscar(state: &State, path: &Path, label: &str, extended: bool) {
    let options = PoscarOptions {
        label: label.to_string(),
        extended,
    };
    if let Err(e) = write_poscar(state, path, &options) {
        warn!("{}", e);
    }
}
