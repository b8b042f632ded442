//! # info 命令实现
//!
//! 打印 OUTCAR 的头部信息与逐步能量表。
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的参数
//! - 使用 `parsers/outcar.rs`, `commands/energies.rs`
//! - 使用 `utils/output.rs`

use super::energies::energy_rows;
use crate::cli::info::InfoArgs;
use crate::error::Result;
use crate::models::element::symbol_of;
use crate::models::State;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    step: usize,
    #[tabled(rename = "Energy (eV)")]
    energy: String,
    #[tabled(rename = "ΔE (eV)")]
    delta: String,
    #[tabled(rename = "Max force (eV/Å)")]
    max_force: String,
}

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    output::print_header(&format!("Ionic steps in {}", args.outcar.display()));

    let reader = super::load_outcar(&args.outcar)?;

    let version = reader
        .version()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    output::print_info(&format!(
        "VASP major version: {} ({} emission)",
        version,
        reader.emission()
    ));

    // 所有离子步共用同一元素信息与晶格
    let first = &reader.states()[0];
    output::print_info(&format!(
        "Elements: {} ({} atoms)",
        first.element_summary(),
        first.species().total_atoms()
    ));
    output::print_info(&format!("POSCAR species order: {}", poscar_species_line(first)));

    let (a, b, c, alpha, beta, gamma) = reader.lattice().parameters();
    output::print_info(&format!(
        "Lattice: a={:.4} b={:.4} c={:.4} Å, α={:.2} β={:.2} γ={:.2}°, V={:.4} Å³",
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
        reader.lattice().volume()
    ));

    output::print_info(&format!(
        "{} POSITION block(s), {} complete ionic step(s)",
        reader.state_count(),
        reader.states().len()
    ));

    if reader.states().len() < reader.state_count() {
        output::print_warning(&format!(
            "{} step(s) had no energy line and were dropped",
            reader.state_count() - reader.states().len()
        ));
    }

    if !args.brief {
        let rows: Vec<StepRow> = energy_rows(reader.states())
            .into_iter()
            .map(|r| StepRow {
                step: r.step,
                energy: format!("{:.6}", r.energy_ev),
                delta: format!("{:+.6}", r.delta_ev),
                max_force: format!("{:.4}", r.max_force),
            })
            .collect();
        println!("\n{}", Table::new(&rows));
    }

    if let Some(last) = reader.states().last() {
        output::print_done(&format!(
            "Final energy {:.6} eV at step {}",
            last.energy(),
            last.sequence_index()
        ));
    }

    Ok(())
}

/// POSCAR 计数行对应的元素顺序（按原子序数首次出现），形如 `Rh(2) O(1)`
fn poscar_species_line(state: &State) -> String {
    state
        .species_counts_by_first_appearance()
        .iter()
        .map(|&(z, n)| format!("{}({})", symbol_of(z).unwrap_or("X"), n))
        .collect::<Vec<_>>()
        .join(" ")
}
