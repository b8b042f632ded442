//! # VASP OUTCAR 离子步解析器
//!
//! 逐行扫描 OUTCAR，重建每个离子步（优化步）的结构：总能量、晶格以及
//! 每个原子的坐标和受力。
//!
//! ## 解析阶段
//! 多个阶段可以同时处于激活状态，每一行按固定优先级依次交给所有激活阶段：
//! ```text
//! Version ─┐
//! Elements ├─ (ions per type) ─► Lattice ─ (direct lattice vectors) ─► AtomsAndEnergy
//! IonCounts┘
//! ```
//! - `ions per type` 行只处理一次；之后头部阶段全部关闭
//! - 只采集第一个晶格块，同一文件中所有离子步共用该晶格
//!   （ISIF=3 等变胞计算不适用）
//!
//! ## 封存时机
//! VASP 不同主版本中能量行与 POSITION 块的先后不同，因此按版本选择一次
//! `EmissionStrategy`：
//! - `LateEnergy` (≥ 5 或未识别): 在能量行处封存
//! - `EarlyEnergy` (≤ 4): 在原子块读完时封存
//!
//! 第 k 个离子步总是使用第 k 个记录的能量；若封存时该能量尚未出现，
//! 该步会挂起，等到下一条能量行再封存。
//!
//! ## 容错约定
//! 无法打开的文件得到 0 个离子步；非法数值按 0.0 处理；未知元素的原子序数为 0。
//! 这些情况只记录日志，不返回错误。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/scanner.rs`, `parsers/patterns.rs`, `models/`

use super::patterns;
use super::scanner::LineScanner;
use crate::error::{Result, VasptrajError};
use crate::models::element::{atomic_number_of, UNKNOWN_ATOMIC_NUMBER};
use crate::models::{Atom, Lattice, Species, State};

use log::{debug, warn};
use std::fs;
use std::path::Path;

// ─────────────────────────────────────────────────────────────
// 解析阶段
// ─────────────────────────────────────────────────────────────

/// 单个解析阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Version,
    Elements,
    IonCounts,
    Lattice,
    AtomsAndEnergy,
}

impl Phase {
    fn bit(self) -> u8 {
        match self {
            Phase::Version => 1 << 0,
            Phase::Elements => 1 << 1,
            Phase::IonCounts => 1 << 2,
            Phase::Lattice => 1 << 3,
            Phase::AtomsAndEnergy => 1 << 4,
        }
    }
}

/// 当前激活的阶段集合
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseSet(u8);

impl PhaseSet {
    /// 初始状态：版本、元素、离子数同时激活
    pub const HEADER: PhaseSet = PhaseSet(1 | (1 << 1) | (1 << 2));

    pub fn contains(&self, phase: Phase) -> bool {
        self.0 & phase.bit() != 0
    }

    pub fn insert(&mut self, phase: Phase) {
        self.0 |= phase.bit();
    }

    pub fn remove(&mut self, phase: Phase) {
        self.0 &= !phase.bit();
    }
}

/// 离子步封存时机
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmissionStrategy {
    /// 能量行出现在原子块之前：原子块读完即封存
    EarlyEnergy,
    /// 能量行出现在原子块之后：读到能量行时封存
    #[default]
    LateEnergy,
}

impl EmissionStrategy {
    pub fn from_version(version: Option<u32>) -> Self {
        match version {
            Some(v) if v <= 4 => EmissionStrategy::EarlyEnergy,
            _ => EmissionStrategy::LateEnergy,
        }
    }
}

impl std::fmt::Display for EmissionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmissionStrategy::EarlyEnergy => write!(f, "early-energy"),
            EmissionStrategy::LateEnergy => write!(f, "late-energy"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 结构累加器
// ─────────────────────────────────────────────────────────────

/// 正在构建的离子步：原子缓冲区 + 共享的晶格与元素信息
#[derive(Debug, Default)]
struct StateAccumulator {
    lattice: Lattice,
    species: Species,
    atoms: Vec<Atom>,
    source_identifier: String,
}

impl StateAccumulator {
    /// 封存当前缓冲区为一个 State，并清空原子缓冲区
    ///
    /// 晶格与元素信息保留给后续离子步。
    fn seal(&mut self, energy: f64, sequence_index: usize) -> State {
        State::new(
            energy,
            self.lattice,
            std::mem::take(&mut self.atoms),
            self.species.clone(),
            self.source_identifier.clone(),
            sequence_index,
        )
    }
}

// ─────────────────────────────────────────────────────────────
// 解析器
// ─────────────────────────────────────────────────────────────

/// 一次解析的摘要
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseSummary {
    /// 遇到的 POSITION 块数
    pub state_count: usize,
    /// 声明的元素符号（声明顺序，可重复）
    pub elements: Vec<String>,
}

/// OUTCAR 读取器
///
/// 一个实例一次只解析一个文件，不可在并发解析间共享。
#[derive(Debug, Default)]
pub struct OutcarReader {
    version: Option<u32>,
    emission: EmissionStrategy,
    phases: PhaseSet,
    accumulator: StateAccumulator,
    total_atoms: usize,
    energies: Vec<f64>,
    states: Vec<State>,
    state_count: usize,
    /// 原子已读入缓冲区、但尚未封存的离子步序号
    awaiting: Option<usize>,
}

impl OutcarReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析 OUTCAR 文件（容错版本）
    ///
    /// 文件无法读取时记录警告并返回空摘要。
    pub fn parse(&mut self, path: &Path) -> ParseSummary {
        match self.read_file(path) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("{}", e);
                ParseSummary::default()
            }
        }
    }

    /// 解析 OUTCAR 文件（严格版本），仅在文件无法读取时返回错误
    pub fn read_file(&mut self, path: &Path) -> Result<ParseSummary> {
        self.clear();

        let bytes = fs::read(path).map_err(|e| VasptrajError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(self.parse_str(&content, &path.display().to_string()))
    }

    /// 解析内存中的 OUTCAR 文本
    pub fn parse_str(&mut self, content: &str, source_identifier: &str) -> ParseSummary {
        self.clear();
        self.accumulator.source_identifier = source_identifier.to_string();
        self.phases = PhaseSet::HEADER;

        let mut scanner = LineScanner::new(content);

        while let Some(line) = scanner.next_line() {
            if self.phases.contains(Phase::Version) {
                if let Some(version) = patterns::match_version(line) {
                    self.version = Some(version);
                }
            }

            if self.phases.contains(Phase::Elements) {
                if let Some(symbol) = patterns::match_element(line) {
                    self.accumulator.species.symbols.push(symbol.to_string());
                }
            }

            if self.phases.contains(Phase::IonCounts) {
                if let Some(counts) = patterns::match_ion_counts(line) {
                    self.collect_ion_counts(counts);
                }
            }

            if self.phases.contains(Phase::Lattice) && patterns::is_lattice_header(line) {
                self.collect_lattice(&mut scanner);
            }

            if self.phases.contains(Phase::AtomsAndEnergy) {
                if let Some(energy) = patterns::match_energy(line) {
                    self.record_energy(energy.sigma_zero);
                }

                if patterns::is_atom_block_header(line) {
                    self.collect_atom_block(&mut scanner);
                }
            }
        }

        if let Some(step) = self.awaiting.take() {
            warn!(
                "{}: ionic step {} has no energy line, dropping it",
                source_identifier, step
            );
            self.accumulator.atoms.clear();
        }

        debug!(
            "{}: {} POSITION block(s), {} state(s) sealed",
            source_identifier,
            self.state_count,
            self.states.len()
        );

        ParseSummary {
            state_count: self.state_count,
            elements: self.accumulator.species.symbols.clone(),
        }
    }

    /// 重置为初始空状态
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // ─────────────────────────────────────────────────────────────
    // 各阶段处理
    // ─────────────────────────────────────────────────────────────

    fn collect_ion_counts(&mut self, counts: Vec<usize>) {
        let species = &mut self.accumulator.species;

        for count in counts {
            species.counts.push(count);
            // 噪声行里的超大数值不能让累加溢出
            self.total_atoms = self.total_atoms.saturating_add(count);
        }

        species.atomic_numbers = species
            .symbols
            .iter()
            .map(|s| atomic_number_of(s))
            .collect();

        if species.symbols.len() != species.counts.len() {
            warn!(
                "{}: {} element declaration(s) but {} ion count(s)",
                self.accumulator.source_identifier,
                species.symbols.len(),
                species.counts.len()
            );
        }

        self.emission = EmissionStrategy::from_version(self.version);

        self.phases.remove(Phase::Version);
        self.phases.remove(Phase::Elements);
        self.phases.remove(Phase::IonCounts);
        self.phases.insert(Phase::Lattice);

        debug!(
            "header done: version {:?}, elements {:?}, counts {:?}, {} emission",
            self.version, species.symbols, species.counts, self.emission
        );
    }

    /// 读取紧随其后的三行，每行前三个数为一个晶格矢量（后三个为倒格矢，丢弃）
    fn collect_lattice(&mut self, scanner: &mut LineScanner<'_>) {
        let mut matrix = [[0.0; 3]; 3];

        for row in matrix.iter_mut() {
            match scanner.next_line().and_then(patterns::match_six_numbers) {
                Some(v) => *row = [v[0], v[1], v[2]],
                None => warn!(
                    "{}: malformed lattice row near line {}",
                    self.accumulator.source_identifier,
                    scanner.line_number()
                ),
            }
        }

        self.accumulator.lattice = Lattice::from_vectors(matrix);
        self.phases.remove(Phase::Lattice);
        self.phases.insert(Phase::AtomsAndEnergy);

        debug!("lattice: {:?}", matrix);
    }

    fn record_energy(&mut self, energy: f64) {
        self.energies.push(energy);

        if let Some(step) = self.awaiting.take() {
            let energy = self.energy_for_step(step);
            self.seal(step, energy);
        }
    }

    /// 读取 POSITION 块：跳过一行分隔线，然后按元素声明顺序读取各自的离子数行
    fn collect_atom_block(&mut self, scanner: &mut LineScanner<'_>) {
        self.state_count += 1;
        let step = self.state_count;

        if let Some(stale) = self.awaiting.take() {
            warn!(
                "{}: ionic step {} got no energy before step {}",
                self.accumulator.source_identifier, stale, step
            );
            let energy = self.energy_for_step(stale);
            self.seal(stale, energy);
        }

        scanner.skip(1);

        let counts = self.accumulator.species.counts.clone();
        'elements: for (i, &count) in counts.iter().enumerate() {
            let atomic_number = self
                .accumulator
                .species
                .atomic_numbers
                .get(i)
                .copied()
                .unwrap_or(UNKNOWN_ATOMIC_NUMBER);

            for _ in 0..count {
                let Some(row) = scanner.next_line() else {
                    warn!(
                        "{}: input ended inside POSITION block of step {}",
                        self.accumulator.source_identifier, step
                    );
                    break 'elements;
                };

                match patterns::match_six_numbers(row) {
                    Some(v) => self.accumulator.atoms.push(Atom::with_force(
                        atomic_number,
                        [v[0], v[1], v[2]],
                        [v[3], v[4], v[5]],
                    )),
                    None => warn!(
                        "{}: skipping unparsable atom row at line {}",
                        self.accumulator.source_identifier,
                        scanner.line_number()
                    ),
                }
            }
        }

        match self.emission {
            EmissionStrategy::EarlyEnergy if self.energies.len() >= step => {
                let energy = self.energy_for_step(step);
                self.seal(step, energy);
            }
            _ => self.awaiting = Some(step),
        }
    }

    /// 第 k 步对应第 k 个能量；缺失时退回最近一个能量，再缺失则为 0
    fn energy_for_step(&self, step: usize) -> f64 {
        step.checked_sub(1)
            .and_then(|i| self.energies.get(i))
            .or(self.energies.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn seal(&mut self, step: usize, energy: f64) {
        let state = self.accumulator.seal(energy, step);
        debug!(
            "sealed step {} with {} atom(s), E = {:.8} eV",
            step,
            state.total_atoms(),
            energy
        );
        self.states.push(state);
    }

    // ─────────────────────────────────────────────────────────────
    // 访问器
    // ─────────────────────────────────────────────────────────────

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, i: usize) -> Option<&State> {
        self.states.get(i)
    }

    /// 遇到的 POSITION 块数
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn elements(&self) -> &[String] {
        &self.accumulator.species.symbols
    }

    pub fn ions_per_element(&self) -> &[usize] {
        &self.accumulator.species.counts
    }

    pub fn total_atoms(&self) -> usize {
        self.total_atoms
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn emission(&self) -> EmissionStrategy {
        self.emission
    }

    pub fn lattice(&self) -> &Lattice {
        &self.accumulator.lattice
    }

    /// 所有记录到的能量（sigma → 0），按出现顺序
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn active_phases(&self) -> PhaseSet {
        self.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::poscar::fractional_coordinates;

    const HEADER_V4: &str = r#" vasp.4.6.36 17Feb09 (build Mar 10 2009 15:43:41) complex
   POTCAR:    PAW_PBE Rh_pv 09Sep2004
   VRHFIN =Rh: 4p 4d 5s
   POTCAR:    PAW_PBE O 08Apr2002
   VRHFIN =O: s2p4
   ions per type =               2   1
  direct lattice vectors                 reciprocal lattice vectors
     3.000000000  0.000000000  0.000000000     0.333333333  0.000000000  0.000000000
     0.000000000  3.000000000  0.000000000     0.000000000  0.333333333  0.000000000
     0.000000000  0.000000000  3.000000000     0.000000000  0.000000000  0.333333333
"#;

    fn atom_block(z_shift: f64) -> String {
        format!(
            r#" POSITION                                       TOTAL-FORCE (eV/Angst)
 -----------------------------------------------------------------------------------
      0.00000      0.00000      {:.5}         0.000000      0.000000      0.010000
      1.50000      1.50000      {:.5}         0.000000      0.000000     -0.010000
      0.00000      0.00000      {:.5}         0.000000      0.030000      0.040000
 -----------------------------------------------------------------------------------
"#,
            z_shift,
            z_shift,
            1.5 + z_shift
        )
    }

    fn energy_line(e: f64) -> String {
        format!(
            "  energy  without entropy=      {:.8}  energy(sigma->0) =      {:.8}\n",
            e + 0.1,
            e
        )
    }

    fn outcar(header: &str, steps: &[f64]) -> String {
        let mut s = header.to_string();
        for (i, &e) in steps.iter().enumerate() {
            s.push_str(&atom_block(i as f64 * 0.01));
            s.push_str("  FREE ENERGIE OF THE ION-ELECTRON SYSTEM (eV)\n");
            s.push_str(&energy_line(e));
        }
        s
    }

    #[test]
    fn test_early_energy_single_step() {
        let content = outcar(HEADER_V4, &[-10.5]);
        let mut reader = OutcarReader::new();
        let summary = reader.parse_str(&content, "OUTCAR");

        assert_eq!(reader.version(), Some(4));
        assert_eq!(reader.emission(), EmissionStrategy::EarlyEnergy);
        assert_eq!(summary.state_count, 1);
        assert_eq!(summary.elements, vec!["Rh", "O"]);
        assert_eq!(reader.states().len(), 1);

        let state = &reader.states()[0];
        assert!((state.energy() + 10.5).abs() < 1e-12);
        assert_eq!(state.total_atoms(), 3);
        assert_eq!(state.element_atomic_numbers(), &[45, 8]);
        assert_eq!(state.sequence_index(), 1);
        assert_eq!(state.source_identifier(), "OUTCAR");
        assert_eq!(state.atom(1).map(|a| a.position()), Some([1.5, 1.5, 0.0]));
        assert_eq!(state.atom(2).map(|a| a.force()), Some([0.0, 0.03, 0.04]));
        assert_eq!(state.lattice().matrix[2], [0.0, 0.0, 3.0]);

        let frac = fractional_coordinates(state);
        assert_eq!(frac.len(), 3);
        for (got, want) in frac.iter().zip([[0.0, 0.0, 0.0], [0.5, 0.5, 0.0]]) {
            for k in 0..3 {
                assert!((got[k] - want[k]).abs() < 1e-9, "{:?} vs {:?}", got, want);
            }
        }
    }

    #[test]
    fn test_late_energy_multiple_steps() {
        let header = HEADER_V4.replace("vasp.4.6.36", "vasp.5.4.4");
        let content = outcar(&header, &[-10.5, -10.7, -10.8]);
        let mut reader = OutcarReader::new();
        let summary = reader.parse_str(&content, "OUTCAR");

        assert_eq!(reader.emission(), EmissionStrategy::LateEnergy);
        assert_eq!(summary.state_count, 3);
        assert_eq!(reader.states().len(), 3);

        let energies: Vec<f64> = reader.states().iter().map(|s| s.energy()).collect();
        assert_eq!(energies, vec![-10.5, -10.7, -10.8]);

        for (i, state) in reader.states().iter().enumerate() {
            assert_eq!(state.sequence_index(), i + 1);
            assert_eq!(state.total_atoms(), reader.total_atoms());
        }

        // 不同离子步的坐标互不干扰
        let z0 = reader.states()[0].atom_position(0).map(|p| p[2]);
        let z2 = reader.states()[2].atom_position(0).map(|p| p[2]);
        assert_eq!(z0, Some(0.0));
        assert_eq!(z2, Some(0.02));
    }

    #[test]
    fn test_both_strategies_agree_on_energy_per_step() {
        let steps = [-1.0, -2.0, -3.0, -4.0];
        let v4 = outcar(HEADER_V4, &steps);
        let v5 = v4.replace("vasp.4.6.36", "vasp.5.4.4");

        let mut r4 = OutcarReader::new();
        r4.parse_str(&v4, "v4");
        let mut r5 = OutcarReader::new();
        r5.parse_str(&v5, "v5");

        let e4: Vec<f64> = r4.states().iter().map(|s| s.energy()).collect();
        let e5: Vec<f64> = r5.states().iter().map(|s| s.energy()).collect();
        assert_eq!(e4, steps.to_vec());
        assert_eq!(e4, e5);
    }

    #[test]
    fn test_early_energy_with_energy_before_atoms() {
        let mut content = HEADER_V4.to_string();
        for (i, e) in [-5.0, -6.0].iter().enumerate() {
            content.push_str(&energy_line(*e));
            content.push_str(&atom_block(i as f64 * 0.1));
        }

        let mut reader = OutcarReader::new();
        reader.parse_str(&content, "OUTCAR");

        assert_eq!(reader.states().len(), 2);
        assert_eq!(reader.states()[0].energy(), -5.0);
        assert_eq!(reader.states()[1].energy(), -6.0);
    }

    #[test]
    fn test_atoms_grouped_by_declared_element() {
        let content = outcar(HEADER_V4, &[-1.0, -2.0]);
        let mut reader = OutcarReader::new();
        reader.parse_str(&content, "OUTCAR");

        for state in reader.states() {
            let mut offset = 0;
            for (i, &count) in state.atoms_per_element().iter().enumerate() {
                let z = state.element_atomic_numbers()[i];
                for atom in &state.atoms()[offset..offset + count] {
                    assert_eq!(atom.atomic_number(), z);
                }
                offset += count;
            }
            assert_eq!(offset, state.total_atoms());
        }
    }

    #[test]
    fn test_unknown_element_resolves_to_zero() {
        let header = HEADER_V4.replace("VRHFIN =O:", "VRHFIN =Xx:");
        let content = outcar(&header, &[-3.0]);
        let mut reader = OutcarReader::new();
        let summary = reader.parse_str(&content, "OUTCAR");

        assert_eq!(summary.elements, vec!["Rh", "Xx"]);
        let state = &reader.states()[0];
        assert_eq!(state.element_atomic_numbers(), &[45, 0]);
        assert_eq!(state.atom(2).map(|a| a.atomic_number()), Some(0));
    }

    #[test]
    fn test_ion_counts_are_read_once() {
        let header = format!("{}   ions per type =   7   7\n", HEADER_V4);
        let content = outcar(&header, &[-1.0]);
        let mut reader = OutcarReader::new();
        reader.parse_str(&content, "OUTCAR");

        assert_eq!(reader.ions_per_element(), &[2, 1]);
        assert_eq!(reader.total_atoms(), 3);
        assert_eq!(reader.states()[0].total_atoms(), 3);
    }

    #[test]
    fn test_malformed_numbers_become_zero() {
        let content = outcar(HEADER_V4, &[-1.0]).replacen("1.50000      1.50000", "1.5.0      1.50000", 1);
        let mut reader = OutcarReader::new();
        reader.parse_str(&content, "OUTCAR");

        assert_eq!(reader.states()[0].atom_position(1), Some([0.0, 1.5, 0.0]));
    }

    #[test]
    fn test_noise_lines_are_ignored() {
        let mut content = String::from("random noise\n\n");
        content.push_str(&outcar(HEADER_V4, &[-1.0]));
        content.push_str(" POSITION but the file ends here\n");

        let mut reader = OutcarReader::new();
        let summary = reader.parse_str(&content, "OUTCAR");

        // 结尾的残缺离子步只计数，不封存
        assert_eq!(summary.state_count, 2);
        assert_eq!(reader.states().len(), 1);
        assert_eq!(reader.states()[0].total_atoms(), 3);
    }

    #[test]
    fn test_late_energy_extra_energy_line_is_not_a_step() {
        let header = HEADER_V4.replace("vasp.4.6.36", "vasp.5.4.4");
        let mut content = outcar(&header, &[-1.5]);
        content.push_str(&energy_line(-1.6));

        let mut reader = OutcarReader::new();
        let summary = reader.parse_str(&content, "OUTCAR");

        // 没有 POSITION 块的能量行只记录能量，不产生离子步
        assert_eq!(summary.state_count, 1);
        assert_eq!(reader.states().len(), 1);
        assert_eq!(reader.states()[0].energy(), -1.5);
        assert_eq!(reader.energies(), &[-1.5, -1.6]);
    }

    #[test]
    fn test_oversized_ion_counts_do_not_overflow() {
        let content = format!(
            " vasp.5.4.4\n VRHFIN =Rh: x\n VRHFIN =O: x\n ions per type = {} 1\n",
            usize::MAX
        );
        let mut reader = OutcarReader::new();
        let summary = reader.parse_str(&content, "OUTCAR");

        assert_eq!(summary.elements, vec!["Rh", "O"]);
        assert_eq!(reader.ions_per_element(), &[usize::MAX, 1]);
        assert_eq!(reader.total_atoms(), usize::MAX);
        assert!(reader.states().is_empty());

        // 后续的原子块读到文件末尾即停止
        let mut content = HEADER_V4.replace("2   1", &format!("{}   1", usize::MAX));
        content.push_str(&atom_block(0.0));
        content.push_str(&energy_line(-1.0));
        let summary = reader.parse_str(&content, "OUTCAR");
        assert_eq!(summary.state_count, 1);
        assert!(reader.states().is_empty());
    }

    #[test]
    fn test_phase_transitions() {
        let mut reader = OutcarReader::new();
        reader.parse_str(HEADER_V4, "OUTCAR");
        let phases = reader.active_phases();

        assert!(phases.contains(Phase::AtomsAndEnergy));
        assert!(!phases.contains(Phase::Lattice));
        assert!(!phases.contains(Phase::Elements));
        assert!(!phases.contains(Phase::IonCounts));

        let mut header_only = PhaseSet::HEADER;
        assert!(header_only.contains(Phase::Version));
        assert!(header_only.contains(Phase::Elements));
        assert!(header_only.contains(Phase::IonCounts));
        header_only.remove(Phase::Version);
        header_only.remove(Phase::Elements);
        header_only.remove(Phase::IonCounts);
        assert_eq!(header_only, PhaseSet::default());
    }

    #[test]
    fn test_emission_strategy_from_version() {
        assert_eq!(EmissionStrategy::from_version(Some(4)), EmissionStrategy::EarlyEnergy);
        assert_eq!(EmissionStrategy::from_version(Some(5)), EmissionStrategy::LateEnergy);
        assert_eq!(EmissionStrategy::from_version(Some(6)), EmissionStrategy::LateEnergy);
        assert_eq!(EmissionStrategy::from_version(None), EmissionStrategy::LateEnergy);
    }

    #[test]
    fn test_clear_then_parse_is_idempotent() {
        let content = outcar(HEADER_V4, &[-1.0, -2.0]);
        let mut reader = OutcarReader::new();

        reader.parse_str(&content, "OUTCAR");
        let first = reader.states().to_vec();

        reader.clear();
        assert!(reader.states().is_empty());
        assert_eq!(reader.state_count(), 0);
        assert!(reader.elements().is_empty());

        reader.parse_str(&content, "OUTCAR");
        assert_eq!(reader.states(), first.as_slice());
    }

    #[test]
    fn test_unopenable_path_yields_zero_states() {
        let mut reader = OutcarReader::new();
        let summary = reader.parse(Path::new("/nonexistent/dir/OUTCAR"));

        assert_eq!(summary.state_count, 0);
        assert!(summary.elements.is_empty());
        assert!(reader.states().is_empty());
        assert!(reader
            .read_file(Path::new("/nonexistent/dir/OUTCAR"))
            .is_err());
    }

    #[test]
    fn test_parse_from_file() {
        let path = std::env::temp_dir().join(format!("vasptraj_outcar_{}", std::process::id()));
        fs::write(&path, outcar(HEADER_V4, &[-1.0, -2.0])).unwrap();

        let mut reader = OutcarReader::new();
        let summary = reader.parse(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(summary.state_count, 2);
        assert_eq!(reader.states().len(), 2);
        assert_eq!(
            reader.states()[0].source_identifier(),
            path.display().to_string()
        );
    }
}
