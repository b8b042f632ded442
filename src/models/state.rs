//! # 离子步结构数据模型
//!
//! `State` 表示 OUTCAR 中重建出的一个离子步：总能量、晶格、按元素分块排列的
//! 原子列表，以及元素元数据。`State` 一经构造即不可变。
//!
//! ## 原子顺序
//! 同一个 State 上有两种彼此独立的排序，不要合并：
//! - `atoms_in_declared_order`: 按 OUTCAR 头部声明的元素顺序（坐标块使用）
//! - `species_counts_by_first_appearance`: 按原子序数首次出现顺序（POSCAR 计数行使用）
//!
//! ## 依赖关系
//! - 被 `parsers/outcar.rs` 构造，被 `parsers/poscar.rs` 序列化
//! - 使用 `models/atom.rs`, `models/lattice.rs`

use super::{Atom, Lattice};
use serde::Serialize;

/// 元素元数据：三个等长的并行序列
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Species {
    /// 元素符号（声明顺序）
    pub symbols: Vec<String>,
    /// 对应的原子序数（未知元素为 0）
    pub atomic_numbers: Vec<u32>,
    /// 每种元素的原子数
    pub counts: Vec<usize>,
}

impl Species {
    /// 原子总数
    pub fn total_atoms(&self) -> usize {
        self.counts.iter().fold(0, |acc, &n| acc.saturating_add(n))
    }
}

/// 一个离子步的结构
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
    energy: f64,
    lattice: Lattice,
    atoms: Vec<Atom>,
    species: Species,
    source_identifier: String,
    sequence_index: usize,
}

impl State {
    pub fn new(
        energy: f64,
        lattice: Lattice,
        atoms: Vec<Atom>,
        species: Species,
        source_identifier: impl Into<String>,
        sequence_index: usize,
    ) -> Self {
        State {
            energy,
            lattice,
            atoms,
            species,
            source_identifier: source_identifier.into(),
            sequence_index,
        }
    }

    /// 总能量 (eV)
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, i: usize) -> Option<&Atom> {
        self.atoms.get(i)
    }

    pub fn atom_position(&self, i: usize) -> Option<[f64; 3]> {
        self.atoms.get(i).map(Atom::position)
    }

    pub fn total_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// 元素种类数（含重复声明）
    pub fn element_count(&self) -> usize {
        self.species.symbols.len()
    }

    /// 第 i 种元素声明的原子数
    pub fn atoms_for_element(&self, i: usize) -> Option<usize> {
        self.species.counts.get(i).copied()
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn element_symbols(&self) -> &[String] {
        &self.species.symbols
    }

    pub fn element_atomic_numbers(&self) -> &[u32] {
        &self.species.atomic_numbers
    }

    pub fn atoms_per_element(&self) -> &[usize] {
        &self.species.counts
    }

    /// 来源文件名
    pub fn source_identifier(&self) -> &str {
        &self.source_identifier
    }

    /// 在文件中的序号（从 1 开始）
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// 齐次坐标矩阵 (N × 4)，每行为 [x, y, z, 1]
    pub fn homogeneous_coordinates(&self) -> Vec<[f64; 4]> {
        self.atoms
            .iter()
            .map(|a| {
                let [x, y, z] = a.position();
                [x, y, z, 1.0]
            })
            .collect()
    }

    /// 原子几何中心；无原子时返回晶胞中心
    pub fn center(&self) -> [f64; 3] {
        if self.atoms.is_empty() {
            return self.lattice.fractional_to_cartesian([0.5, 0.5, 0.5]);
        }

        let n = self.atoms.len() as f64;
        let mut sum = [0.0; 3];
        for atom in &self.atoms {
            let p = atom.position();
            for k in 0..3 {
                sum[k] += p[k];
            }
        }
        [sum[0] / n, sum[1] / n, sum[2] / n]
    }

    /// 最大原子受力 (eV/Å)
    pub fn max_force(&self) -> f64 {
        self.atoms.iter().map(Atom::force_norm).fold(0.0, f64::max)
    }

    /// 元素摘要，形如 `Rh(2) O(1)`
    pub fn element_summary(&self) -> String {
        self.species
            .symbols
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}({})", s, self.species.counts.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 按声明元素顺序排列的原子
    ///
    /// 对每个声明的原子序数，依次取出原子列表中序数相同的原子。重复声明的
    /// 原子序数只处理一次，否则同一原子会被输出两次。
    pub fn atoms_in_declared_order(&self) -> Vec<&Atom> {
        let mut seen: Vec<u32> = Vec::new();
        let mut ordered = Vec::with_capacity(self.atoms.len());

        for &z in &self.species.atomic_numbers {
            if seen.contains(&z) {
                continue;
            }
            seen.push(z);
            ordered.extend(self.atoms.iter().filter(|a| a.atomic_number() == z));
        }

        ordered
    }

    /// 按原子序数首次出现顺序统计的直方图 [(原子序数, 个数)]
    ///
    /// 不连续出现的同种原子也计入同一项。
    pub fn species_counts_by_first_appearance(&self) -> Vec<(u32, usize)> {
        let mut counts: Vec<(u32, usize)> = Vec::new();

        for atom in &self.atoms {
            let z = atom.atomic_number();
            match counts.iter_mut().find(|(n, _)| *n == z) {
                Some((_, c)) => *c += 1,
                None => counts.push((z, 1)),
            }
        }

        counts
    }
}
