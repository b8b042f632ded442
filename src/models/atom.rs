//! # 原子数据模型
//!
//! 单个原子：原子序数、笛卡尔坐标 (Å)、受力 (eV/Å) 以及两个随数据原样
//! 传递的标记位。构造后只有受力可以通过 `set_force` 修改。
//!
//! ## 依赖关系
//! - 被 `models/state.rs` 和 `parsers/outcar.rs` 使用
//! - 无外部模块依赖

use serde::Serialize;

/// 原子信息
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    atomic_number: u32,
    position: [f64; 3],
    force: [f64; 3],
    experimental: bool,
    selection_mode: i32,
}

impl Atom {
    /// 创建受力为零的原子
    pub fn new(atomic_number: u32, position: [f64; 3]) -> Self {
        Self::with_force(atomic_number, position, [0.0; 3])
    }

    pub fn with_force(atomic_number: u32, position: [f64; 3], force: [f64; 3]) -> Self {
        Atom {
            atomic_number,
            position,
            force,
            experimental: false,
            selection_mode: 0,
        }
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// 笛卡尔坐标 [x, y, z] (Å)
    pub fn position(&self) -> [f64; 3] {
        self.position
    }

    /// 受力 [fx, fy, fz] (eV/Å)
    pub fn force(&self) -> [f64; 3] {
        self.force
    }

    pub fn experimental(&self) -> bool {
        self.experimental
    }

    pub fn selection_mode(&self) -> i32 {
        self.selection_mode
    }

    /// 改写受力
    pub fn set_force(&mut self, force: [f64; 3]) {
        self.force = force;
    }

    /// 受力的模 (eV/Å)
    pub fn force_norm(&self) -> f64 {
        let [fx, fy, fz] = self.force;
        (fx * fx + fy * fy + fz * fz).sqrt()
    }
}
