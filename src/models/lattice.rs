//! # 晶格数据模型
//!
//! 3×3 晶格矩阵（行向量为晶格矢量 a, b, c，单位 Å），以及笛卡尔坐标与
//! 分数坐标之间的变换。
//!
//! ## 依赖关系
//! - 被 `models/state.rs`, `parsers/outcar.rs` 使用
//! - 无外部模块依赖

use serde::Serialize;

/// 行列式绝对值低于该阈值视为奇异晶格
const SINGULAR_EPS: f64 = 1e-10;

/// 晶格参数表示
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)，角度单位：度
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a_vec, b_vec, c_vec] = self.matrix;

        let a = norm(a_vec);
        let b = norm(b_vec);
        let c = norm(c_vec);

        let alpha = (dot(b_vec, c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(a_vec, c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(a_vec, b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 行列式（带符号的晶胞体积）
    pub fn determinant(&self) -> f64 {
        let [a, b, c] = self.matrix;
        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// 晶胞体积 (Å³)
    pub fn volume(&self) -> f64 {
        self.determinant().abs()
    }

    /// 逆矩阵；奇异晶格返回 None
    pub fn inverse(&self) -> Option<[[f64; 3]; 3]> {
        let m = self.matrix;
        let det = self.determinant();
        if det.abs() < SINGULAR_EPS {
            return None;
        }

        Some([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ])
    }

    /// 笛卡尔坐标转分数坐标: frac = (L⁻¹)ᵀ · cart
    ///
    /// 奇异晶格无法求逆，此时原样返回笛卡尔坐标。
    pub fn cartesian_to_fractional(&self, cart: [f64; 3]) -> [f64; 3] {
        match self.inverse() {
            Some(inv) => apply_inverse_transpose(&inv, cart),
            None => cart,
        }
    }

    /// 分数坐标转笛卡尔坐标: cart = Lᵀ · frac
    pub fn fractional_to_cartesian(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }
}

/// (inv)ᵀ · v
fn apply_inverse_transpose(inv: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        inv[0][0] * v[0] + inv[1][0] * v[1] + inv[2][0] * v[2],
        inv[0][1] * v[0] + inv[1][1] * v[1] + inv[2][1] * v[2],
        inv[0][2] * v[0] + inv[1][2] * v[1] + inv[2][2] * v[2],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}
