//! # 元素周期表查询
//!
//! 元素符号 → 原子序数的静态映射。未识别的符号返回 0（"未知"哨兵值），
//! 而不是报错；下游的 Atom/State 记录需要能容纳这个值。
//!
//! ## 依赖关系
//! - 被 `parsers/outcar.rs` 使用
//! - 无外部模块依赖

/// 未知元素的原子序数
pub const UNKNOWN_ATOMIC_NUMBER: u32 = 0;

/// 按原子序数排列的元素符号，下标 0 对应 H
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", //
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", //
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", //
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", //
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", //
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", //
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", //
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", //
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", //
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", //
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", //
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// 元素符号 → 原子序数（区分大小写，未知返回 0）
pub fn atomic_number_of(symbol: &str) -> u32 {
    SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map(|i| i as u32 + 1)
        .unwrap_or(UNKNOWN_ATOMIC_NUMBER)
}

/// 原子序数 → 元素符号
pub fn symbol_of(atomic_number: u32) -> Option<&'static str> {
    let idx = (atomic_number as usize).checked_sub(1)?;
    SYMBOLS.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(atomic_number_of("H"), 1);
        assert_eq!(atomic_number_of("C"), 6);
        assert_eq!(atomic_number_of("N"), 7);
        assert_eq!(atomic_number_of("O"), 8);
        assert_eq!(atomic_number_of("Fe"), 26);
        assert_eq!(atomic_number_of("Rh"), 45);
        assert_eq!(atomic_number_of("Pd"), 46);
        assert_eq!(atomic_number_of("Og"), 118);
    }

    #[test]
    fn test_unknown_symbol_is_zero() {
        assert_eq!(atomic_number_of("Xx"), UNKNOWN_ATOMIC_NUMBER);
        assert_eq!(atomic_number_of(""), UNKNOWN_ATOMIC_NUMBER);
        // 大小写敏感
        assert_eq!(atomic_number_of("rh"), UNKNOWN_ATOMIC_NUMBER);
    }

    #[test]
    fn test_symbol_of() {
        assert_eq!(symbol_of(45), Some("Rh"));
        assert_eq!(symbol_of(0), None);
        assert_eq!(symbol_of(119), None);
    }
}
