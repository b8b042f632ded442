//! # OUTCAR 行模式匹配
//!
//! 每类信息一个独立的匹配函数：匹配失败返回 `None`，成功返回捕获的数据。
//! 所有模式都锚定在行首（允许前导空白），匹配后的剩余内容忽略。
//!
//! ## 匹配的行
//! ```text
//!  vasp.5.4.4.18Apr17-6-g9f103f2a35 (build Apr 04 2019 15:09:58) complex
//!    VRHFIN =Rh: 4p 4d 5s
//!    ions per type =               2   1
//!  direct lattice vectors                 reciprocal lattice vectors
//!      3.000000000  0.000000000  0.000000000     0.333333333  0.000000000  0.000000000
//!  POSITION                                       TOTAL-FORCE (eV/Angst)
//!   energy  without entropy=      -10.40000000  energy(sigma->0) =      -10.50000000
//! ```
//!
//! 数值捕获中出现非法文本时按 0.0 处理，不中断解析。
//!
//! ## 依赖关系
//! - 被 `parsers/outcar.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*vasp\.([0-9])\.[0-9]+\.[0-9]+").expect("version regex"));

static ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*VRHFIN\s+=([A-Za-z]+)\s*:").expect("element regex"));

static ION_COUNTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*ions per type =\s+([0-9 ]+)").expect("ion count regex"));

static LATTICE_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*direct lattice vectors").expect("lattice regex"));

static ATOM_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*POSITION").expect("atom block regex"));

static SIX_NUMBERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([-+0-9.]+)\s+([-+0-9.]+)\s+([-+0-9.]+)\s+([-+0-9.]+)\s+([-+0-9.]+)\s+([-+0-9.]+)",
    )
    .expect("six number regex")
});

static ENERGY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*energy  without entropy=\s*([-+0-9.]+)\s+energy\(sigma->0\) =\s*([-+0-9.]+)",
    )
    .expect("energy regex")
});

/// 能量汇总行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySummary {
    pub without_entropy: f64,
    /// sigma → 0 外推能量，作为该离子步的能量
    pub sigma_zero: f64,
}

/// 宽松数值解析：无法解析时返回 0.0
pub fn lenient_f64(token: &str) -> f64 {
    token.parse().unwrap_or(0.0)
}

/// VASP 主版本号
pub fn match_version(line: &str) -> Option<u32> {
    let caps = VERSION_RE.captures(line)?;
    caps[1].parse().ok()
}

/// 元素符号声明
pub fn match_element(line: &str) -> Option<&str> {
    ELEMENT_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 每种元素的离子数，跳过连续分隔符产生的空 token
pub fn match_ion_counts(line: &str) -> Option<Vec<usize>> {
    let caps = ION_COUNTS_RE.captures(line)?;
    Some(
        caps[1]
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(|t| t.parse().unwrap_or(0))
            .collect(),
    )
}

pub fn is_lattice_header(line: &str) -> bool {
    LATTICE_HEADER_RE.is_match(line)
}

pub fn is_atom_block_header(line: &str) -> bool {
    ATOM_BLOCK_RE.is_match(line)
}

/// 六个数值的数据行
pub fn match_six_numbers(line: &str) -> Option<[f64; 6]> {
    let caps = SIX_NUMBERS_RE.captures(line)?;
    let mut values = [0.0; 6];
    for (i, v) in values.iter_mut().enumerate() {
        *v = lenient_f64(&caps[i + 1]);
    }
    Some(values)
}

/// 能量汇总行
pub fn match_energy(line: &str) -> Option<EnergySummary> {
    let caps = ENERGY_RE.captures(line)?;
    Some(EnergySummary {
        without_entropy: lenient_f64(&caps[1]),
        sigma_zero: lenient_f64(&caps[2]),
    })
}
