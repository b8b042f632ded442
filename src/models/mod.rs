//! # 数据模型模块
//!
//! 定义原子、晶格和离子步结构的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: atom, element, lattice, state

pub mod atom;
pub mod element;
pub mod lattice;
pub mod state;

pub use atom::Atom;
pub use element::atomic_number_of;
pub use lattice::Lattice;
pub use state::{Species, State};
