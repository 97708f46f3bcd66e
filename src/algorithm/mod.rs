//! 图算法模块
//!
//! 包含最大基数匹配、强连通分量和拓扑排序算法

mod matching;
mod strong_components;
mod topological_sort;

pub use matching::{BlossomMatching, Matching};
pub use strong_components::{StrongComponents, TarjanScc};
pub use topological_sort::{TopologicalSort, TopologicalSorting};
