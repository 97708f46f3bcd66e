//! GraphAlgo - 基础图结构与经典图算法库
//!
//! 提供以稠密整数顶点索引寻址的无向图和有向图，支持：
//! - 最大基数匹配（Edmonds 开花算法）
//! - 强连通分量（Tarjan 单遍 low-link DFS）
//! - 拓扑排序（带环检测）

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{
    BlossomMatching, Matching, StrongComponents, TarjanScc, TopologicalSort, TopologicalSorting,
};
pub use error::{Error, Result};
pub use graph::{Digraph, Graph, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
