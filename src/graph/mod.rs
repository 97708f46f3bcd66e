//! 图核心模块
//!
//! 定义无向图和有向图的核心数据结构

mod digraph;
mod graph;

pub use digraph::Digraph;
pub use graph::Graph;

/// 顶点 ID（稠密、从 0 开始的下标，按创建顺序分配）
pub type VertexId = usize;
