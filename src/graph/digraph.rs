//! 有向图数据结构
//!
//! 出边和入边双向邻接表，支持增量建图

use super::VertexId;
use crate::algorithm::{StrongComponents, TarjanScc, TopologicalSort, TopologicalSorting};
use crate::error::{Error, Result};

/// 有向图
///
/// 顶点以稠密下标 `0..vertex_count()` 标识。每条边 `(src, dst)` 同时记入
/// 源顶点的出边表和目标顶点的入边表，自环和平行边均保留。
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    /// 出边邻接表
    out_adj: Vec<Vec<VertexId>>,
    /// 入边邻接表
    in_adj: Vec<Vec<VertexId>>,
    /// 边数
    edge_count: usize,
}

impl Digraph {
    /// 创建空的有向图（顶点和边可以随后添加）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建包含 `num_vertices` 个孤立顶点的有向图
    pub fn with_vertices(num_vertices: usize) -> Self {
        Self {
            out_adj: vec![Vec::new(); num_vertices],
            in_adj: vec![Vec::new(); num_vertices],
            edge_count: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 追加一个新顶点，返回其下标
    pub fn add_vertex(&mut self) -> VertexId {
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self.out_adj.len() - 1
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.out_adj.len()
    }

    /// 校验顶点下标
    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.out_adj.len() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                count: self.out_adj.len(),
            });
        }
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 插入一条从 `src` 到 `dst` 的有向边
    ///
    /// 允许自环和平行边。
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.out_adj[src].push(dst);
        self.in_adj[dst].push(src);
        self.edge_count += 1;

        Ok(())
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点出边指向的顶点，按插入顺序排列（平行边产生重复项）
    pub fn out_neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.out_adj[v])
    }

    /// 获取顶点入边来源的顶点，按插入顺序排列
    pub fn in_neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.in_adj[v])
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.out_adj[v].len())
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.in_adj[v].len())
    }

    /// 无校验的出边邻接表访问，算法引擎内部使用（调用方保证 `v` 合法）
    pub(crate) fn out_adjacency(&self, v: VertexId) -> &[VertexId] {
        &self.out_adj[v]
    }

    // ==================== 算法入口 ====================

    /// 计算强连通分量
    pub fn strong_components(&self) -> StrongComponents {
        TarjanScc::new(self).compute()
    }

    /// 计算拓扑排序，图中存在有向环时失败
    pub fn topological_sorting(&self) -> Result<TopologicalSorting> {
        TopologicalSort::new(self).compute()
    }
}
