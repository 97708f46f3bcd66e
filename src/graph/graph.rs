//! 无向图数据结构
//!
//! 邻接表实现，支持自环和平行边

use super::VertexId;
use crate::algorithm::{BlossomMatching, Matching};
use crate::error::{Error, Result};

/// 无向图
///
/// 顶点以稠密下标 `0..vertex_count()` 标识，按创建顺序分配，不支持删除。
/// 边是无序顶点对的多重集合，重复插入同一对会保留两条平行边。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 每个顶点的邻接表（每条关联边在其端点处各记一项）
    adj: Vec<Vec<VertexId>>,
    /// 边数
    edge_count: usize,
}

impl Graph {
    /// 创建包含 `num_vertices` 个孤立顶点的无向图
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); num_vertices],
            edge_count: 0,
        }
    }

    // ==================== 顶点操作 ====================

    /// 追加一个新顶点，返回其下标
    pub fn add_vertex(&mut self) -> VertexId {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// 校验顶点下标
    fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.adj.len() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                count: self.adj.len(),
            });
        }
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 在两个顶点之间插入一条无向边
    ///
    /// 允许自环（`u == v`）和平行边；自环在该顶点的邻接表中占两项。
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edge_count += 1;

        Ok(())
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居，按关联边的插入顺序排列
    ///
    /// 平行边产生重复项，自环产生两个自身项。
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId]> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// 获取顶点的度（关联边端点数）
    pub fn degree(&self, v: VertexId) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// 无校验的邻接表访问，算法引擎内部使用（调用方保证 `v` 合法）
    pub(crate) fn adjacency(&self, v: VertexId) -> &[VertexId] {
        &self.adj[v]
    }

    // ==================== 算法入口 ====================

    /// 计算最大基数匹配
    ///
    /// 结果是图当前内容的快照，之后再修改图不会更新已返回的匹配。
    pub fn maximum_matching(&self) -> Matching {
        BlossomMatching::new(self).compute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut g = Graph::new(3);

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);

        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(0).unwrap(), &[1]);
        assert_eq!(g.neighbors(1).unwrap(), &[0, 2]);
        assert_eq!(g.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_graph_add_vertex() {
        let mut g = Graph::new(0);

        assert_eq!(g.add_vertex(), 0);
        assert_eq!(g.add_vertex(), 1);
        assert_eq!(g.vertex_count(), 2);

        g.add_edge(0, 1).unwrap();
        assert_eq!(g.neighbors(1).unwrap(), &[0]);
    }

    #[test]
    fn test_graph_self_loop_and_parallel() {
        let mut g = Graph::new(2);

        // 自环占两项，平行边全部保留
        g.add_edge(0, 0).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0).unwrap(), &[0, 0, 1, 1]);
        assert_eq!(g.degree(0).unwrap(), 4);
        assert_eq!(g.degree(1).unwrap(), 2);
    }

    #[test]
    fn test_graph_out_of_range() {
        let mut g = Graph::new(2);

        assert_eq!(
            g.add_edge(0, 2),
            Err(Error::VertexOutOfRange {
                vertex: 2,
                count: 2
            })
        );
        assert!(g.neighbors(5).is_err());
        assert!(g.degree(2).is_err());
        // 失败的插入不影响边数
        assert_eq!(g.edge_count(), 0);
    }
}
