//! 拓扑排序算法
//!
//! 实现三色 DFS 逆后序：灰色顶点被再次访问即发现回边，
//! 说明图中存在有向环，排序失败

use crate::error::{Error, Result};
use crate::graph::{Digraph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 拓扑排序结果
///
/// 由 [`TopologicalSort`] 计算后返回，不可变。序列包含每个顶点恰好一次，
/// 且每条边的源顶点都排在目标顶点之前。只有无环图才能构造出该结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologicalSorting {
    /// 排序后的顶点序列
    order: Vec<VertexId>,
}

impl TopologicalSorting {
    /// 获取序列长度（等于计算时的图顶点数）
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// 序列是否为空
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 获取序列中第 `index` 位的顶点
    pub fn vertex_at(&self, index: usize) -> Result<VertexId> {
        if index >= self.order.len() {
            return Err(Error::PositionOutOfRange {
                index,
                len: self.order.len(),
            });
        }
        Ok(self.order[index])
    }

    /// 按排序顺序迭代顶点
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// 以切片形式访问整个序列
    pub fn as_slice(&self) -> &[VertexId] {
        &self.order
    }
}

/// DFS 顶点着色
#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 未访问
    White,
    /// 在当前递归栈中
    Gray,
    /// 已完成
    Black,
}

/// 拓扑排序算法（DFS 逆后序）
pub struct TopologicalSort<'a> {
    graph: &'a Digraph,
}

impl<'a> TopologicalSort<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Digraph) -> Self {
        Self { graph }
    }

    /// 计算拓扑排序
    ///
    /// 按下标序从每个未访问顶点启动 DFS，邻居按插入顺序展开，
    /// 因此同一个图总是产生同一个序列。发现回边（含自环）时
    /// 立即返回 [`Error::CyclicGraph`]，不产生部分结果。
    pub fn compute(&self) -> Result<TopologicalSorting> {
        let n = self.graph.vertex_count();
        let mut walk = Walk {
            graph: self.graph,
            color: vec![Color::White; n],
            postorder: Vec::with_capacity(n),
        };

        for v in 0..n {
            if walk.color[v] == Color::White {
                walk.visit(v)?;
            }
        }

        // 后序的逆即拓扑序
        walk.postorder.reverse();
        debug!(vertices = n, "拓扑排序计算完成");

        Ok(TopologicalSorting {
            order: walk.postorder,
        })
    }
}

/// 一次计算过程中的可变状态
struct Walk<'a> {
    graph: &'a Digraph,
    color: Vec<Color>,
    postorder: Vec<VertexId>,
}

impl Walk<'_> {
    fn visit(&mut self, v: VertexId) -> Result<()> {
        self.color[v] = Color::Gray;

        let graph = self.graph;
        for &w in graph.out_adjacency(v) {
            match self.color[w] {
                // 指向灰色顶点的边是回边，构成有向环
                Color::Gray => return Err(Error::CyclicGraph),
                Color::White => self.visit(w)?,
                Color::Black => {}
            }
        }

        self.color[v] = Color::Black;
        self.postorder.push(v);
        Ok(())
    }
}
