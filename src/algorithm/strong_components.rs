//! 强连通分量算法
//!
//! 实现 Tarjan 单遍 DFS：为每个顶点维护发现序号和 low-link 值，
//! low-link 等于自身序号的顶点是分量根，弹栈收取整个分量

use crate::error::{Error, Result};
use crate::graph::{Digraph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

const UNVISITED: usize = usize::MAX;

/// 强连通分量结果
///
/// 由 [`TarjanScc`] 计算后返回，不可变。两个顶点分量号相同
/// 当且仅当它们沿有向边互相可达。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrongComponents {
    /// 每个顶点所属的分量号（从 0 开始）
    component: Vec<usize>,
    /// 分量总数
    count: usize,
}

impl StrongComponents {
    /// 获取顶点所属的分量号
    ///
    /// 分量号按 DFS 中根被关闭的顺序分配，即凝聚图的逆拓扑序
    /// （汇分量先编号）；调用方只应依赖号码的等价性，不应依赖数值含义。
    pub fn component_of(&self, v: VertexId) -> Result<usize> {
        if v >= self.component.len() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                count: self.component.len(),
            });
        }
        Ok(self.component[v])
    }

    /// 获取分量总数
    pub fn count(&self) -> usize {
        self.count
    }

    /// 获取顶点数量（与计算时的图一致）
    pub fn vertex_count(&self) -> usize {
        self.component.len()
    }
}

/// 顶点的 DFS 状态
#[derive(Clone)]
struct VertexState {
    /// 发现序号
    index: usize,
    /// 自顶点出发经 DFS 树边加至多一条栈内回边可达的最小发现序号
    low_link: usize,
    /// 是否仍在显式栈中
    on_stack: bool,
}

/// Tarjan 强连通分量算法
pub struct TarjanScc<'a> {
    graph: &'a Digraph,
}

impl<'a> TarjanScc<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Digraph) -> Self {
        Self { graph }
    }

    /// 计算强连通分量
    ///
    /// 按下标序从每个未访问顶点重启 DFS，非连通图自然得到各自独立的分量。
    pub fn compute(&self) -> StrongComponents {
        let n = self.graph.vertex_count();
        let mut walk = Walk {
            graph: self.graph,
            next_index: 0,
            stack: Vec::new(),
            state: vec![
                VertexState {
                    index: UNVISITED,
                    low_link: UNVISITED,
                    on_stack: false,
                };
                n
            ],
            component: vec![0; n],
            count: 0,
        };

        for v in 0..n {
            if walk.state[v].index == UNVISITED {
                walk.visit(v);
            }
        }

        debug!(vertices = n, components = walk.count, "强连通分量计算完成");

        StrongComponents {
            component: walk.component,
            count: walk.count,
        }
    }
}

/// 一次计算过程中的可变状态
struct Walk<'a> {
    graph: &'a Digraph,
    next_index: usize,
    stack: Vec<VertexId>,
    state: Vec<VertexState>,
    component: Vec<usize>,
    count: usize,
}

impl Walk<'_> {
    fn visit(&mut self, v: VertexId) {
        self.state[v].index = self.next_index;
        self.state[v].low_link = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.state[v].on_stack = true;

        let graph = self.graph;
        for &w in graph.out_adjacency(v) {
            if self.state[w].index == UNVISITED {
                self.visit(w);
                self.state[v].low_link = self.state[v].low_link.min(self.state[w].low_link);
            } else if self.state[w].on_stack {
                self.state[v].low_link = self.state[v].low_link.min(self.state[w].index);
            }
        }

        // low-link 等于自身序号的顶点是分量根，弹栈到自身为止
        if self.state[v].low_link == self.state[v].index {
            while let Some(w) = self.stack.pop() {
                self.state[w].on_stack = false;
                self.component[w] = self.count;
                if w == v {
                    break;
                }
            }
            self.count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scc_single_cycle() {
        // 0 -> 1 -> 2 -> 0
        let mut g = Digraph::with_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();

        let sc = g.strong_components();

        assert_eq!(sc.count(), 1);
        assert_eq!(sc.component_of(0).unwrap(), sc.component_of(1).unwrap());
        assert_eq!(sc.component_of(1).unwrap(), sc.component_of(2).unwrap());
    }

    #[test]
    fn test_scc_dag_all_singletons() {
        // 无环图中每个顶点自成一个分量
        let mut g = Digraph::with_vertices(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 3).unwrap();
        g.add_edge(2, 3).unwrap();

        let sc = g.strong_components();

        assert_eq!(sc.count(), 4);
        let mut ids: Vec<usize> = (0..4).map(|v| sc.component_of(v).unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_scc_two_components() {
        // 0 <-> 1 -> 2 <-> 3
        let mut g = Digraph::with_vertices(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(3, 2).unwrap();

        let sc = g.strong_components();

        assert_eq!(sc.count(), 2);
        assert_eq!(sc.component_of(0).unwrap(), sc.component_of(1).unwrap());
        assert_eq!(sc.component_of(2).unwrap(), sc.component_of(3).unwrap());
        assert_ne!(sc.component_of(0).unwrap(), sc.component_of(2).unwrap());
    }

    #[test]
    fn test_scc_reverse_topological_ids() {
        // 分量号按凝聚图逆拓扑序分配：汇分量号小
        let mut g = Digraph::with_vertices(2);
        g.add_edge(0, 1).unwrap();

        let sc = g.strong_components();

        assert_eq!(sc.count(), 2);
        assert_eq!(sc.component_of(1).unwrap(), 0);
        assert_eq!(sc.component_of(0).unwrap(), 1);
    }

    #[test]
    fn test_scc_self_loop_and_parallel() {
        // 自环和平行边不改变分量结构
        let mut g = Digraph::with_vertices(2);
        g.add_edge(0, 0).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();

        let sc = g.strong_components();

        assert_eq!(sc.count(), 2);
        assert_ne!(sc.component_of(0).unwrap(), sc.component_of(1).unwrap());
    }

    #[test]
    fn test_scc_disconnected() {
        let mut g = Digraph::with_vertices(5);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();
        // 顶点 2、3、4 孤立

        let sc = g.strong_components();

        assert_eq!(sc.count(), 4);
        assert_eq!(sc.vertex_count(), 5);
    }

    #[test]
    fn test_scc_empty_graph() {
        let g = Digraph::new();
        let sc = g.strong_components();

        assert_eq!(sc.count(), 0);
        assert_eq!(sc.vertex_count(), 0);
    }

    #[test]
    fn test_scc_query_out_of_range() {
        let g = Digraph::with_vertices(2);
        let sc = g.strong_components();

        assert_eq!(
            sc.component_of(2),
            Err(Error::VertexOutOfRange {
                vertex: 2,
                count: 2
            })
        );
    }

    #[test]
    fn test_scc_equivalence_vs_reachability() {
        // 与传递闭包交叉验证: 同分量 <=> 互相可达
        let mut g = Digraph::with_vertices(6);
        for (u, v) in [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3), (4, 5)] {
            g.add_edge(u, v).unwrap();
        }

        let n = g.vertex_count();
        let mut reach = vec![vec![false; n]; n];
        for v in 0..n {
            reach[v][v] = true;
            for &w in g.out_neighbors(v).unwrap() {
                reach[v][w] = true;
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if reach[i][k] && reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }

        let sc = g.strong_components();
        for u in 0..n {
            for v in 0..n {
                let same = sc.component_of(u).unwrap() == sc.component_of(v).unwrap();
                assert_eq!(same, reach[u][v] && reach[v][u], "u={} v={}", u, v);
            }
        }
    }

    #[test]
    fn test_scc_serialization() {
        let mut g = Digraph::with_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 0).unwrap();

        let sc = g.strong_components();
        let json = serde_json::to_string(&sc).unwrap();
        let restored: StrongComponents = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.count(), sc.count());
        assert_eq!(restored.component_of(2).unwrap(), sc.component_of(2).unwrap());
    }
}
