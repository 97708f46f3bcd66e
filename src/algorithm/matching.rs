//! 最大基数匹配算法
//!
//! 实现 Edmonds 开花算法：交替路 BFS 搜索增广路，
//! 遇到奇环（开花）时收缩为伪顶点继续搜索

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// 内部数组使用的"未匹配/未访问"哨兵，不出现在公开接口中
const NIL: usize = usize::MAX;

/// 匹配结果
///
/// 由 [`BlossomMatching`] 计算后返回，不可变。结果独占自己的配偶数组，
/// 与原图无关联；之后修改原图不会更新已返回的匹配。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matching {
    /// 每个顶点的配偶（`None` 表示未匹配）
    mate: Vec<Option<VertexId>>,
    /// 是否达到最大基数
    maximum: bool,
}

impl Matching {
    /// 获取顶点的配偶，未匹配返回 `Ok(None)`
    pub fn partner_of(&self, v: VertexId) -> Result<Option<VertexId>> {
        if v >= self.mate.len() {
            return Err(Error::VertexOutOfRange {
                vertex: v,
                count: self.mate.len(),
            });
        }
        Ok(self.mate[v])
    }

    /// 匹配是否达到最大基数
    pub fn is_maximum_cardinality(&self) -> bool {
        self.maximum
    }

    /// 获取匹配的顶点对数量
    pub fn cardinality(&self) -> usize {
        self.mate.iter().filter(|m| m.is_some()).count() / 2
    }

    /// 获取顶点数量（与计算时的图一致）
    pub fn vertex_count(&self) -> usize {
        self.mate.len()
    }
}

/// Edmonds 开花算法
pub struct BlossomMatching<'a> {
    graph: &'a Graph,
}

impl<'a> BlossomMatching<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算最大基数匹配
    ///
    /// 依次从每个未匹配顶点搜索增广路；某顶点当前不存在增广路时，
    /// 之后也不会再出现，因此单遍扫描即达到最大基数。
    pub fn compute(&self) -> Matching {
        let n = self.graph.vertex_count();
        let mut mate = vec![NIL; n];

        for v in 0..n {
            if mate[v] == NIL {
                self.try_augment(v, &mut mate);
            }
        }

        let matched = mate.iter().filter(|&&m| m != NIL).count() / 2;
        debug!(vertices = n, matched_pairs = matched, "最大匹配计算完成");

        Matching {
            mate: mate
                .into_iter()
                .map(|m| if m == NIL { None } else { Some(m) })
                .collect(),
            maximum: true,
        }
    }

    /// 从 `root` 出发做交替路 BFS
    ///
    /// 找到增广路则翻转路径上所有边的匹配状态并返回 true。
    /// 队列中只存放偶层（S 类）顶点；`base` 记录每个顶点所属开花的基。
    fn try_augment(&self, root: usize, mate: &mut [usize]) -> bool {
        let n = self.graph.vertex_count();
        let mut parent = vec![NIL; n];
        let mut base: Vec<usize> = (0..n).collect();
        let mut in_queue = vec![false; n];
        let mut queue = VecDeque::new();

        in_queue[root] = true;
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            for &w in self.graph.adjacency(u) {
                // 同一开花内部的边和已匹配边不参与搜索（自环恒被跳过）
                if base[u] == base[w] || mate[u] == w {
                    continue;
                }

                if w == root || (mate[w] != NIL && parent[mate[w]] != NIL) {
                    // w 也是偶层顶点：发现奇环，收缩开花
                    let b = self.find_common_base(u, w, &base, &parent, mate);
                    let mut in_blossom = vec![false; n];
                    Self::mark_path(u, b, w, &mut in_blossom, &base, &mut parent, mate);
                    Self::mark_path(w, b, u, &mut in_blossom, &base, &mut parent, mate);

                    for i in 0..n {
                        if in_blossom[base[i]] {
                            base[i] = b;
                            if !in_queue[i] {
                                in_queue[i] = true;
                                queue.push_back(i);
                            }
                        }
                    }
                } else if parent[w] == NIL {
                    // w 首次到达，成为奇层顶点
                    parent[w] = u;
                    if mate[w] == NIL {
                        // w 未匹配：root 到 w 构成增广路
                        Self::augment_along(w, &parent, mate);
                        return true;
                    }
                    // w 已匹配：其配偶进入偶层继续扩展
                    let m = mate[w];
                    if !in_queue[m] {
                        in_queue[m] = true;
                        queue.push_back(m);
                    }
                }
            }
        }

        false
    }

    /// 求两个偶层顶点在交替树中最近的公共开花基
    ///
    /// 先沿 u 的交替路标记到根的所有基，再沿 w 上行，
    /// 第一个被标记的基即为公共祖先。
    fn find_common_base(
        &self,
        u: usize,
        w: usize,
        base: &[usize],
        parent: &[usize],
        mate: &[usize],
    ) -> usize {
        let n = self.graph.vertex_count();
        let mut marked = vec![false; n];

        let mut v = u;
        loop {
            v = base[v];
            marked[v] = true;
            if mate[v] == NIL {
                // 到达搜索树根
                break;
            }
            v = parent[mate[v]];
        }

        let mut v = w;
        loop {
            v = base[v];
            if marked[v] {
                return v;
            }
            v = parent[mate[v]];
        }
    }

    /// 沿 `v` 到开花基 `b` 的交替路标记环上顶点，并翻转奇层顶点的 parent 指向
    ///
    /// `child` 是环上与 `v` 相邻的另一侧顶点，收缩后增广路可以穿过开花。
    fn mark_path(
        mut v: usize,
        b: usize,
        mut child: usize,
        in_blossom: &mut [bool],
        base: &[usize],
        parent: &mut [usize],
        mate: &[usize],
    ) {
        while base[v] != b {
            in_blossom[base[v]] = true;
            in_blossom[base[mate[v]]] = true;
            parent[v] = child;
            child = mate[v];
            v = parent[mate[v]];
        }
    }

    /// 从未匹配端点 `w` 沿 parent 链回溯，翻转路径上的匹配状态
    fn augment_along(w: usize, parent: &[usize], mate: &mut [usize]) {
        let mut v = w;
        while v != NIL {
            let pv = parent[v];
            let next = mate[pv];
            mate[v] = pv;
            mate[pv] = v;
            v = next;
        }
    }
}
