//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点越界: {vertex}, 当前顶点数 {count}")]
    VertexOutOfRange { vertex: usize, count: usize },

    #[error("图中存在有向环, 无法拓扑排序")]
    CyclicGraph,

    #[error("排序位置越界: {index}, 序列长度 {len}")]
    PositionOutOfRange { index: usize, len: usize },
}
