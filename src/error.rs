//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("无效的操作数: {0}")]
    InvalidOperand(String),

    #[error("索引越界: 索引 {index}, 长度 {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("图状态不一致: {0}")]
    Inconsistent(String),
}
