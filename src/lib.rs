//! Undigraph - 内存无向带权图
//!
//! 以标签区分顶点的无向图，提供：
//! - 与端点顺序无关的边标识
//! - 每对顶点至多一条边，不允许自环
//! - 删除顶点或边时级联维护邻接表

pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, EdgeKey, Graph, Vertex};
pub use types::{Weight, DEFAULT_WEIGHT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
