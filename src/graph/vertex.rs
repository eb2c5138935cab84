//! 顶点定义
//!
//! 顶点以标签区分，持有按插入顺序排列的关联边（邻接表）。
//! 邻接表只保存边的规范标识，边本体由图统一存放。

use crate::error::{Error, Result};
use crate::graph::edge::EdgeKey;
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点标签（唯一标识）
    label: String,
    /// 关联边
    adjacency: SmallVec<[EdgeKey; 4]>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            adjacency: SmallVec::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 边是否与本顶点关联
    pub fn has_incident_edge(&self, edge: &EdgeKey) -> bool {
        self.adjacency.contains(edge)
    }

    /// 按位置获取关联边
    pub fn incident_edge_at(&self, index: usize) -> Result<&EdgeKey> {
        self.adjacency.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.adjacency.len(),
        })
    }

    /// 关联边数量
    pub fn incident_edge_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 关联边的只读视图
    pub fn incident_edges(&self) -> &[EdgeKey] {
        &self.adjacency
    }

    /// 邻接表副本，修改副本不影响顶点
    pub fn snapshot_neighbors(&self) -> Vec<EdgeKey> {
        self.adjacency.to_vec()
    }

    /// 追加关联边，已存在时不做任何事
    pub(crate) fn add_incident_edge(&mut self, edge: EdgeKey) {
        if !self.adjacency.contains(&edge) {
            self.adjacency.push(edge);
        }
    }

    /// 按位置移除关联边
    pub(crate) fn remove_incident_edge_at(&mut self, index: usize) -> Result<EdgeKey> {
        if index >= self.adjacency.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.adjacency.len(),
            });
        }
        Ok(self.adjacency.remove(index))
    }

    /// 按标识移除关联边，返回是否确实移除
    pub(crate) fn remove_incident_edge(&mut self, edge: &EdgeKey) -> bool {
        match self.adjacency.iter().position(|e| e == edge) {
            Some(pos) => {
                self.adjacency.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_incident_edges(&mut self) {
        self.adjacency.clear();
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex: {}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_adjacency_idempotent() {
        let mut v = Vertex::new("A");
        let ab = EdgeKey::new("A", "B");

        v.add_incident_edge(ab.clone());
        v.add_incident_edge(EdgeKey::new("B", "A"));

        assert_eq!(v.incident_edge_count(), 1);
        assert!(v.has_incident_edge(&ab));
        assert_eq!(v.incident_edge_at(0).unwrap(), &ab);
    }

    #[test]
    fn test_vertex_insertion_order() {
        let mut v = Vertex::new("A");
        v.add_incident_edge(EdgeKey::new("A", "C"));
        v.add_incident_edge(EdgeKey::new("A", "B"));
        v.add_incident_edge(EdgeKey::new("A", "D"));

        let labels: Vec<_> = v.incident_edges().iter().map(|e| e.b()).collect();
        assert_eq!(labels, vec!["C", "B", "D"]);
    }

    #[test]
    fn test_vertex_out_of_range() {
        let mut v = Vertex::new("A");

        assert_eq!(
            v.incident_edge_at(0),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            v.remove_incident_edge_at(2),
            Err(Error::OutOfRange { index: 2, len: 0 })
        );
    }

    #[test]
    fn test_vertex_remove_incident_edge() {
        let mut v = Vertex::new("A");
        v.add_incident_edge(EdgeKey::new("A", "B"));
        v.add_incident_edge(EdgeKey::new("A", "C"));

        assert!(v.remove_incident_edge(&EdgeKey::new("C", "A")));
        assert!(!v.remove_incident_edge(&EdgeKey::new("A", "Z")));
        assert_eq!(v.incident_edge_count(), 1);

        let removed = v.remove_incident_edge_at(0).unwrap();
        assert_eq!(removed, EdgeKey::new("A", "B"));
        assert_eq!(v.incident_edge_count(), 0);
    }

    #[test]
    fn test_vertex_snapshot_is_detached() {
        let mut v = Vertex::new("A");
        v.add_incident_edge(EdgeKey::new("A", "B"));

        let mut snapshot = v.snapshot_neighbors();
        snapshot.clear();

        assert_eq!(v.incident_edge_count(), 1);
    }

    #[test]
    fn test_vertex_equality_by_label() {
        let mut v1 = Vertex::new("A");
        v1.add_incident_edge(EdgeKey::new("A", "B"));
        let v2 = Vertex::new("A");

        assert_eq!(v1, v2);
        assert_ne!(v1, Vertex::new("B"));
        assert_eq!(v1.to_string(), "Vertex: A");
    }
}
