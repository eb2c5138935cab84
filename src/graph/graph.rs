//! 图数据结构
//!
//! 图同时持有顶点注册表（按标签）和边注册表（按规范标识）。
//! 顶点的邻接表只记录边标识，所有跨顶点的修改都经由本模块完成，
//! 保证边注册表与两个端点的邻接表始终同步。

use super::edge::{Edge, EdgeKey};
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{Weight, DEFAULT_WEIGHT};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// 无向带权图
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 标签到顶点的映射
    vertices: HashMap<String, Vertex>,
    /// 规范标识到边的映射
    edges: HashMap<EdgeKey, Edge>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 用一组顶点创建图，同标签的顶点后者覆盖前者，空标签的顶点被跳过
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut graph = Self::new();
        for mut vertex in vertices {
            if vertex.label().is_empty() {
                debug!("跳过空标签顶点");
                continue;
            }
            vertex.clear_incident_edges();
            graph.vertices.insert(vertex.label().to_string(), vertex);
        }
        graph
    }

    // ==================== 边操作 ====================

    /// 插入权重为 1 的边
    pub fn insert_unit_edge(&mut self, v1: impl AsRef<str>, v2: impl AsRef<str>) -> bool {
        self.insert_edge(v1, v2, DEFAULT_WEIGHT)
    }

    /// 插入边
    ///
    /// 自环、已存在的端点对、或端点邻接表已记录该边时返回 false，图保持不变。
    /// 尚未注册的端点会自动加入顶点注册表。
    pub fn insert_edge(&mut self, v1: impl AsRef<str>, v2: impl AsRef<str>, weight: Weight) -> bool {
        let (v1, v2) = (v1.as_ref(), v2.as_ref());
        if v1 == v2 {
            debug!(vertex = v1, "拒绝自环边");
            return false;
        }

        let edge = match Edge::new(v1, v2, weight) {
            Ok(edge) => edge,
            Err(e) => {
                debug!(error = %e, "拒绝插入边");
                return false;
            }
        };
        let key = edge.key().clone();

        if self.edges.contains_key(&key) {
            debug!(edge = %key, "边已存在");
            return false;
        }
        let listed = |label: &str| {
            self.vertices
                .get(label)
                .is_some_and(|v| v.has_incident_edge(&key))
        };
        if listed(v1) || listed(v2) {
            debug!(edge = %key, "端点邻接表已记录该边");
            return false;
        }

        // 校验全部通过后才写入，以下步骤不会失败
        for label in [v1, v2] {
            self.vertices
                .entry(label.to_string())
                .or_insert_with(|| Vertex::new(label))
                .add_incident_edge(key.clone());
        }
        debug!(edge = %key, weight, "插入边");
        self.edges.insert(key, edge);
        true
    }

    /// 图中是否存在该边；端点未设置时返回 false
    pub fn contains_edge<Q: Borrow<EdgeKey>>(&self, edge: &Q) -> bool {
        let key = edge.borrow();
        !key.is_unset() && self.edges.contains_key(key)
    }

    /// 获取边
    pub fn get_edge<Q: Borrow<EdgeKey>>(&self, edge: &Q) -> Option<&Edge> {
        self.edges.get(edge.borrow())
    }

    /// 删除边，同时从两个端点的邻接表中移除
    pub fn remove_edge<Q: Borrow<EdgeKey>>(&mut self, edge: &Q) -> Option<Edge> {
        let key = edge.borrow();
        for label in [key.a(), key.b()] {
            if let Some(vertex) = self.vertices.get_mut(label) {
                vertex.remove_incident_edge(key);
            }
        }

        let removed = self.edges.remove(key);
        if removed.is_some() {
            debug!(edge = %key, "删除边");
        }
        removed
    }

    /// 修改边权重，不影响边的标识
    pub fn set_edge_weight<Q: Borrow<EdgeKey>>(&mut self, edge: &Q, weight: Weight) -> Result<()> {
        let key = edge.borrow();
        let edge = self
            .edges
            .get_mut(key)
            .ok_or_else(|| Error::EdgeNotFound(key.to_string()))?;
        edge.set_weight(weight);
        Ok(())
    }

    /// 所有边（无序）
    pub fn all_edges(&self) -> HashSet<&Edge> {
        self.edges.values().collect()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 顶点操作 ====================

    /// 是否存在同标签的顶点
    pub fn contains_vertex(&self, vertex: impl AsRef<str>) -> bool {
        self.vertices.contains_key(vertex.as_ref())
    }

    /// 获取顶点
    pub fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.get(label)
    }

    /// 插入顶点
    ///
    /// 标签已存在时，`overwrite` 为 false 则返回 false；
    /// 为 true 则先删除旧顶点的全部关联边，再替换。
    /// 空标签视为未设置，返回 false。
    pub fn insert_vertex(&mut self, mut vertex: Vertex, overwrite: bool) -> bool {
        let label = vertex.label().to_string();
        if label.is_empty() {
            debug!("拒绝空标签顶点");
            return false;
        }
        if self.vertices.contains_key(&label) {
            if !overwrite {
                debug!(vertex = %label, "顶点已存在，拒绝覆盖");
                return false;
            }
            let detached = self.detach_all_edges(&label);
            debug!(vertex = %label, detached, "覆盖顶点");
        }

        vertex.clear_incident_edges();
        self.vertices.insert(label, vertex);
        true
    }

    /// 删除顶点及其全部关联边
    pub fn remove_vertex(&mut self, label: &str) -> Result<Vertex> {
        if !self.vertices.contains_key(label) {
            return Err(Error::VertexNotFound(label.to_string()));
        }

        let detached = self.detach_all_edges(label);
        let vertex = self
            .vertices
            .remove(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        debug!(vertex = label, detached, "删除顶点");
        Ok(vertex)
    }

    /// 所有顶点标签（无序）
    pub fn vertex_labels(&self) -> HashSet<&str> {
        self.vertices.keys().map(String::as_str).collect()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的关联边，按邻接表顺序
    pub fn incident_edges(&self, label: &str) -> Result<Vec<&Edge>> {
        let vertex = self
            .vertices
            .get(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        Ok(vertex
            .incident_edges()
            .iter()
            .filter_map(|key| self.edges.get(key))
            .collect())
    }

    /// 顶点的邻居，按邻接表顺序
    pub fn neighbors(&self, label: &str) -> Result<Vec<&Vertex>> {
        let vertex = self
            .vertices
            .get(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        Ok(vertex
            .incident_edges()
            .iter()
            .filter_map(|key| key.other(label))
            .filter_map(|other| self.vertices.get(other))
            .collect())
    }

    // ==================== 一致性 ====================

    /// 校验边注册表与邻接表是否同步
    pub fn check_consistency(&self) -> Result<()> {
        for (key, edge) in &self.edges {
            if edge.key() != key {
                return Err(Error::Inconsistent(format!(
                    "边 {} 登记在键 {} 下",
                    edge.key(),
                    key
                )));
            }
            if key.is_loop() {
                return Err(Error::Inconsistent(format!("存在自环 {}", key)));
            }
            if key.a() > key.b() {
                return Err(Error::Inconsistent(format!("边 {} 端点未规范排序", key)));
            }
            for label in [key.a(), key.b()] {
                let listed = self
                    .vertices
                    .get(label)
                    .map(|v| v.incident_edges().iter().filter(|e| *e == key).count())
                    .unwrap_or(0);
                if listed != 1 {
                    return Err(Error::Inconsistent(format!(
                        "顶点 {} 的邻接表记录边 {} {} 次",
                        label, key, listed
                    )));
                }
            }
        }

        for (label, vertex) in &self.vertices {
            if vertex.label() != label {
                return Err(Error::Inconsistent(format!(
                    "顶点 {} 登记在标签 {} 下",
                    vertex.label(),
                    label
                )));
            }
            for key in vertex.incident_edges() {
                if !key.touches(label) {
                    return Err(Error::Inconsistent(format!(
                        "顶点 {} 的邻接表包含无关边 {}",
                        label, key
                    )));
                }
                if !self.edges.contains_key(key) {
                    return Err(Error::Inconsistent(format!(
                        "顶点 {} 的邻接表包含未登记的边 {}",
                        label, key
                    )));
                }
            }
        }

        Ok(())
    }

    /// 反复删除顶点的第一条关联边，直到邻接表为空
    fn detach_all_edges(&mut self, label: &str) -> usize {
        let mut detached = 0;
        while let Some(key) = self
            .vertices
            .get(label)
            .and_then(|v| v.incident_edges().first().cloned())
        {
            trace!(vertex = label, edge = %key, "级联删除边");
            self.remove_edge(&key);
            detached += 1;
        }
        detached
    }
}
