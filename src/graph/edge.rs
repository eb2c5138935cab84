//! 边定义
//!
//! 无向带权边。边的标识只由两个端点决定，与端点传入顺序和权重都无关。

use crate::error::{Error, Result};
use crate::types::{Weight, DEFAULT_WEIGHT};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 边的规范标识
///
/// 两个端点标签按字典序存放，较小者在前，所以 `(A, B)` 与 `(B, A)` 是同一个键。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    /// 由两个端点标签构造规范键
    pub fn new(v1: impl AsRef<str>, v2: impl AsRef<str>) -> Self {
        let (v1, v2) = (v1.as_ref(), v2.as_ref());
        let (a, b) = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// 字典序较小的端点
    pub fn a(&self) -> &str {
        &self.a
    }

    /// 字典序较大的端点
    pub fn b(&self) -> &str {
        &self.b
    }

    /// 是否有端点未设置（空标签）
    pub fn is_unset(&self) -> bool {
        self.a.is_empty() || self.b.is_empty()
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// 标签是否为其中一个端点
    pub fn touches(&self, label: &str) -> bool {
        self.a == label || self.b == label
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, label: &str) -> Option<&str> {
        if label == self.a {
            Some(&self.b)
        } else if label == self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

/// 边
///
/// 相等性与哈希只看 [`EdgeKey`]，权重可以独立修改。
#[derive(Debug, Clone)]
pub struct Edge {
    key: EdgeKey,
    weight: Weight,
}

impl Edge {
    /// 创建新边，任一端点标签为空时失败
    pub fn new(v1: impl AsRef<str>, v2: impl AsRef<str>, weight: Weight) -> Result<Self> {
        let key = EdgeKey::new(v1, v2);
        if key.is_unset() {
            return Err(Error::InvalidOperand(format!("边 {} 的端点未设置", key)));
        }
        Ok(Self { key, weight })
    }

    /// 创建权重为 1 的边
    pub fn unit(v1: impl AsRef<str>, v2: impl AsRef<str>) -> Result<Self> {
        Self::new(v1, v2, DEFAULT_WEIGHT)
    }

    /// 获取规范标识
    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    pub fn endpoint_a(&self) -> &str {
        self.key.a()
    }

    pub fn endpoint_b(&self) -> &str {
        self.key.b()
    }

    /// 给定一个端点，返回另一个端点；不是端点时返回 None
    pub fn neighbor_of(&self, vertex: impl AsRef<str>) -> Option<&str> {
        self.key.other(vertex.as_ref())
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 设置权重（不做校验）
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// 按权重升序比较
    ///
    /// 不实现 `Ord`：相等性按端点对定义，而这里只看权重。
    pub fn cmp_weight(&self, other: &Edge) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Borrow<EdgeKey> for Edge {
    fn borrow(&self) -> &EdgeKey {
        &self.key
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({{Vertex: {}, Vertex: {}}}, {})",
            self.key.a, self.key.b, self.weight
        )
    }
}
