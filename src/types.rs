//! 通用类型定义

/// 边权重（允许任意整数，包括负数）
pub type Weight = i64;

/// 未指定权重时的默认值，用于表示均匀图
pub const DEFAULT_WEIGHT: Weight = 1;
