// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 查询构建错误类型
///
/// 构建器本身的追加与序列化操作不会失败，
/// 只有按名称查找、参数解析、解码和配置加载会返回此错误。
#[derive(Error, Debug)]
pub enum DorkError {
    #[error("未知的搜索引擎: {0}")]
    UnknownEngine(String),

    #[error("搜索引擎 {engine} 不支持操作符: {operator}")]
    UnsupportedOperator {
        engine: &'static str,
        operator: String,
    },

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("查询参数解码失败: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}
