// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含查询构建的核心逻辑，包括：
/// - 操作符（operator）：标签前缀与引号规则
/// - 引擎（engine）：每个搜索引擎的操作符词汇表抽象
/// - 构建器（dork）：有序标记序列及其序列化
/// - 请求参数（parameters）：`q` 参数及其 URL 编码
///
/// 领域层不依赖任何具体搜索引擎。
pub mod dork;
pub mod engine;
pub mod operator;
pub mod parameters;

pub use dork::Dork;
pub use engine::{Engine, SupportsAnd};
pub use operator::{format_token, Operator};
pub use parameters::QueryParameters;
