// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 搜索引擎 dork 查询构建器
//!
//! 通过 `site`、`filetype`、`intext`、排除、分组、OR/AND 等语义操作符组合查询，
//! 并转换为查询字符串或完整编码的搜索地址。

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含查询构建器、操作符和引擎抽象
pub mod domain;

/// 引擎模块
///
/// Google、DuckDuckGo、Bing 的操作符词汇表与工厂函数
pub mod engines;

/// 表示层模块
///
/// 命令行接口
pub mod presentation;

/// 工具模块
///
/// 提供错误类型和日志初始化
pub mod utils;

pub use domain::{Dork, Engine, Operator, QueryParameters, SupportsAnd};
pub use engines::{new_bing, new_duckduckgo, new_google, Bing, DuckDuckGo, EngineKind, Google};
pub use utils::errors::DorkError;
