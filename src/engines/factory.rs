// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::dork::Dork;
use crate::domain::engine::Engine;
use crate::domain::operator::Operator;
use crate::engines::bing::Bing;
use crate::engines::duckduckgo::DuckDuckGo;
use crate::engines::google::Google;
use crate::utils::errors::DorkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 搜索引擎类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Google 搜索引擎
    Google,
    /// DuckDuckGo 搜索引擎
    DuckDuckGo,
    /// Bing 搜索引擎
    Bing,
}

impl EngineKind {
    /// 获取引擎名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => Google::NAME,
            Self::DuckDuckGo => DuckDuckGo::NAME,
            Self::Bing => Bing::NAME,
        }
    }

    /// 获取引擎的搜索地址
    pub fn search_url(&self) -> &'static str {
        match self {
            Self::Google => Google::SEARCH_URL,
            Self::DuckDuckGo => DuckDuckGo::SEARCH_URL,
            Self::Bing => Bing::SEARCH_URL,
        }
    }

    /// 获取引擎的操作符表
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            Self::Google => Google::OPERATORS,
            Self::DuckDuckGo => DuckDuckGo::OPERATORS,
            Self::Bing => Bing::OPERATORS,
        }
    }

    pub fn or_literal(&self) -> &'static str {
        match self {
            Self::Google => Google::OR,
            Self::DuckDuckGo => DuckDuckGo::OR,
            Self::Bing => Bing::OR,
        }
    }

    pub fn and_literal(&self) -> Option<&'static str> {
        match self {
            Self::Google => Google::and_literal(),
            Self::DuckDuckGo => DuckDuckGo::and_literal(),
            Self::Bing => Bing::and_literal(),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = DorkError;

    /// 从字符串解析引擎类型
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "duckduckgo" | "ddg" => Ok(Self::DuckDuckGo),
            "bing" => Ok(Self::Bing),
            other => Err(DorkError::UnknownEngine(other.to_string())),
        }
    }
}

/// 创建空的 Google 查询构建器
pub fn new_google() -> Dork<Google> {
    Dork::new()
}

/// 创建空的 DuckDuckGo 查询构建器
pub fn new_duckduckgo() -> Dork<DuckDuckGo> {
    Dork::new()
}

/// 创建空的 Bing 查询构建器
pub fn new_bing() -> Dork<Bing> {
    Dork::new()
}

/// 便捷函数：获取引擎类型列表
pub fn available_engine_types() -> Vec<EngineKind> {
    vec![EngineKind::Google, EngineKind::DuckDuckGo, EngineKind::Bing]
}
