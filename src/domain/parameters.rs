// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::DorkError;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// 搜索请求参数
///
/// 单参数请求体：`q` 即完整的查询字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub q: String,
}

impl QueryParameters {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }

    /// 编码为 `application/x-www-form-urlencoded` 查询串
    ///
    /// 空格编码为 `+`，除 ASCII 字母数字与 `*-._` 外的字节全部百分号转义
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.q)
            .finish()
    }

    /// 从查询串解码参数
    ///
    /// # Returns
    ///
    /// * `Ok(QueryParameters)` - 解码成功
    /// * `Err(DorkError::Decode)` - 查询串格式错误或缺少 `q`
    pub fn from_query(query: &str) -> Result<Self, DorkError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Ok(serde_urlencoded::from_str(query)?)
    }
}
