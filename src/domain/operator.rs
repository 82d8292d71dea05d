// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 搜索操作符
///
/// 引擎操作符配置表中的一行：操作符名称、标签前缀以及值是否需要加引号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Operator {
    /// 操作符名称（例如 `site`）
    pub name: &'static str,
    /// 标签前缀（例如 `site:`）
    pub tag: &'static str,
    /// 值是否包裹在双引号中
    pub quoted: bool,
}

impl Operator {
    /// 创建带引号的操作符
    pub const fn quoted(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            quoted: true,
        }
    }

    /// 创建不带引号的操作符
    pub const fn unquoted(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag,
            quoted: false,
        }
    }

    /// 将值格式化为一个查询标记
    pub fn format(&self, value: &str) -> String {
        format_token(self.tag, value, self.quoted)
    }
}

/// 拼接前缀与值
///
/// `quoted` 为 true 时返回 `prefix"value"`，否则返回 `prefixvalue`。
/// 值中的双引号不会被转义，原样输出。
pub fn format_token(prefix: &str, value: &str, quoted: bool) -> String {
    if quoted {
        format!("{}\"{}\"", prefix, value)
    } else {
        format!("{}{}", prefix, value)
    }
}
