// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::operator::Operator;

/// 搜索引擎词汇表
///
/// 每个引擎都是一个常量配置：名称、固定的搜索地址、OR 字面量以及可用的操作符表。
/// 所有格式化逻辑都由 [`Dork`](crate::domain::dork::Dork) 共享。
pub trait Engine {
    /// Name of the search engine
    const NAME: &'static str;

    /// Fixed base endpoint used by `to_request_url`
    const SEARCH_URL: &'static str;

    /// Literal inserted by `or()`
    const OR: &'static str;

    /// Operator vocabulary of this engine
    const OPERATORS: &'static [Operator];

    /// AND 字面量，不支持 AND 的引擎返回 `None`
    fn and_literal() -> Option<&'static str> {
        None
    }

    /// 按名称查找操作符（不区分大小写）
    fn operator(name: &str) -> Option<&'static Operator> {
        Self::OPERATORS
            .iter()
            .find(|op| op.name.eq_ignore_ascii_case(name))
    }
}

/// 支持 AND 操作符的引擎
pub trait SupportsAnd: Engine {
    /// Literal inserted by `and()`
    const AND: &'static str;
}
