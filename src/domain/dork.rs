// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::engine::{Engine, SupportsAnd};
use crate::domain::operator::{format_token, Operator};
use crate::domain::parameters::QueryParameters;
use crate::utils::errors::DorkError;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

const EXCLUDE_TAG: &str = "-";

/// Dork 查询构建器
///
/// 按调用顺序追加格式化后的标记，序列化时以单个空格连接。
/// 所有追加操作都返回 `&mut Self`，以便链式调用：
///
/// ```
/// use dorkrs::engines::google::Google;
/// use dorkrs::domain::dork::Dork;
///
/// let mut dork = Dork::<Google>::new();
/// dork.site("example.com").in_text("text");
///
/// assert_eq!(dork.to_string(), "site:example.com intext:\"text\"");
/// ```
///
/// 标记只会被追加，不会被重排、去重或原地修改。序列化是只读的，
/// 同一个构建器可以多次序列化并继续追加。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dork<E: Engine> {
    tokens: Vec<String>,
    engine: PhantomData<E>,
}

impl<E: Engine> Default for Dork<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Dork<E> {
    /// 创建空的构建器
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            engine: PhantomData,
        }
    }

    /// 已追加的标记
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn push(&mut self, token: String) -> &mut Self {
        trace!(engine = E::NAME, token = %token, "append dork token");
        self.tokens.push(token);
        self
    }

    /// 使用给定操作符格式化值并追加
    pub fn apply(&mut self, operator: &Operator, value: &str) -> &mut Self {
        self.push(operator.format(value))
    }

    /// 按名称在引擎操作符表中查找操作符并追加
    ///
    /// # Errors
    ///
    /// 引擎不支持该操作符时返回 `DorkError::UnsupportedOperator`
    pub fn apply_named(&mut self, name: &str, value: &str) -> Result<&mut Self, DorkError> {
        let operator = E::operator(name).ok_or_else(|| DorkError::UnsupportedOperator {
            engine: E::NAME,
            operator: name.to_string(),
        })?;
        Ok(self.apply(operator, value))
    }

    /// 原样追加值，不加前缀也不加引号
    pub fn plain(&mut self, value: impl AsRef<str>) -> &mut Self {
        self.push(value.as_ref().to_string())
    }

    /// 追加 OR 操作符
    pub fn or(&mut self) -> &mut Self {
        self.push(E::OR.to_string())
    }

    /// 排除另一个构建器的全部内容
    ///
    /// 追加 `-` 与其序列化结果拼接成的单个标记
    pub fn exclude(&mut self, other: &Dork<E>) -> &mut Self {
        let inner = other.to_query_string();
        self.push(format_token(EXCLUDE_TAG, &inner, false))
    }

    /// 排除单个值
    pub fn exclude_term(&mut self, value: impl AsRef<str>) -> &mut Self {
        self.push(format_token(EXCLUDE_TAG, value.as_ref(), false))
    }

    /// 将另一个构建器的内容放入括号，作为单个标记追加
    pub fn group(&mut self, other: &Dork<E>) -> &mut Self {
        let inner = other.to_query_string();
        self.push(format!("({})", inner))
    }

    /// 将所有标记转换为查询字符串
    pub fn to_query_string(&self) -> String {
        self.tokens.join(" ")
    }

    /// 查询参数形式 `{ "q": ... }`
    pub fn query_parameters(&self) -> QueryParameters {
        QueryParameters::new(self.to_query_string())
    }

    /// 转换为完整编码的搜索请求地址
    pub fn to_request_url(&self) -> String {
        format!("{}?{}", E::SEARCH_URL, self.query_parameters().encode())
    }
}

impl<E: SupportsAnd> Dork<E> {
    /// 追加 AND 操作符
    pub fn and(&mut self) -> &mut Self {
        self.push(E::AND.to_string())
    }
}

impl<E: Engine> fmt::Display for Dork<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
