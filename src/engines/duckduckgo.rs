// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::engine::{Engine, SupportsAnd};
use crate::domain::operator::Operator;
use crate::engines::common::{
    EXT, FEED, FILE_TYPE, HAS_FEED, IN_TEXT, IN_TITLE, IN_URL, LANGUAGE, SITE,
};

pub const ALL_IN_URL: Operator = Operator::quoted("allinurl", "allinurl:");
pub const REGION: Operator = Operator::unquoted("region", "region:");
pub const ALL_IN_TITLE: Operator = Operator::quoted("allintitle", "allintitle:");

/// DuckDuckGo 搜索引擎
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DuckDuckGo;

impl Engine for DuckDuckGo {
    const NAME: &'static str = "duckduckgo";
    const SEARCH_URL: &'static str = "https://duckduckgo.com/";
    const OR: &'static str = "|";
    const OPERATORS: &'static [Operator] = &[
        SITE,
        IN_URL,
        FILE_TYPE,
        EXT,
        IN_TITLE,
        IN_TEXT,
        ALL_IN_URL,
        REGION,
        FEED,
        HAS_FEED,
        LANGUAGE,
        ALL_IN_TITLE,
    ];

    fn and_literal() -> Option<&'static str> {
        Some(<Self as SupportsAnd>::AND)
    }
}

impl SupportsAnd for DuckDuckGo {
    const AND: &'static str = "+";
}

dork_operators!(DuckDuckGo {
    /// 只搜索指定站点的结果
    site => SITE,
    /// 搜索 URL 中包含关键词的页面
    in_url => IN_URL,
    /// 搜索指定文件类型
    file_type => FILE_TYPE,
    /// 搜索指定文件扩展名
    ext => EXT,
    /// 搜索标题中包含关键词的页面
    in_title => IN_TITLE,
    /// 搜索正文中包含关键词的页面
    in_text => IN_TEXT,
    /// 索引 URL 中必须包含全部关键词
    all_in_url => ALL_IN_URL,
    /// 按地区搜索
    ///
    /// 地区为 ISO 3166-1 国家代码，例如埃及为 `eg`，美国为 `us`
    region => REGION,
    /// 搜索与关键词相关的 RSS 源
    feed => FEED,
    /// 搜索同时包含关键词和 RSS/Atom 源的页面
    has_feed => HAS_FEED,
    /// 按语言搜索（ISO 639-1 代码）
    language => LANGUAGE,
    /// 标题中必须包含全部关键词
    all_in_title => ALL_IN_TITLE,
});
