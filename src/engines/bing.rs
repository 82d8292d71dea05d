// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::engine::Engine;
use crate::domain::operator::Operator;
use crate::engines::common::{
    EXT, FEED, FILE_TYPE, HAS_FEED, IN_ANCHOR, IN_TITLE, IP, LANGUAGE, SITE,
};

pub const IN_BODY: Operator = Operator::quoted("inbody", "inbody:");
pub const LOCATION: Operator = Operator::unquoted("loc", "loc:");
pub const URL: Operator = Operator::quoted("url", "url:");
pub const CONTAINS: Operator = Operator::unquoted("contains", "contains:");

/// Bing 搜索引擎
///
/// OR 使用单词 `OR`，没有 AND 操作符（Bing 默认以 AND 连接相邻关键词）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bing;

impl Engine for Bing {
    const NAME: &'static str = "bing";
    const SEARCH_URL: &'static str = "https://www.bing.com/search";
    const OR: &'static str = "OR";
    const OPERATORS: &'static [Operator] = &[
        SITE, FILE_TYPE, EXT, IN_TITLE, IN_BODY, IN_ANCHOR, IP, LANGUAGE, LOCATION, FEED,
        HAS_FEED, URL, CONTAINS,
    ];
}

dork_operators!(Bing {
    site => SITE,
    file_type => FILE_TYPE,
    ext => EXT,
    in_title => IN_TITLE,
    /// 搜索正文中包含关键词的页面
    in_body => IN_BODY,
    in_anchor => IN_ANCHOR,
    ip => IP,
    language => LANGUAGE,
    /// 按国家或地区代码搜索
    location => LOCATION,
    feed => FEED,
    has_feed => HAS_FEED,
    /// 检查页面是否已被 Bing 索引
    url => URL,
    /// 搜索链接到指定文件类型的页面
    contains => CONTAINS,
});
