// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::engine::{Engine, SupportsAnd};
use crate::domain::operator::Operator;
use crate::engines::common::{EXT, FILE_TYPE, IN_ANCHOR, IN_TEXT, IN_TITLE, IN_URL, IP, SITE};

pub const CACHE: Operator = Operator::quoted("cache", "cache:");
pub const RELATED: Operator = Operator::quoted("related", "related:");
pub const BOOK: Operator = Operator::quoted("book", "book:");
pub const MAPS: Operator = Operator::unquoted("maps", "maps:");
pub const ALL_IN_TEXT: Operator = Operator::quoted("allintext", "allintext:");
pub const INFO: Operator = Operator::quoted("info", "info:");

/// Google 搜索引擎
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Google;

impl Engine for Google {
    const NAME: &'static str = "google";
    const SEARCH_URL: &'static str = "https://www.google.com/search";
    const OR: &'static str = "|";
    const OPERATORS: &'static [Operator] = &[
        SITE,
        IN_URL,
        FILE_TYPE,
        CACHE,
        RELATED,
        EXT,
        IN_TITLE,
        IN_TEXT,
        BOOK,
        IP,
        MAPS,
        ALL_IN_TEXT,
        INFO,
        IN_ANCHOR,
    ];

    fn and_literal() -> Option<&'static str> {
        Some(<Self as SupportsAnd>::AND)
    }
}

impl SupportsAnd for Google {
    const AND: &'static str = "+";
}

dork_operators!(Google {
    /// 只搜索指定站点的结果
    site => SITE,
    /// 搜索 URL 中包含关键词的页面
    in_url => IN_URL,
    /// 搜索指定文件类型
    file_type => FILE_TYPE,
    /// 显示 Google 缓存中的页面版本
    cache => CACHE,
    /// 列出与指定页面“相似”的页面
    related => RELATED,
    /// 搜索指定文件扩展名
    ext => EXT,
    /// 搜索标题中包含关键词的页面
    in_title => IN_TITLE,
    /// 搜索正文中包含关键词的页面
    in_text => IN_TEXT,
    /// 搜索与关键词相关的书籍
    book => BOOK,
    /// 搜索托管在指定 IP 上的站点
    ip => IP,
    /// 搜索与关键词相关的地图
    maps => MAPS,
    /// 正文必须包含全部关键词
    all_in_text => ALL_IN_TEXT,
    /// Information Google has about a page: similar pages, cached version and linking sites
    info => INFO,
    /// 搜索链接锚文本
    in_anchor => IN_ANCHOR,
});
