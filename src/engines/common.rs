// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 多个引擎共用的操作符

use crate::domain::operator::Operator;

pub const SITE: Operator = Operator::unquoted("site", "site:");
pub const IN_URL: Operator = Operator::quoted("inurl", "inurl:");
pub const FILE_TYPE: Operator = Operator::quoted("filetype", "filetype:");
pub const EXT: Operator = Operator::unquoted("ext", "ext:");
pub const IN_TITLE: Operator = Operator::quoted("intitle", "intitle:");
pub const IN_TEXT: Operator = Operator::quoted("intext", "intext:");
pub const IN_ANCHOR: Operator = Operator::quoted("inanchor", "inanchor:");
pub const IP: Operator = Operator::unquoted("ip", "ip:");
pub const FEED: Operator = Operator::unquoted("feed", "feed:");
pub const HAS_FEED: Operator = Operator::quoted("hasfeed", "hasfeed:");
pub const LANGUAGE: Operator = Operator::unquoted("language", "language:");
