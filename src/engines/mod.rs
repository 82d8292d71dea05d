// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 搜索引擎模块
//!
//! 包括Google、DuckDuckGo、Bing等搜索引擎的操作符词汇表

/// 为引擎的构建器生成具名操作符方法
///
/// 每个方法只是 `Dork::apply` 加上一个固定的操作符，格式化逻辑不在引擎间重复。
macro_rules! dork_operators {
    ($engine:ty { $( $(#[$meta:meta])* $method:ident => $operator:expr ),* $(,)? }) => {
        impl $crate::domain::dork::Dork<$engine> {
            $(
                $(#[$meta])*
                pub fn $method(&mut self, value: impl AsRef<str>) -> &mut Self {
                    self.apply(&$operator, value.as_ref())
                }
            )*
        }
    };
}

pub mod bing;
pub mod common;
pub mod duckduckgo;
pub mod factory;
pub mod google;

pub use bing::Bing;
pub use duckduckgo::DuckDuckGo;
pub use factory::{available_engine_types, new_bing, new_duckduckgo, new_google, EngineKind};
pub use google::Google;
