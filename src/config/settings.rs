// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 应用程序配置设置
///
/// 包含默认引擎、输出格式和日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 引擎配置
    pub engine: EngineSettings,
    /// 输出配置
    pub output: OutputSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 引擎配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// 未指定 `--engine` 时使用的搜索引擎
    pub default: String,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 输出格式 (string, url, json)
    pub format: String,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// tracing 过滤规则
    pub filter: String,
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "warn,dorkrs=info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和 `DORKRS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DORKRS").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置，缺失的项使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let logging = LoggingSettings::default();
        Config::builder()
            .set_default("engine.default", "google")?
            .set_default("output.format", "string")?
            .set_default("logging.filter", logging.filter)?
            .set_default("logging.json", logging.json)
    }
}
