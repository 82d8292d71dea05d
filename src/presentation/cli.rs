// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::dork::Dork;
use crate::domain::engine::Engine;
use crate::domain::parameters::QueryParameters;
use crate::engines::{Bing, DuckDuckGo, EngineKind, Google};
use crate::utils::errors::DorkError;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "dorkrs", version, about = "Build search engine dork queries")]
pub struct Cli {
    /// 搜索引擎 (google, duckduckgo, bing)
    #[arg(short, long)]
    pub engine: Option<String>,

    /// 输出格式
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// 列出引擎支持的操作符
    #[arg(long)]
    pub list_operators: bool,

    /// 查询项：`name=value`、`plain=value`、`exclude=value`、`or`、`and` 或普通关键词
    pub terms: Vec<String>,
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 纯查询字符串
    String,
    /// 编码后的搜索地址
    Url,
    /// JSON 对象
    Json,
}

impl FromStr for OutputFormat {
    type Err = DorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" => Ok(Self::String),
            "url" => Ok(Self::Url),
            "json" => Ok(Self::Json),
            other => Err(DorkError::InvalidArgument(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

/// 一个命令行查询项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Operator { name: String, value: String },
    Plain(String),
    Exclude(String),
    Or,
    And,
}

impl FromStr for Term {
    type Err = DorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some(("", _)) => Err(DorkError::InvalidArgument(format!(
                "missing operator name in '{}'",
                s
            ))),
            Some((name, value)) => Ok(match name.to_lowercase().as_str() {
                "plain" => Self::Plain(value.to_string()),
                "exclude" => Self::Exclude(value.to_string()),
                _ => Self::Operator {
                    name: name.to_string(),
                    value: value.to_string(),
                },
            }),
            None if s.eq_ignore_ascii_case("or") => Ok(Self::Or),
            None if s.eq_ignore_ascii_case("and") => Ok(Self::And),
            None => Ok(Self::Plain(s.to_string())),
        }
    }
}

/// JSON 输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutput {
    pub engine: String,
    pub query: String,
    pub parameters: QueryParameters,
    pub url: String,
}

/// 按顺序将查询项应用到构建器
pub fn build_query<E: Engine>(terms: &[Term]) -> Result<Dork<E>, DorkError> {
    let mut dork = Dork::<E>::new();
    for term in terms {
        match term {
            Term::Operator { name, value } => {
                dork.apply_named(name, value)?;
            }
            Term::Plain(value) => {
                dork.plain(value);
            }
            Term::Exclude(value) => {
                dork.exclude_term(value);
            }
            Term::Or => {
                dork.or();
            }
            Term::And => {
                let literal = E::and_literal().ok_or_else(|| DorkError::UnsupportedOperator {
                    engine: E::NAME,
                    operator: "and".to_string(),
                })?;
                dork.plain(literal);
            }
        }
    }
    Ok(dork)
}

fn render<E: Engine>(terms: &[Term], format: OutputFormat) -> Result<String, DorkError> {
    let dork = build_query::<E>(terms)?;
    debug!(engine = E::NAME, tokens = dork.len(), "dork built");

    Ok(match format {
        OutputFormat::String => dork.to_query_string(),
        OutputFormat::Url => dork.to_request_url(),
        OutputFormat::Json => serde_json::to_string_pretty(&QueryOutput {
            engine: E::NAME.to_string(),
            query: dork.to_query_string(),
            parameters: dork.query_parameters(),
            url: dork.to_request_url(),
        })?,
    })
}

fn list_operators(kind: EngineKind) -> String {
    let mut lines: Vec<String> = kind
        .operators()
        .iter()
        .map(|op| {
            let shape = if op.quoted { "quoted" } else { "unquoted" };
            format!("{}\t{}\t{}", op.name, op.tag, shape)
        })
        .collect();
    lines.push(format!("or\t{}\tliteral", kind.or_literal()));
    if let Some(and) = kind.and_literal() {
        lines.push(format!("and\t{}\tliteral", and));
    }
    lines.join("\n")
}

/// 执行命令行请求，返回要打印的输出
pub fn run(cli: &Cli, settings: &Settings) -> Result<String, DorkError> {
    let kind: EngineKind = cli
        .engine
        .as_deref()
        .unwrap_or(&settings.engine.default)
        .parse()?;
    let format = match cli.format {
        Some(format) => format,
        None => settings.output.format.parse()?,
    };
    info!(engine = %kind, ?format, "building dork query");

    if cli.list_operators {
        return Ok(list_operators(kind));
    }

    let terms = cli
        .terms
        .iter()
        .map(|term| term.parse::<Term>())
        .collect::<Result<Vec<_>, _>>()?;

    match kind {
        EngineKind::Google => render::<Google>(&terms, format),
        EngineKind::DuckDuckGo => render::<DuckDuckGo>(&terms, format),
        EngineKind::Bing => render::<Bing>(&terms, format),
    }
}
