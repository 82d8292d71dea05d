// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use dorkrs::config::settings::Settings;
use dorkrs::presentation::cli::{self, Cli};
use dorkrs::utils::telemetry;
use tracing::debug;

/// 主函数
///
/// 加载配置、初始化日志并输出构建好的查询
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    debug!(?settings, "configuration loaded");

    // 3. Build and print the query
    let output = cli::run(&cli, &settings)?;
    println!("{}", output);

    Ok(())
}
