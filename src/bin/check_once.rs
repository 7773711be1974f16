// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 执行一次成绩检查并把结果以JSON打印到标准输出

use examwatch::application::bootstrap::build_result_checker;
use examwatch::config::settings::Settings;
use examwatch::utils::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let settings = Settings::new()?;
    let checker = build_result_checker(&settings)?;

    let outcome = checker.run().await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
