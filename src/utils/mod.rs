// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// - 运行日志（run_log）：单次检查的有序诊断消息
/// - 遥测（telemetry）：tracing订阅器初始化
pub mod run_log;
pub mod telemetry;
