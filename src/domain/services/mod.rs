// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 通知服务（notification_service）：通知渠道的抽象契约
/// - 成绩表解析（result_table_parser）：从HTML中定位成绩表并读取行
pub mod notification_service;
pub mod result_table_parser;
