// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 集成测试主模块
///
/// 通过wiremock提供成绩页面，用内存存储和记录型通知器替代外部服务
mod api_test;
mod scenarios_test;
