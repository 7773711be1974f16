// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含成绩检查用例和组件组装
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现页面抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如Redis、SMTP、指标等
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应
pub mod presentation;

/// 工具模块
///
/// 提供运行日志和遥测初始化
pub mod utils;
