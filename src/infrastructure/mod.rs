// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 缓存（cache）：Redis客户端
/// - 指标（metrics）：Prometheus指标导出
/// - 通知（notifications）：SMTP邮件通知
/// - 仓库实现（repositories）：已通知集合的Redis和内存实现
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod cache;
pub mod metrics;
pub mod notifications;
pub mod repositories;
