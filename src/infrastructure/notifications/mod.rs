// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 通知模块
///
/// 提供通知契约的SMTP邮件实现
pub mod smtp_notifier;
