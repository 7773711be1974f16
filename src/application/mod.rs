// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含编排领域服务和外部协作者的用例实现，以及根据配置组装它们的启动代码
pub mod bootstrap;
pub mod usecases;
