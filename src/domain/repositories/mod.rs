// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供（Redis、内存）。
///
/// 包含的仓库接口：
/// - 已通知集合仓库（notified_set_repository）：记录已经发送过通知的结果标识
pub mod notified_set_repository;
