// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 成绩行（result_row）：从成绩表中解析出的一行及其自然键
/// - 检查结果（check_outcome）：单次检查返回给调用方的结构化结果
pub mod check_outcome;
pub mod result_row;
