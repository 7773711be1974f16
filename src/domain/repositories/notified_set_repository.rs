// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 无法连接到存储
    #[error("Connection error: {0}")]
    Connection(String),
    /// 命令执行失败
    #[error("Command error: {0}")]
    Command(String),
}

/// 已通知集合仓库特质
///
/// 只追加的持久化集合，记录已经发送过通知的结果标识。
/// 成员一旦写入就不会被本系统删除。`add` 必须是幂等的，
/// 重复添加同一成员不会产生任何效果
#[async_trait]
pub trait NotifiedSetRepository: Send + Sync {
    /// 读取集合的全部成员
    async fn members(&self, key: &str) -> Result<HashSet<String>, StoreError>;

    /// 向集合添加一个成员
    async fn add(&self, key: &str, member: &str) -> Result<(), StoreError>;
}
