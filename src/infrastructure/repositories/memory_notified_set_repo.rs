// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::notified_set_repository::{NotifiedSetRepository, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;

/// 进程内的已通知集合仓库
///
/// 状态只在进程生命周期内保留，用于本地运行和测试
#[derive(Debug, Default)]
pub struct InMemoryNotifiedSetRepository {
    sets: DashMap<String, HashSet<String>>,
}

impl InMemoryNotifiedSetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置集合成员
    pub fn with_members<I, S>(key: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        repo.sets
            .insert(key.to_string(), members.into_iter().map(Into::into).collect());
        repo
    }

    /// 当前成员的快照
    pub fn snapshot(&self, key: &str) -> HashSet<String> {
        self.sets
            .get(key)
            .map(|set| set.value().clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl NotifiedSetRepository for InMemoryNotifiedSetRepository {
    async fn members(&self, key: &str) -> Result<HashSet<String>, StoreError> {
        Ok(self.snapshot(key))
    }

    async fn add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        self.sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }
}
