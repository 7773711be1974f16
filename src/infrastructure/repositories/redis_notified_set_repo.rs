// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::notified_set_repository::{NotifiedSetRepository, StoreError};
use crate::infrastructure::cache::redis_client::RedisClient;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// 基于Redis集合的已通知集合仓库
///
/// `SADD` 本身是幂等且可交换的，并发写入无需额外加锁
#[derive(Clone)]
pub struct RedisNotifiedSetRepository {
    client: RedisClient,
}

impl RedisNotifiedSetRepository {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

fn to_store_error(err: anyhow::Error) -> StoreError {
    match err.downcast_ref::<redis::RedisError>() {
        Some(e) if e.is_io_error() || e.is_connection_refusal() || e.is_timeout() => {
            StoreError::Connection(e.to_string())
        }
        _ => StoreError::Command(err.to_string()),
    }
}

#[async_trait]
impl NotifiedSetRepository for RedisNotifiedSetRepository {
    async fn members(&self, key: &str) -> Result<HashSet<String>, StoreError> {
        let members = self.client.smembers(key).await.map_err(to_store_error)?;
        debug!(key, count = members.len(), "Loaded notified set");
        Ok(members)
    }

    async fn add(&self, key: &str, member: &str) -> Result<(), StoreError> {
        let added = self
            .client
            .sadd(key, member)
            .await
            .map_err(to_store_error)?;
        if !added {
            debug!(key, member, "Member already present in notified set");
        }
        Ok(())
    }
}
