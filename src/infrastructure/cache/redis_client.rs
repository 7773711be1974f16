// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use redis::AsyncCommands;
use std::collections::HashSet;

/// Redis客户端
///
/// 提供对Redis集合的异步操作接口
#[derive(Clone)]
pub struct RedisClient {
    /// Redis客户端
    client: redis::Client,
}

impl RedisClient {
    /// 创建新的Redis客户端实例
    ///
    /// 只解析连接URL，不会立即建立连接
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    ///
    /// # 返回值
    ///
    /// * `Ok(RedisClient)` - Redis客户端实例
    /// * `Err(anyhow::Error)` - URL无效
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }

    /// 获取集合的全部成员
    ///
    /// # 参数
    ///
    /// * `key` - 集合键
    ///
    /// # 返回值
    ///
    /// * `Ok(HashSet<String>)` - 成员集合，键不存在时为空
    /// * `Err(anyhow::Error)` - 连接或命令错误
    pub async fn smembers(&self, key: &str) -> Result<HashSet<String>> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let members: HashSet<String> = con.smembers(key).await?;
        Ok(members)
    }

    /// 向集合添加成员
    ///
    /// # 参数
    ///
    /// * `key` - 集合键
    /// * `member` - 成员
    ///
    /// # 返回值
    ///
    /// * `Ok(bool)` - 成员是否为新添加的
    /// * `Err(anyhow::Error)` - 连接或命令错误
    pub async fn sadd(&self, key: &str, member: &str) -> Result<bool> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let added: i64 = con.sadd(key, member).await?;
        Ok(added > 0)
    }
}
