// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

/// 通知发送特质
///
/// 尝试投递一条通知并返回是否成功。实现不得返回错误或panic，
/// 任何失败都应记录日志并返回 `false`
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 发送通知
    ///
    /// # 参数
    ///
    /// * `subject` - 主题
    /// * `body` - 纯文本正文
    ///
    /// # 返回值
    ///
    /// 投递成功返回 `true`
    async fn send(&self, subject: &str, body: &str) -> bool;
}
