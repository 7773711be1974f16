// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::application::usecases::check_results::ResultChecker;
use crate::config::settings::{Settings, StoreSettings};
use crate::domain::repositories::notified_set_repository::NotifiedSetRepository;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::infrastructure::cache::redis_client::RedisClient;
use crate::infrastructure::notifications::smtp_notifier::SmtpNotifier;
use crate::infrastructure::repositories::memory_notified_set_repo::InMemoryNotifiedSetRepository;
use crate::infrastructure::repositories::redis_notified_set_repo::RedisNotifiedSetRepository;

const MEMORY_STORE_URL: &str = "memory://";

/// 根据配置创建已通知集合仓库
///
/// 未配置或URL无效时返回 `None`，检查器将在没有持久化状态的情况下运行
pub fn build_store(settings: &StoreSettings) -> Option<Arc<dyn NotifiedSetRepository>> {
    let url = settings.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;

    if url == MEMORY_STORE_URL {
        info!("Using in-process notified set; state lasts until restart");
        return Some(Arc::new(InMemoryNotifiedSetRepository::new()));
    }

    match RedisClient::new(url) {
        Ok(client) => {
            info!("Redis store configured");
            Some(Arc::new(RedisNotifiedSetRepository::new(client)))
        }
        Err(e) => {
            warn!("Error configuring store: {}. State will not be persistent.", e);
            None
        }
    }
}

/// 根据配置组装检查器
pub fn build_result_checker(settings: &Settings) -> Result<ResultChecker> {
    let notifier = SmtpNotifier::new(&settings.mail)?;
    Ok(ResultChecker::new(
        settings.checker_config(),
        Arc::new(ReqwestEngine),
        build_store(&settings.store),
        Arc::new(notifier),
    ))
}
