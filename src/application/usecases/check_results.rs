// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::sync::Arc;

use metrics::counter;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::config::settings::CheckerConfig;
use crate::domain::models::check_outcome::CheckOutcome;
use crate::domain::models::result_row::ResultRow;
use crate::domain::repositories::notified_set_repository::NotifiedSetRepository;
use crate::domain::services::notification_service::Notifier;
use crate::domain::services::result_table_parser::{ResultTableParser, TableScan};
use crate::engines::traits::{FetchRequest, PageFetcher};
use crate::infrastructure::metrics::{NEW_RESULTS_TOTAL, NOTIFICATIONS_TOTAL, RESULT_CHECKS_TOTAL};
use crate::utils::run_log::RunLog;

const DETAILS_DIVIDER: &str = "\n---\n";

// === Section: Use Case Definition ===

/// 成绩检查用例
///
/// 执行一次完整的 抓取 → 解析 → 与已通知集合比对 → 通知 → 持久化 流程。
/// 只有页面抓取失败会让结果变为 `error`，存储读写和邮件发送的失败
/// 都只记录在日志中。
pub struct ResultChecker {
    config: CheckerConfig,
    fetcher: Arc<dyn PageFetcher>,
    store: Option<Arc<dyn NotifiedSetRepository>>,
    notifier: Arc<dyn Notifier>,
    parser: ResultTableParser,
}

// === Section: Implementation ===

impl ResultChecker {
    /// 创建检查器
    ///
    /// `store` 为 `None` 时每次检查都视为没有已通知记录，并且不做任何写入
    pub fn new(
        config: CheckerConfig,
        fetcher: Arc<dyn PageFetcher>,
        store: Option<Arc<dyn NotifiedSetRepository>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let parser = ResultTableParser::new(config.table_id.clone());
        Self {
            config,
            fetcher,
            store,
            notifier,
            parser,
        }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// 执行一次检查
    pub async fn run(&self) -> CheckOutcome {
        let span = info_span!("result_check", run_id = %Uuid::new_v4());
        let outcome = self.check().instrument(span).await;
        counter!(RESULT_CHECKS_TOTAL, "status" => outcome.status.as_str()).increment(1);
        outcome
    }

    async fn check(&self) -> CheckOutcome {
        let config = &self.config;
        let mut log = RunLog::new();
        log.info(format!(
            "Starting check for {} at {}",
            config.search_term, config.target_url
        ));

        let mut notified = self.load_notified(&mut log).await;

        let request = FetchRequest {
            url: config.target_url.clone(),
            timeout: config.fetch_timeout,
        };
        let html = match self.fetcher.fetch(&request).await {
            Ok(response) => response.content,
            Err(e) => {
                log.error(format!("Error fetching website: {}", e));
                let subject = format!("{} Website Check Failed", config.subject_prefix);
                let body = format!("Could not fetch {}.\nError: {}", config.target_url, e);
                self.notify(&subject, &body, &mut log).await;
                return CheckOutcome::error("Failed to fetch website", log.into_entries());
            }
        };

        let rows = self.scan(&html, &mut log);

        let mut details = Vec::new();
        for row in rows.iter().filter(|row| row.matches(&config.search_term)) {
            let identifier = row.identifier();
            if notified.contains(&identifier) {
                log.info(format!("Already notified for: {}", identifier));
                continue;
            }

            log.info(format!(
                "Found new '{}' result: {}",
                config.search_term, identifier
            ));
            details.push(row.details());
            self.record(&identifier, &mut log).await;
            notified.insert(identifier);
        }

        if details.is_empty() {
            log.info(format!(
                "No new '{}' results found this time.",
                config.search_term
            ));
            return CheckOutcome::success("No new results found.", 0, log.into_entries());
        }

        counter!(NEW_RESULTS_TOTAL).increment(details.len() as u64);

        let subject = format!(
            "{} New '{}' Results Published!",
            config.subject_prefix, config.search_term
        );
        let body = self.compose_body(&details, &log);
        self.notify(&subject, &body, &mut log).await;

        CheckOutcome::success(
            "New results found and notified.",
            details.len(),
            log.into_entries(),
        )
    }

    async fn load_notified(&self, log: &mut RunLog) -> HashSet<String> {
        let Some(store) = &self.store else {
            log.warn("Store not configured. State will not be persistent.");
            return HashSet::new();
        };

        match store.members(&self.config.store_key).await {
            Ok(members) => {
                log.info(format!(
                    "Loaded {} notified results from store.",
                    members.len()
                ));
                members
            }
            Err(e) => {
                log.warn(format!(
                    "Error reading from store: {}. Proceeding without persisted state for this run.",
                    e
                ));
                HashSet::new()
            }
        }
    }

    fn scan(&self, html: &str, log: &mut RunLog) -> Vec<ResultRow> {
        match self.parser.parse(html) {
            TableScan::MissingTable => {
                log.warn(format!(
                    "Could not find the results table (table with id='{}').",
                    self.config.table_id
                ));
                Vec::new()
            }
            TableScan::MissingBody => {
                log.warn("Could not find the table body (tbody) within the results table.");
                Vec::new()
            }
            TableScan::Rows { total, rows } => {
                log.info(format!("Found {} rows in the results table.", total));
                if total == 0 {
                    log.info("No rows found in the table body.");
                }
                rows
            }
        }
    }

    async fn record(&self, identifier: &str, log: &mut RunLog) {
        let Some(store) = &self.store else {
            return;
        };

        match store.add(&self.config.store_key, identifier).await {
            Ok(()) => log.info(format!("Added '{}' to notified set.", identifier)),
            Err(e) => log.error(format!(
                "Error writing to store for '{}': {}",
                identifier, e
            )),
        }
    }

    fn compose_body(&self, details: &[String], log: &RunLog) -> String {
        let config = &self.config;
        let mut body = format!("Your results are available on: {}\n\n", config.target_url);
        body.push_str(&format!(
            "New '{}' results found on {}:\n\n",
            config.search_term, config.target_url
        ));
        body.push_str(&details.join(DETAILS_DIVIDER));
        body.push_str("\n\nFull Logs:\n");
        body.push_str(&log.joined());
        body
    }

    async fn notify(&self, subject: &str, body: &str, log: &mut RunLog) -> bool {
        let sent = self.notifier.send(subject, body).await;
        counter!(NOTIFICATIONS_TOTAL, "outcome" => if sent { "sent" } else { "failed" })
            .increment(1);
        if !sent {
            log.warn("Notification email could not be delivered.");
        }
        sent
    }
}

#[cfg(test)]
#[path = "check_results_test.rs"]
mod tests;
