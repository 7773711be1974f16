// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use validator::{Validate, ValidateEmail, ValidationError};

/// 应用程序配置设置
///
/// 包含检查器、邮件、存储、服务器和指标的所有配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// 检查器配置
    #[validate(nested)]
    pub checker: CheckerSettings,
    /// 邮件配置
    #[validate(nested)]
    pub mail: MailSettings,
    /// 持久化存储配置
    #[serde(default)]
    pub store: StoreSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 检查器配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckerSettings {
    /// 成绩页面URL
    #[validate(url)]
    pub target_url: String,
    /// 课程名称搜索词（不区分大小写）
    #[validate(length(min = 1, message = "search_term cannot be empty"))]
    pub search_term: String,
    /// 已通知集合的键
    #[validate(length(min = 1, message = "store_key cannot be empty"))]
    pub store_key: String,
    /// 成绩表的id属性
    #[validate(length(min = 1, message = "table_id cannot be empty"))]
    pub table_id: String,
    /// 页面抓取超时时间（秒）
    #[validate(range(min = 1, max = 600))]
    pub fetch_timeout_secs: u64,
    /// 邮件主题前缀
    pub subject_prefix: String,
}

/// 邮件配置设置
///
/// 凭据相关字段都是可选的，缺少任意一项时通知器只记录日志不发送
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MailSettings {
    /// SMTP服务器主机
    pub smtp_server: String,
    /// SMTP服务器端口
    pub smtp_port: u16,
    /// SMTP用户名
    pub username: Option<String>,
    /// SMTP密码
    pub password: Option<String>,
    /// 发件人地址
    #[validate(custom(function = "blank_or_email"))]
    pub sender: Option<String>,
    /// 收件人地址
    #[validate(custom(function = "blank_or_email"))]
    pub receiver: Option<String>,
}

/// 空白地址视为未配置（通知器进入dry-run），非空时必须是合法邮箱
fn blank_or_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

impl MailSettings {
    /// 凭据和收发件人是否都已配置且非空
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.password, &self.sender, &self.receiver]
            .iter()
            .all(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

/// 持久化存储配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    /// 存储连接URL（`redis://`、`rediss://` 或 `memory://`）
    pub url: Option<String>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动Prometheus导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

/// 传给检查器的显式配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub target_url: String,
    pub search_term: String,
    pub store_key: String,
    pub table_id: String,
    pub fetch_timeout: Duration,
    pub subject_prefix: String,
}

impl From<&CheckerSettings> for CheckerConfig {
    fn from(settings: &CheckerSettings) -> Self {
        Self {
            target_url: settings.target_url.clone(),
            search_term: settings.search_term.clone(),
            store_key: settings.store_key.clone(),
            table_id: settings.table_id.clone(),
            fetch_timeout: Duration::from_secs(settings.fetch_timeout_secs),
            subject_prefix: settings.subject_prefix.clone(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从 `config/` 目录和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir("config")
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序：默认值 → `{dir}/default` → `{dir}/{APP_ENVIRONMENT}` → `EXAMWATCH__*` 环境变量
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Checker defaults
            .set_default(
                "checker.target_url",
                "https://cms2results.tnmgrmuexam.ac.in/#/ExamResult",
            )?
            .set_default("checker.search_term", "Pharm D")?
            .set_default("checker.store_key", "notified_exam_results_set_pharm_d")?
            .set_default("checker.table_id", "table")?
            .set_default("checker.fetch_timeout_secs", 30)?
            .set_default("checker.subject_prefix", "[Exam Results]")?
            // Mail defaults
            .set_default("mail.smtp_server", "smtp.gmail.com")?
            .set_default("mail.smtp_port", 587)?
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Metrics defaults
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(Environment::with_prefix("EXAMWATCH").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;
        Ok(settings)
    }

    /// 检查器配置
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig::from(&self.checker)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
