// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MailSettings;
use crate::domain::services::notification_service::Notifier;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// 通知错误类型
#[derive(Error, Debug)]
pub enum NotificationError {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// 构建邮件失败
    #[error("Failed to build email message: {0}")]
    Message(String),
    /// SMTP投递失败
    #[error("SMTP send failed: {0}")]
    Transport(String),
}

struct Delivery {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

/// SMTP邮件通知器
///
/// 通过STARTTLS和账号认证投递纯文本邮件。邮件配置不完整时进入
/// 演练模式：只把主题和正文写入日志，`send` 返回 `false`
pub struct SmtpNotifier {
    delivery: Option<Delivery>,
}

impl SmtpNotifier {
    /// 创建新的SMTP通知器
    ///
    /// # 参数
    ///
    /// * `settings` - 邮件配置
    ///
    /// # 返回值
    ///
    /// * `Ok(SmtpNotifier)` - 通知器实例（配置不完整时为演练模式）
    /// * `Err(NotificationError)` - 地址无效或中继配置错误
    pub fn new(settings: &MailSettings) -> Result<Self, NotificationError> {
        if !settings.is_complete() {
            warn!("Email configuration incomplete. Emails will be logged instead of sent.");
            return Ok(Self::dry_run());
        }

        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        let credentials = Credentials::new(field(&settings.username), field(&settings.password));

        let from: Mailbox = field(&settings.sender)
            .parse()
            .map_err(|e| NotificationError::Configuration(format!("Invalid sender: {}", e)))?;
        let to: Mailbox = field(&settings.receiver)
            .parse()
            .map_err(|e| NotificationError::Configuration(format!("Invalid receiver: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_server)
            .map_err(|e| NotificationError::Configuration(format!("SMTP relay error: {}", e)))?
            .port(settings.smtp_port)
            .credentials(credentials)
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            delivery: Some(Delivery {
                transport,
                from,
                to,
            }),
        })
    }

    /// 不投递任何邮件的通知器
    pub fn dry_run() -> Self {
        Self { delivery: None }
    }

    pub fn is_dry_run(&self) -> bool {
        self.delivery.is_none()
    }

    async fn deliver(
        delivery: &Delivery,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(delivery.from.clone())
            .to(delivery.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotificationError::Message(e.to_string()))?;

        delivery
            .transport
            .send(message)
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, subject: &str, body: &str) -> bool {
        let Some(delivery) = &self.delivery else {
            info!("Email configuration incomplete. Skipping email.");
            info!("Subject: {}", subject);
            info!("Body:\n{}", body);
            return false;
        };

        match Self::deliver(delivery, subject, body).await {
            Ok(()) => {
                info!("Email sent successfully to {}", delivery.to);
                true
            }
            Err(e) => {
                error!("Error sending email: {}", e);
                false
            }
        }
    }
}
