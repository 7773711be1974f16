// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{error, info, warn};

/// 单次检查的诊断日志
///
/// 按时间顺序记录消息，同时以相应级别转发给 `tracing`
#[derive(Debug, Default, Clone)]
pub struct RunLog {
    entries: Vec<String>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.entries.push(message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.entries.push(message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 以换行符连接的全部消息
    pub fn joined(&self) -> String {
        self.entries.join("\n")
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
