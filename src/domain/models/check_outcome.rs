// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 检查状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Success,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Success => "success",
            CheckStatus::Error => "error",
        }
    }
}

/// 单次检查的结果
///
/// 仅在内存中存在，不会持久化。序列化后即为HTTP响应体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_count: Option<usize>,
    pub logs: Vec<String>,
}

impl CheckOutcome {
    pub fn success(message: impl Into<String>, found_count: usize, logs: Vec<String>) -> Self {
        Self {
            status: CheckStatus::Success,
            message: message.into(),
            found_count: Some(found_count),
            logs,
        }
    }

    pub fn error(message: impl Into<String>, logs: Vec<String>) -> Self {
        Self {
            status: CheckStatus::Error,
            message: message.into(),
            found_count: None,
            logs,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CheckStatus::Success
    }
}
