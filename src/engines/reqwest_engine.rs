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

use crate::engines::traits::{FetchError, FetchRequest, FetchResponse, PageFetcher};
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

const USER_AGENT: &str = concat!("examwatch/", env!("CARGO_PKG_VERSION"));

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎
#[derive(Debug, Default, Clone)]
pub struct ReqwestEngine;

impl ReqwestEngine {
    fn classify(error: reqwest::Error, request: &FetchRequest) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(request.timeout)
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::RequestFailed(error)
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP GET抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 2xx响应
    /// * `Err(FetchError)` - 网络错误、超时或非2xx状态
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request.timeout)
            .build()?;

        let start = Instant::now();
        let response = client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| Self::classify(e, request))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content = response
            .text()
            .await
            .map_err(|e| Self::classify(e, request))?;

        let response_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            engine = self.name(),
            url = %request.url,
            status = status.as_u16(),
            bytes = content.len(),
            response_time_ms,
            "Fetched page"
        );

        Ok(FetchResponse {
            status_code: status.as_u16(),
            content,
            response_time_ms,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
