// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::application::usecases::check_results::ResultChecker;

/// 执行一次成绩检查
///
/// 由外部定时器触发。无论检查结果如何都返回200，状态写在响应体中
pub async fn check_results(
    Extension(checker): Extension<Arc<ResultChecker>>,
) -> impl IntoResponse {
    let outcome = checker.run().await;
    info!(
        status = outcome.status.as_str(),
        found_count = ?outcome.found_count,
        "Result check finished"
    );
    (StatusCode::OK, Json(outcome))
}
