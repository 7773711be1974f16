// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const RESULT_CHECKS_TOTAL: &str = "result_checks_total";
pub const NEW_RESULTS_TOTAL: &str = "new_results_total";
pub const NOTIFICATIONS_TOTAL: &str = "notifications_total";

/// 初始化指标系统
///
/// 未启用时不安装任何记录器，计数器调用为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics address {}: {}. Metrics exporter disabled.",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(RESULT_CHECKS_TOTAL, "Total number of result checks, by status");
    describe_counter!(
        NEW_RESULTS_TOTAL,
        "Total number of new matching results detected"
    );
    describe_counter!(
        NOTIFICATIONS_TOTAL,
        "Total number of notification attempts, by outcome"
    );

    info!("Metrics exporter listening on {}", addr);
}
