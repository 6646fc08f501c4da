// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{
    capture_handler, dashboard_handler, profile_handler, record_handler, session_handler,
    summarize_handler,
};
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/summarize", post(summarize_handler::summarize))
        .route("/v1/capture", post(capture_handler::capture))
        .route("/dashboard", get(dashboard_handler::dashboard))
        .route(
            "/v1/records",
            get(record_handler::list_records)
                .post(record_handler::create_record)
                .delete(record_handler::delete_record),
        )
        .route("/v1/profiles", get(profile_handler::list_profiles))
        .route("/v1/profiles/{username}", get(profile_handler::get_profile))
        .route(
            "/v1/session",
            post(session_handler::create_session)
                .get(session_handler::current_session)
                .delete(session_handler::delete_session),
        )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
