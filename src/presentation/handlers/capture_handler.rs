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

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::application::dto::capture_request::CaptureRequestDto;
use crate::domain::models::capture::HandoffPayload;
use crate::domain::services::capture_service::CaptureService;
use crate::infrastructure::fetcher::PageFetcher;
use crate::presentation::errors::AppError;

/// 页面捕获端点（中继）
///
/// 提取捕获数据并重定向到携带 `?data=` 交接参数的仪表盘地址。
/// 即发即弃：被排除的URL直接以 204 吞掉，不报错。
/// 同一时刻只有最新一次捕获的交接地址有效，不做排队
pub async fn capture(
    Extension(capture_service): Extension<Arc<CaptureService>>,
    Extension(fetcher): Extension<Arc<PageFetcher>>,
    Json(payload): Json<CaptureRequestDto>,
) -> Result<Response, AppError> {
    payload.validate()?;

    if capture_service.is_excluded(&payload.url) {
        debug!(url = %payload.url, "capture suppressed for excluded url");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let html = match payload.html {
        Some(html) => html,
        None => fetcher.fetch(&payload.url).await?,
    };

    let page = capture_service.extract(&html, &payload.url);
    metrics::counter!("pages_captured_total").increment(1);

    let handoff = HandoffPayload::from(page);
    let target = handoff.to_dashboard_url()?;

    Ok(Redirect::to(&target).into_response())
}
