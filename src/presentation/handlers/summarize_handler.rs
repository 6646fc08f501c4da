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
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

use crate::application::dto::summarize_request::SummarizeRequestDto;
use crate::application::dto::summarize_response::SummarizeResponseDto;
use crate::domain::services::summarizer::SummarizationService;
use crate::presentation::errors::AppError;

/// 文本摘要端点
///
/// 接受 `{text}`，经摘要引擎生成摘要后返回 `{summary}`。
/// 缺少文本时返回400，引擎进程失败时返回500并携带标准错误
pub async fn summarize(
    Extension(summarizer): Extension<Arc<SummarizationService>>,
    Json(payload): Json<SummarizeRequestDto>,
) -> Result<Response, AppError> {
    let Some(text) = payload.text.filter(|text| !text.trim().is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No text provided" })),
        )
            .into_response());
    };

    let summary = summarizer.summarize(&text).await?;

    Ok(Json(SummarizeResponseDto { summary }).into_response())
}
