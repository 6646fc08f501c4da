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
    extract::{Extension, Query},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, warn};

use crate::application::dto::record_response::{DashboardResponseDto, NoticeDto, RecordDto};
use crate::application::use_cases::ingest_capture::{IngestCaptureUseCase, IngestOutcome};
use crate::domain::models::capture::HandoffPayload;
use crate::domain::repositories::content_record_repository::ContentRecordRepository;
use crate::infrastructure::repositories::content_record_repo_impl::ContentRecordRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session::CurrentUser;

/// 仪表盘查询参数
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// 交接参数：URL编码的捕获载荷JSON
    pub data: Option<String>,
}

/// 仪表盘端点
///
/// 携带 `?data=` 交接参数时先执行一次收录（去重、摘要、落库），
/// 参数在本次请求中被消费，响应里的规范地址不再包含它。
/// 收录失败不影响页面本身：以错误通知的形式呈现，记录不写入
pub async fn dashboard(
    CurrentUser(session): CurrentUser,
    Query(query): Query<DashboardQuery>,
    Extension(ingest): Extension<Arc<IngestCaptureUseCase>>,
    Extension(records): Extension<Arc<ContentRecordRepositoryImpl>>,
) -> Result<Response, AppError> {
    let mut notice = None;

    if let Some(data) = query.data {
        notice = Some(match serde_json::from_str::<HandoffPayload>(&data) {
            Err(err) => {
                warn!(user = %session.email, "failed to parse handoff payload: {}", err);
                NoticeDto::error("Failed to add content. Please try again.")
            }
            Ok(payload) => match ingest.execute(&session, payload).await {
                Ok(IngestOutcome::Added(_)) => NoticeDto::success("Content added successfully!"),
                Ok(IngestOutcome::Duplicate) => {
                    NoticeDto::info("Content already exists in your list!")
                }
                Err(err) => {
                    error!(user = %session.email, "failed to ingest capture: {}", err);
                    NoticeDto::error("Failed to summarize content. Please try again.")
                }
            },
        });
    }

    let items = records.find_by_user(&session.email).await?;

    Ok(Json(DashboardResponseDto {
        user: session.display_name().to_string(),
        records: items.into_iter().map(RecordDto::from).collect(),
        notice,
        location: "/dashboard".to_string(),
    })
    .into_response())
}
