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
    extract::{Extension, Json, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::application::dto::record_response::{NoticeDto, RecordDto};
use crate::application::dto::submit_request::SubmitRequestDto;
use crate::application::use_cases::ingest_capture::IngestOutcome;
use crate::application::use_cases::submit_record::SubmitRecordUseCase;
use crate::domain::repositories::content_record_repository::ContentRecordRepository;
use crate::infrastructure::repositories::content_record_repo_impl::ContentRecordRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session::CurrentUser;

/// 列出当前用户的全部记录
pub async fn list_records(
    CurrentUser(session): CurrentUser,
    Extension(records): Extension<Arc<ContentRecordRepositoryImpl>>,
) -> Result<Response, AppError> {
    let items = records.find_by_user(&session.email).await?;
    let items: Vec<RecordDto> = items.into_iter().map(RecordDto::from).collect();

    Ok(Json(items).into_response())
}

/// 手动提交一条记录
///
/// 摘要留空时先生成摘要；生成失败则整个提交失败，不产生部分写入。
/// 重复URL不是错误，以提示性通知返回
pub async fn create_record(
    CurrentUser(session): CurrentUser,
    Extension(use_case): Extension<Arc<SubmitRecordUseCase>>,
    Json(payload): Json<SubmitRequestDto>,
) -> Result<Response, AppError> {
    payload.validate()?;

    match use_case.execute(&session, payload).await? {
        IngestOutcome::Added(record) => Ok((
            StatusCode::CREATED,
            Json(json!({
                "status": "added",
                "notice": NoticeDto::success("Content added successfully!"),
                "record": RecordDto::from(record)
            })),
        )
            .into_response()),
        IngestOutcome::Duplicate => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "exists",
                "notice": NoticeDto::info("Content already exists in your list!")
            })),
        )
            .into_response()),
    }
}

/// 删除记录的查询参数
#[derive(Debug, Deserialize)]
pub struct DeleteRecordQuery {
    /// 要删除的记录URL
    pub url: String,
}

/// 删除当前用户的一条记录
///
/// 按 (user, url) 定位；URL不存在时删除0条，同样视为成功
pub async fn delete_record(
    CurrentUser(session): CurrentUser,
    Query(query): Query<DeleteRecordQuery>,
    Extension(records): Extension<Arc<ContentRecordRepositoryImpl>>,
) -> Result<Response, AppError> {
    let deleted = records.delete(&session.email, &query.url).await?;
    info!(user = %session.email, url = %query.url, deleted, "content record deleted");

    Ok(Json(json!({ "deleted": deleted })).into_response())
}
