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
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::application::dto::record_response::SessionResponseDto;
use crate::application::dto::session_request::SessionRequestDto;
use crate::domain::models::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::session::CurrentUser;

/// 注册/登录端点
///
/// 不做口令校验：保存 {email, username} 身份并返回新令牌
pub async fn create_session(
    Extension(sessions): Extension<Arc<SessionRepositoryImpl>>,
    Json(payload): Json<SessionRequestDto>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let session = Session::new(payload.email, payload.username);
    sessions.create(&session).await?;
    info!(user = %session.email, "session created");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponseDto {
            token: session.token,
            email: session.email.clone(),
            username: session.display_name().to_string(),
        }),
    )
        .into_response())
}

/// 当前会话端点
pub async fn current_session(CurrentUser(session): CurrentUser) -> Response {
    Json(SessionResponseDto {
        token: session.token,
        email: session.email.clone(),
        username: session.display_name().to_string(),
    })
    .into_response()
}

/// 登出端点
pub async fn delete_session(
    CurrentUser(session): CurrentUser,
    Extension(sessions): Extension<Arc<SessionRepositoryImpl>>,
) -> Result<Response, AppError> {
    sessions.delete(session.token).await?;
    info!(user = %session.email, "session deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}
