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

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::session::Session;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;

static HEADER_NAME: &str = "x-session-token";

/// 当前用户提取器
///
/// 从 X-Session-Token 请求头解析令牌并在会话仓库中解析身份。
/// 不做口令校验：令牌能找到会话即视为已登录
pub struct CurrentUser(pub Session);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(repo) = parts.extensions.get::<Arc<SessionRepositoryImpl>>().cloned() else {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Session store not configured" })),
            )
                .into_response());
        };

        let Some(header) = parts.headers.get(HEADER_NAME) else {
            return Err(unauthorized("Not logged in"));
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value).ok());
        let Some(token) = token else {
            return Err(unauthorized("Missing or invalid X-Session-Token header"));
        };

        match repo.find_by_token(token).await {
            Ok(Some(session)) => Ok(CurrentUser(session)),
            Ok(None) => Err(unauthorized("Not logged in")),
            Err(err) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()),
        }
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": message })),
    )
        .into_response()
}
