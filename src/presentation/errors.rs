// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::content_record_repository::RepositoryError;
use crate::domain::services::summarizer::SummarizeError;
use crate::infrastructure::fetcher::FetchError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = self.0.downcast_ref::<SummarizeError>() {
            return summarize_error_response(err);
        }

        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            let status = match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::AlreadyExists => StatusCode::CONFLICT,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return (status, Json(json!({ "error": err.to_string() }))).into_response();
        }

        if let Some(err) = self.0.downcast_ref::<FetchError>() {
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response();
        }

        if self.0.downcast_ref::<validator::ValidationErrors>().is_some() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.0.to_string() })),
            )
                .into_response();
        }

        let error_message = self.0.to_string();

        // 检查是否为验证错误（包含特定关键词）
        let status = if error_message.contains("cannot be empty")
            || error_message.contains("invalid")
            || error_message.contains("required")
            || error_message.contains("validation")
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

fn summarize_error_response(err: &SummarizeError) -> Response {
    match err {
        SummarizeError::ProcessFailed { stderr } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to generate summary",
                "details": stderr
            })),
        )
            .into_response(),
        SummarizeError::Spawn(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to generate summary",
                "details": details
            })),
        )
            .into_response(),
        SummarizeError::NotReady => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        SummarizeError::Timeout => (
            StatusCode::GATEWAY_TIMEOUT,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        SummarizeError::Unavailable => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
        SummarizeError::Remote(_) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
