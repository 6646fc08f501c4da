// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::integration::helpers::{create_test_app, create_test_app_with_model, FAILING_MODEL};

/// 缺少文本时返回400
#[tokio::test]
async fn summarize_without_text_returns_400() {
    let app = create_test_app().await;

    let response = app.server.post("/summarize").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No text provided");
}

/// 空白文本等同于缺少文本
#[tokio::test]
async fn summarize_with_blank_text_returns_400() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/summarize")
        .json(&json!({ "text": "   \n " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No text provided");
}

/// 正常摘要：输入在提示词前被归一化
#[tokio::test]
async fn summarize_normalizes_and_prompts_model() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/summarize")
        .json(&json!({ "text": "  hello\n\n   world " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    // 回显模型把完整提示词作为摘要返回
    assert_eq!(
        body["summary"],
        "Summarize this text in 2-3 sentences: hello world"
    );
}

/// 模型进程非零退出时返回500并携带标准错误
#[tokio::test]
async fn summarize_surfaces_model_stderr_on_failure() {
    let app = create_test_app_with_model(FAILING_MODEL).await;

    let response = app
        .server
        .post("/summarize")
        .json(&json!({ "text": "some text" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Failed to generate summary");
    assert_eq!(body["details"].as_str().unwrap().trim(), "model exploded");
}
