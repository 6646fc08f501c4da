// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::integration::helpers::{
    create_test_app, create_test_app_with_model, session_header, signup, FAILING_MODEL,
};

/// 手动提交后从公开主页读回的字段逐一相同
#[tokio::test]
async fn submitted_record_round_trips_through_profile() {
    let app = create_test_app().await;
    let token = signup(&app.server, "alice@example.com", Some("alice")).await;
    let (name, value) = session_header(&token);

    let response = app
        .server
        .post("/v1/records")
        .json(&json!({
            "title": "Deep Dive",
            "type": "article",
            "url": "https://example.com/deep-dive",
            "summary": "A hand-written summary."
        }))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let profile = app.server.get("/v1/profiles/alice").await;
    assert_eq!(profile.status_code(), StatusCode::OK);
    let body: Value = profile.json();
    assert_eq!(body["total"], 1);

    let item = &body["items"][0];
    assert_eq!(item["title"], "Deep Dive");
    assert_eq!(item["type"], "article");
    assert_eq!(item["url"], "https://example.com/deep-dive");
    assert_eq!(item["summary"], "A hand-written summary.");
}

/// 摘要留空时在写入前由引擎生成
#[tokio::test]
async fn blank_summary_is_generated_before_write() {
    let app = create_test_app().await;
    let token = signup(&app.server, "bob@example.com", Some("bob")).await;
    let (name, value) = session_header(&token);

    let response = app
        .server
        .post("/v1/records")
        .json(&json!({
            "title": "Untitled Find",
            "type": "article",
            "url": "https://example.com/find"
        }))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let summary = body["record"]["summary"].as_str().unwrap();
    // 回显模型证明摘要输入是"标题 URL"回退
    assert!(summary.contains("Untitled Find"));
    assert!(summary.contains("https://example.com/find"));
}

/// 摘要生成失败时提交中止，不产生部分写入
#[tokio::test]
async fn failed_generation_aborts_submission() {
    let app = create_test_app_with_model(FAILING_MODEL).await;
    let token = signup(&app.server, "carol@example.com", Some("carol")).await;

    let (name, value) = session_header(&token);
    let response = app
        .server
        .post("/v1/records")
        .json(&json!({
            "title": "Doomed",
            "type": "article",
            "url": "https://example.com/doomed"
        }))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let (name, value) = session_header(&token);
    let list = app.server.get("/v1/records").add_header(name, value).await;
    assert_eq!(list.status_code(), StatusCode::OK);
    let items: Value = list.json();
    assert_eq!(items.as_array().unwrap().len(), 0);
}

/// 重复URL的提交是提示性结果而不是错误
#[tokio::test]
async fn duplicate_submission_reports_exists() {
    let app = create_test_app().await;
    let token = signup(&app.server, "dave@example.com", Some("dave")).await;

    let payload = json!({
        "title": "Once",
        "type": "article",
        "url": "https://example.com/once",
        "summary": "s"
    });

    let (name, value) = session_header(&token);
    let first = app
        .server
        .post("/v1/records")
        .json(&payload)
        .add_header(name, value)
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let (name, value) = session_header(&token);
    let second = app
        .server
        .post("/v1/records")
        .json(&payload)
        .add_header(name, value)
        .await;
    assert_eq!(second.status_code(), StatusCode::OK);
    let body: Value = second.json();
    assert_eq!(body["status"], "exists");
    assert_eq!(body["notice"]["level"], "info");
}

/// 标题为空时校验失败
#[tokio::test]
async fn empty_title_is_rejected() {
    let app = create_test_app().await;
    let token = signup(&app.server, "erin@example.com", Some("erin")).await;
    let (name, value) = session_header(&token);

    let response = app
        .server
        .post("/v1/records")
        .json(&json!({
            "title": "",
            "type": "article",
            "url": "https://example.com/x",
            "summary": "s"
        }))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

/// 删除按 (user, url) 定位，再次删除为0条
#[tokio::test]
async fn delete_removes_record_by_url() {
    let app = create_test_app().await;
    let token = signup(&app.server, "frank@example.com", Some("frank")).await;

    let (name, value) = session_header(&token);
    app.server
        .post("/v1/records")
        .json(&json!({
            "title": "Temp",
            "type": "article",
            "url": "https://example.com/temp",
            "summary": "s"
        }))
        .add_header(name, value)
        .await;

    let (name, value) = session_header(&token);
    let deleted = app
        .server
        .delete("/v1/records")
        .add_query_param("url", "https://example.com/temp")
        .add_header(name, value)
        .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    let body: Value = deleted.json();
    assert_eq!(body["deleted"], 1);

    let (name, value) = session_header(&token);
    let again = app
        .server
        .delete("/v1/records")
        .add_query_param("url", "https://example.com/temp")
        .add_header(name, value)
        .await;
    let body: Value = again.json();
    assert_eq!(body["deleted"], 0);

    let (name, value) = session_header(&token);
    let list = app.server.get("/v1/records").add_header(name, value).await;
    let items: Value = list.json();
    assert_eq!(items.as_array().unwrap().len(), 0);
}

/// 删除只影响当前用户的记录
#[tokio::test]
async fn delete_does_not_touch_other_users() {
    let app = create_test_app().await;
    let alice = signup(&app.server, "alice2@example.com", Some("alice2")).await;
    let bob = signup(&app.server, "bob2@example.com", Some("bob2")).await;

    let payload = json!({
        "title": "Shared",
        "type": "article",
        "url": "https://example.com/shared",
        "summary": "s"
    });
    for token in [&alice, &bob] {
        let (name, value) = session_header(token);
        app.server
            .post("/v1/records")
            .json(&payload)
            .add_header(name, value)
            .await;
    }

    let (name, value) = session_header(&alice);
    app.server
        .delete("/v1/records")
        .add_query_param("url", "https://example.com/shared")
        .add_header(name, value)
        .await;

    let (name, value) = session_header(&bob);
    let list = app.server.get("/v1/records").add_header(name, value).await;
    let items: Value = list.json();
    assert_eq!(items.as_array().unwrap().len(), 1);
}
