// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::integration::helpers::{
    create_test_app, create_test_app_with_model, session_header, signup, FAILING_MODEL,
};

fn handoff_json(title: &str, content_type: &str, url: &str, extract: Option<&str>) -> String {
    let mut payload = json!({ "title": title, "type": content_type, "url": url });
    if let Some(extract) = extract {
        payload["extract"] = json!(extract);
    }
    payload.to_string()
}

/// 交接参数触发一次完整收录
#[tokio::test]
async fn dashboard_ingests_handoff_payload() {
    let app = create_test_app().await;
    let token = signup(&app.server, "alice@example.com", Some("alice")).await;
    let (name, value) = session_header(&token);

    let data = handoff_json(
        "A Video",
        "video",
        "https://www.youtube.com/watch?v=abc",
        Some("the extracted page text"),
    );
    let response = app
        .server
        .get("/dashboard")
        .add_query_param("data", &data)
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["notice"]["level"], "success");
    assert_eq!(body["location"], "/dashboard");
    assert_eq!(body["records"].as_array().unwrap().len(), 1);

    let record = &body["records"][0];
    assert_eq!(record["title"], "A Video");
    assert_eq!(record["type"], "video");
    assert_eq!(record["url"], "https://www.youtube.com/watch?v=abc");
    assert_eq!(record["username"], "alice");
    // 摘要由提取文本生成，而不是标题+URL回退
    assert!(record["summary"]
        .as_str()
        .unwrap()
        .contains("the extracted page text"));
}

/// 同一 (user, url) 第二次收录只产生提示，不再写入
#[tokio::test]
async fn dashboard_ingestion_is_idempotent_per_url() {
    let app = create_test_app().await;
    let token = signup(&app.server, "bob@example.com", Some("bob")).await;

    let data = handoff_json("An Article", "article", "https://example.com/article", None);
    for expected_level in ["success", "info"] {
        let (name, value) = session_header(&token);
        let response = app
            .server
            .get("/dashboard")
            .add_query_param("data", &data)
            .add_header(name, value)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["notice"]["level"], expected_level);
        assert_eq!(body["records"].as_array().unwrap().len(), 1);
    }
}

/// 无交接参数时仪表盘只返回记录列表
#[tokio::test]
async fn dashboard_without_data_param_has_no_notice() {
    let app = create_test_app().await;
    let token = signup(&app.server, "carol@example.com", None).await;
    let (name, value) = session_header(&token);

    let response = app.server.get("/dashboard").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body.get("notice").is_none());
    assert_eq!(body["records"].as_array().unwrap().len(), 0);
    // 无用户名时回退为邮箱本地部分
    assert_eq!(body["user"], "carol");
}

/// 交接参数无法解析时呈现错误提示，不写入记录
#[tokio::test]
async fn dashboard_surfaces_parse_error_without_writing() {
    let app = create_test_app().await;
    let token = signup(&app.server, "dave@example.com", Some("dave")).await;
    let (name, value) = session_header(&token);

    let response = app
        .server
        .get("/dashboard")
        .add_query_param("data", "not valid json")
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["notice"]["level"], "error");
    assert_eq!(body["records"].as_array().unwrap().len(), 0);
}

/// 摘要失败时呈现错误提示，不写入记录
#[tokio::test]
async fn dashboard_surfaces_summarize_failure_without_writing() {
    let app = create_test_app_with_model(FAILING_MODEL).await;
    let token = signup(&app.server, "erin@example.com", Some("erin")).await;
    let (name, value) = session_header(&token);

    let data = handoff_json("Broken", "article", "https://example.com/broken", None);
    let response = app
        .server
        .get("/dashboard")
        .add_query_param("data", &data)
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["notice"]["level"], "error");
    assert_eq!(body["records"].as_array().unwrap().len(), 0);
}
