// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::integration::helpers::{create_test_app, session_header, signup};

const PAGE_HTML: &str = r#"
    <html>
        <head><title>Interesting Article</title></head>
        <body>
            <p>Some readable text.</p>
            <script>var hidden = true;</script>
        </body>
    </html>
"#;

fn handoff_data_from_location(location: &str) -> Value {
    let encoded = location
        .strip_prefix("/dashboard?data=")
        .expect("location should carry the data parameter");
    let decoded = urlencoding::decode(encoded).expect("data should be url-encoded");
    serde_json::from_str(&decoded).expect("data should be json")
}

/// 携带HTML的捕获重定向到带交接参数的仪表盘地址
#[tokio::test]
async fn capture_redirects_to_dashboard_handoff() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/capture")
        .json(&json!({ "url": "https://example.com/article", "html": PAGE_HTML }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("location utf-8")
        .to_string();

    let data = handoff_data_from_location(&location);
    assert_eq!(data["title"], "Interesting Article");
    assert_eq!(data["type"], "article");
    assert_eq!(data["url"], "https://example.com/article");
    let extract = data["extract"].as_str().expect("extract present");
    assert!(extract.contains("Some readable text."));
    assert!(!extract.contains("hidden"));
    assert!(extract.chars().count() <= 3000);
}

/// 被排除的URL直接吞掉，不产生交接
#[tokio::test]
async fn capture_of_excluded_url_is_suppressed() {
    let app = create_test_app().await;

    for url in [
        "http://localhost:3000/dashboard?data=abc",
        "https://www.google.com/search?q=rust",
    ] {
        let response = app
            .server
            .post("/v1/capture")
            .json(&json!({ "url": url, "html": "<html><body>x</body></html>" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    }
}

/// 捕获到收录的完整链路：交接地址被消费后产生一条记录
#[tokio::test]
async fn capture_handoff_feeds_dashboard_ingestion() {
    let app = create_test_app().await;
    let token = signup(&app.server, "pipeline@example.com", Some("pipeline")).await;

    let capture = app
        .server
        .post("/v1/capture")
        .json(&json!({ "url": "https://www.youtube.com/watch?v=clip", "html": PAGE_HTML }))
        .await;
    assert_eq!(capture.status_code(), StatusCode::SEE_OTHER);
    let location = capture
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("location utf-8")
        .to_string();

    let (name, value) = session_header(&token);
    let dashboard = app.server.get(&location).add_header(name, value).await;
    assert_eq!(dashboard.status_code(), StatusCode::OK);
    let body: Value = dashboard.json();

    assert_eq!(body["notice"]["level"], "success");
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
    assert_eq!(body["records"][0]["type"], "video");
    assert_eq!(body["records"][0]["title"], "Interesting Article");
}

/// 只携带URL时先抓取页面再提取
#[tokio::test]
async fn capture_without_html_fetches_page() {
    let app = create_test_app().await;

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_HTML))
        .mount(&mock_server)
        .await;

    let response = app
        .server
        .post("/v1/capture")
        .json(&json!({ "url": format!("{}/article", mock_server.uri()) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .expect("location header")
        .to_str()
        .expect("location utf-8")
        .to_string();
    let data = handoff_data_from_location(&location);
    assert_eq!(data["title"], "Interesting Article");
}

/// 页面无法抓取时返回上游错误
#[tokio::test]
async fn capture_of_unfetchable_page_fails() {
    let app = create_test_app().await;

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let response = app
        .server
        .post("/v1/capture")
        .json(&json!({ "url": format!("{}/gone", mock_server.uri()) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}
