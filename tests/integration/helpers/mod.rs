// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Extension;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use watchlistrs::application::use_cases::ingest_capture::IngestCaptureUseCase;
use watchlistrs::application::use_cases::submit_record::SubmitRecordUseCase;
use watchlistrs::config::settings::SummarizerSettings;
use watchlistrs::domain::services::capture_service::CaptureService;
use watchlistrs::domain::services::summarizer::{
    SummarizationService, Summarizer, SummarizerGate,
};
use watchlistrs::infrastructure::fetcher::PageFetcher;
use watchlistrs::infrastructure::llm::llama_cli::LlamaCliEngine;
use watchlistrs::infrastructure::llm::local::LocalSummarizer;
use watchlistrs::infrastructure::repositories::content_record_repo_impl::ContentRecordRepositoryImpl;
use watchlistrs::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use watchlistrs::presentation::routes;
use watchlistrs::workers::manager::WorkerManager;

/// 回显提示词的假模型：摘要即完整提示词，便于断言输入内容
pub const ECHO_PROMPT_MODEL: &str = "printf '%s\\n' \"$5\"";

/// 固定失败的假模型：非零退出并写标准错误
pub const FAILING_MODEL: &str = "echo \"model exploded\" >&2\nexit 1";

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub record_repo: Arc<ContentRecordRepositoryImpl>,
    // Keep temp dirs alive for the lifetime of the test
    db_dir: tempfile::TempDir,
    script_dir: tempfile::TempDir,
    worker_manager: WorkerManager,
}

/// 写一个可执行的假模型脚本，返回其路径
fn write_model_script(dir: &tempfile::TempDir, body: &str) -> String {
    let path = dir.path().join("fake-llama");
    let mut file = std::fs::File::create(&path).expect("create fake model script");
    writeln!(file, "#!/bin/sh").expect("write shebang");
    writeln!(file, "{}", body).expect("write script body");
    drop(file);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("make script executable");
    path.to_string_lossy().to_string()
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_model(ECHO_PROMPT_MODEL).await
}

pub async fn create_test_app_with_model(model_body: &str) -> TestApp {
    let db_dir = tempfile::tempdir().expect("create db tempdir");
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        db_dir.path().join("test.db").display()
    );
    let mut options = ConnectOptions::new(db_url);
    options.max_connections(5);
    let db = Arc::new(Database::connect(options).await.expect("connect sqlite"));
    Migrator::up(db.as_ref(), None).await.expect("run migrations");

    let script_dir = tempfile::tempdir().expect("create script tempdir");
    let command = write_model_script(&script_dir, model_body);
    let summarizer_settings = SummarizerSettings {
        mode: "local".to_string(),
        command,
        model_file: "test.gguf".to_string(),
        remote_url: None,
        pool_size: 2,
        queue_capacity: 8,
        ready_timeout_ms: 1000,
        job_timeout_secs: 5,
    };

    let record_repo = Arc::new(ContentRecordRepositoryImpl::new(db.clone()));
    let session_repo = Arc::new(SessionRepositoryImpl::new(db.clone()));

    let capture_service = Arc::new(CaptureService::new(vec![
        "localhost:3000/dashboard".to_string(),
        "google.com/search".to_string(),
    ]));
    let fetcher = Arc::new(PageFetcher::new().expect("build fetcher"));

    let gate = SummarizerGate::new();
    let llama = Arc::new(LlamaCliEngine::new(&summarizer_settings));
    let mut worker_manager = WorkerManager::new(llama, gate.clone(), &summarizer_settings);
    let queue = worker_manager.start_workers();
    let engine: Arc<dyn Summarizer> = Arc::new(LocalSummarizer::new(queue));
    let summarization = Arc::new(SummarizationService::new(
        gate,
        engine,
        Duration::from_millis(summarizer_settings.ready_timeout_ms),
    ));

    let ingest_use_case = Arc::new(IngestCaptureUseCase::new(
        record_repo.clone(),
        summarization.clone(),
    ));
    let submit_use_case = Arc::new(SubmitRecordUseCase::new(
        record_repo.clone(),
        summarization.clone(),
    ));

    let app = routes::routes()
        .layer(Extension(record_repo.clone()))
        .layer(Extension(session_repo))
        .layer(Extension(capture_service))
        .layer(Extension(fetcher))
        .layer(Extension(summarization))
        .layer(Extension(ingest_use_case))
        .layer(Extension(submit_use_case))
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CorsLayer::permissive());

    let server = TestServer::new(app).expect("start test server");

    TestApp {
        server,
        db,
        record_repo,
        db_dir,
        script_dir,
        worker_manager,
    }
}

/// 注册一个用户并返回会话令牌
pub async fn signup(server: &TestServer, email: &str, username: Option<&str>) -> String {
    let response = server
        .post("/v1/session")
        .json(&json!({ "email": email, "username": username, "password": "ignored" }))
        .await;
    assert_eq!(response.status_code(), 201, "signup should succeed");

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("token in response");
    Uuid::parse_str(token).expect("token should be a uuid");
    token.to_string()
}

/// 会话请求头
pub fn session_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-session-token"),
        HeaderValue::from_str(token).expect("header value"),
    )
}
