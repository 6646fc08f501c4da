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

use axum::extract::DefaultBodyLimit;
use axum::Extension;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use watchlistrs::application::use_cases::ingest_capture::IngestCaptureUseCase;
use watchlistrs::application::use_cases::submit_record::SubmitRecordUseCase;
use watchlistrs::config::settings::Settings;
use watchlistrs::domain::services::capture_service::CaptureService;
use watchlistrs::domain::services::summarizer::{
    SummarizationService, Summarizer, SummarizerGate,
};
use watchlistrs::infrastructure::database::connection;
use watchlistrs::infrastructure::fetcher::PageFetcher;
use watchlistrs::infrastructure::llm::llama_cli::LlamaCliEngine;
use watchlistrs::infrastructure::llm::local::LocalSummarizer;
use watchlistrs::infrastructure::llm::remote::RemoteSummarizer;
use watchlistrs::infrastructure::repositories::content_record_repo_impl::ContentRecordRepositoryImpl;
use watchlistrs::infrastructure::repositories::session_repo_impl::SessionRepositoryImpl;
use watchlistrs::presentation::routes;
use watchlistrs::utils::telemetry;
use watchlistrs::workers::manager::WorkerManager;

use migration::{Migrator, MigratorTrait};

/// 请求体大小上限
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting watchlistrs...");

    // Initialize Prometheus Metrics
    watchlistrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Repositories
    let record_repo = Arc::new(ContentRecordRepositoryImpl::new(db.clone()));
    let session_repo = Arc::new(SessionRepositoryImpl::new(db.clone()));

    // 5. Initialize Capture components
    let mut excluded_markers = settings.capture.excluded_url_markers.clone();
    excluded_markers.push(format!(
        "{}/dashboard",
        settings.server.public_url.trim_end_matches('/')
    ));
    let capture_service = Arc::new(CaptureService::new(excluded_markers));
    let fetcher = Arc::new(PageFetcher::new()?);

    // 6. Initialize Summarization capability
    // The gate is published once the configured engine is ready; consumers
    // await it with a bounded timeout instead of polling.
    let gate = SummarizerGate::new();
    let mut worker_manager = None;
    let engine: Arc<dyn Summarizer> = match settings.summarizer.mode.as_str() {
        "remote" => {
            let base_url = settings.summarizer.remote_url.clone().ok_or_else(|| {
                anyhow::anyhow!("summarizer.remote_url is required when summarizer.mode is remote")
            })?;
            let engine = RemoteSummarizer::new(
                base_url,
                Duration::from_secs(settings.summarizer.job_timeout_secs),
            )?;
            gate.publish_ready();
            info!("Remote summarizer configured");
            Arc::new(engine)
        }
        _ => {
            let llama = Arc::new(LlamaCliEngine::new(&settings.summarizer));
            let mut manager = WorkerManager::new(llama, gate.clone(), &settings.summarizer);
            let queue = manager.start_workers();
            worker_manager = Some(manager);
            Arc::new(LocalSummarizer::new(queue))
        }
    };
    let summarization = Arc::new(SummarizationService::new(
        gate,
        engine,
        Duration::from_millis(settings.summarizer.ready_timeout_ms),
    ));

    // 7. Initialize Use Cases
    let ingest_use_case = Arc::new(IngestCaptureUseCase::new(
        record_repo.clone(),
        summarization.clone(),
    ));
    let submit_use_case = Arc::new(SubmitRecordUseCase::new(
        record_repo.clone(),
        summarization.clone(),
    ));

    // 8. Start HTTP server
    let app = routes::routes()
        .layer(Extension(record_repo))
        .layer(Extension(session_repo))
        .layer(Extension(capture_service))
        .layer(Extension(fetcher))
        .layer(Extension(summarization))
        .layer(Extension(ingest_use_case))
        .layer(Extension(submit_use_case))
        .layer(Extension(settings.clone()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = signal::ctrl_c().await {
                tracing::error!("Unable to listen for shutdown signal: {}", err);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Some(mut manager) = worker_manager {
        manager.shutdown();
    }

    Ok(())
}
