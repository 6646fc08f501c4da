// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::settings::SummarizerSettings;
use crate::domain::services::summarizer::SummarizerGate;
use crate::infrastructure::llm::llama_cli::LlamaCliEngine;
use crate::infrastructure::llm::local::SummarizeJob;
use crate::workers::summarize_worker::SummarizeWorker;
use crate::workers::worker::Worker;

/// 工作管理器
///
/// 创建有界摘要任务队列、启动固定数量的工作器，并在工作池
/// 就绪后发布摘要能力的就绪信号
pub struct WorkerManager {
    engine: Arc<LlamaCliEngine>,
    gate: SummarizerGate,
    pool_size: usize,
    queue_capacity: usize,
    job_timeout: Duration,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerManager {
    /// 创建新的工作管理器
    ///
    /// # 参数
    ///
    /// * `engine` - 命令行模型引擎
    /// * `gate` - 摘要能力就绪门闩
    /// * `settings` - 摘要引擎配置
    pub fn new(engine: Arc<LlamaCliEngine>, gate: SummarizerGate, settings: &SummarizerSettings) -> Self {
        Self {
            engine,
            gate,
            pool_size: settings.pool_size.max(1),
            queue_capacity: settings.queue_capacity.max(1),
            job_timeout: Duration::from_secs(settings.job_timeout_secs),
            handles: Vec::new(),
        }
    }

    /// 启动工作进程
    ///
    /// 创建任务队列并启动配置数量的工作器，随后发布就绪信号
    ///
    /// # 返回值
    ///
    /// 返回摘要任务队列的发送端
    pub fn start_workers(&mut self) -> mpsc::Sender<SummarizeJob> {
        let (tx, rx) = mpsc::channel(self.queue_capacity);
        let queue = Arc::new(Mutex::new(rx));

        for id in 0..self.pool_size {
            let worker =
                SummarizeWorker::new(id, self.engine.clone(), queue.clone(), self.job_timeout);
            let handle = tokio::spawn(async move {
                if let Err(err) = worker.run().await {
                    error!("{} exited with error: {}", worker.name(), err);
                }
            });
            self.handles.push(handle);
        }

        info!("Started {} summarize workers", self.pool_size);
        self.gate.publish_ready();
        tx
    }

    /// 关闭工作进程
    pub fn shutdown(&mut self) {
        info!("Shutting down workers...");
        for handle in &self.handles {
            handle.abort();
        }
        self.handles.clear();
        info!("Workers shut down successfully");
    }
}
