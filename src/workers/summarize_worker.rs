// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

use crate::domain::services::summarizer::SummarizeError;
use crate::infrastructure::llm::llama_cli::LlamaCliEngine;
use crate::infrastructure::llm::local::SummarizeJob;
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;

/// 摘要工作器
///
/// 从共享任务队列取任务，逐个运行模型进程并应答结果。
/// 队列关闭时正常退出。单个任务受运行时限约束，超时以
/// Timeout 应答而不影响后续任务
pub struct SummarizeWorker {
    id: usize,
    name: String,
    engine: Arc<LlamaCliEngine>,
    queue: Arc<Mutex<mpsc::Receiver<SummarizeJob>>>,
    job_timeout: Duration,
}

impl SummarizeWorker {
    /// 创建新的摘要工作器实例
    ///
    /// # 参数
    ///
    /// * `id` - 工作器编号
    /// * `engine` - 命令行模型引擎
    /// * `queue` - 共享任务队列接收端
    /// * `job_timeout` - 单个任务的运行上限
    pub fn new(
        id: usize,
        engine: Arc<LlamaCliEngine>,
        queue: Arc<Mutex<mpsc::Receiver<SummarizeJob>>>,
        job_timeout: Duration,
    ) -> Self {
        Self {
            id,
            name: format!("summarize-worker-{}", id),
            engine,
            queue,
            job_timeout,
        }
    }
}

#[async_trait]
impl Worker for SummarizeWorker {
    async fn run(&self) -> Result<(), WorkerError> {
        loop {
            let job = {
                let mut queue = self.queue.lock().await;
                queue.recv().await
            };

            let Some(job) = job else {
                info!("summarize worker {} shutting down", self.id);
                return Ok(());
            };

            let result = match tokio::time::timeout(self.job_timeout, self.engine.run(&job.text))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(SummarizeError::Timeout),
            };

            if let Err(err) = &result {
                warn!("summarize worker {} job failed: {}", self.id, err);
            }

            // 发起方可能已放弃等待，应答失败时结果直接丢弃
            let _ = job.reply.send(result);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
