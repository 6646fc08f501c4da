// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::domain::services::summarizer::{SummarizeError, Summarizer};

/// 摘要任务
///
/// 经由有界队列提交给工作池，结果通过一次性通道应答
pub struct SummarizeJob {
    /// 已归一化的输入文本
    pub text: String,
    /// 结果应答通道
    pub reply: oneshot::Sender<Result<String, SummarizeError>>,
}

/// 本地摘要引擎客户端
///
/// 把摘要请求提交到有界任务队列，由固定数量的工作器消费。
/// 队列已满时提交方在此挂起等待，形成自然的背压
pub struct LocalSummarizer {
    queue: mpsc::Sender<SummarizeJob>,
}

impl LocalSummarizer {
    /// 创建新的本地摘要引擎客户端
    ///
    /// # 参数
    ///
    /// * `queue` - 摘要任务队列发送端
    pub fn new(queue: mpsc::Sender<SummarizeJob>) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl Summarizer for LocalSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let job = SummarizeJob {
            text: text.to_string(),
            reply: reply_tx,
        };

        self.queue
            .send(job)
            .await
            .map_err(|_| SummarizeError::Unavailable)?;

        reply_rx.await.map_err(|_| SummarizeError::Unavailable)?
    }
}
