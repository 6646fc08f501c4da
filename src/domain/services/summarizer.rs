// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

use crate::utils::text_processing::normalize_whitespace;

/// 摘要错误类型
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// 等待摘要引擎就绪超时
    #[error("Summarizer not initialized in time")]
    NotReady,

    /// 引擎不可用（任务队列已关闭或应答被丢弃）
    #[error("Summarizer unavailable")]
    Unavailable,

    /// 单个摘要任务超时
    #[error("Summarization timed out")]
    Timeout,

    /// 模型进程启动失败
    #[error("Failed to spawn summarizer process: {0}")]
    Spawn(String),

    /// 模型进程非零退出
    #[error("Summarizer process failed")]
    ProcessFailed {
        /// 进程标准错误输出
        stderr: String,
    },

    /// 远程摘要服务错误
    #[error("Remote summarizer error: {0}")]
    Remote(String),
}

/// 摘要引擎特质
///
/// 摘要能力的抽象：接收一段文本，返回一段简短的自然语言摘要。
/// 失败不做重试，由发起方决定如何呈现
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// 生成摘要
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// 摘要引擎就绪门闩
///
/// 引擎提供方在完成初始化后发布一次就绪信号；消费方在调用前
/// 等待该信号，并带有超时上限。就绪信号只会从未就绪变为就绪
#[derive(Clone)]
pub struct SummarizerGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl SummarizerGate {
    /// 创建一个未就绪的门闩
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            inner: Arc::new(GateInner { tx, rx }),
        }
    }

    /// 发布就绪信号
    pub fn publish_ready(&self) {
        self.inner.tx.send_replace(true);
    }

    /// 是否已就绪
    pub fn is_ready(&self) -> bool {
        *self.inner.rx.borrow()
    }

    /// 等待就绪
    ///
    /// 已就绪时立即返回；超过 `timeout` 仍未就绪时返回 NotReady
    ///
    /// # 参数
    ///
    /// * `timeout` - 等待上限
    pub async fn wait_ready(&self, timeout: Duration) -> Result<(), SummarizeError> {
        let mut rx = self.inner.rx.clone();
        if *rx.borrow() {
            return Ok(());
        }

        let result = match tokio::time::timeout(timeout, rx.wait_for(|ready| *ready)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(_)) | Err(_) => Err(SummarizeError::NotReady),
        };
        result
    }
}

impl Default for SummarizerGate {
    fn default() -> Self {
        Self::new()
    }
}

/// 摘要服务
///
/// 摘要调用的统一入口：等待引擎就绪、归一化输入文本、
/// 调用配置的引擎并记录指标
pub struct SummarizationService {
    gate: SummarizerGate,
    engine: Arc<dyn Summarizer>,
    ready_timeout: Duration,
}

impl SummarizationService {
    /// 创建新的摘要服务实例
    ///
    /// # 参数
    ///
    /// * `gate` - 就绪门闩
    /// * `engine` - 摘要引擎
    /// * `ready_timeout` - 等待就绪的上限
    pub fn new(gate: SummarizerGate, engine: Arc<dyn Summarizer>, ready_timeout: Duration) -> Self {
        Self {
            gate,
            engine,
            ready_timeout,
        }
    }

    /// 生成摘要
    ///
    /// # 参数
    ///
    /// * `text` - 待摘要文本
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 摘要文本
    /// * `Err(SummarizeError)` - 引擎未就绪或摘要失败
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        self.gate.wait_ready(self.ready_timeout).await?;

        let normalized = normalize_whitespace(text);
        match self.engine.summarize(&normalized).await {
            Ok(summary) => {
                metrics::counter!("summaries_generated_total").increment(1);
                Ok(summary)
            }
            Err(err) => {
                metrics::counter!("summaries_failed_total").increment(1);
                Err(err)
            }
        }
    }
}
