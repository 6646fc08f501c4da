// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use crate::domain::services::summarizer::{SummarizeError, Summarizer};

/// 远程摘要引擎
///
/// 把摘要请求转发给一个远程的 `POST /summarize` 服务
pub struct RemoteSummarizer {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSummarizer {
    /// 创建新的远程摘要引擎实例
    ///
    /// # 参数
    ///
    /// * `base_url` - 远程服务基础地址
    /// * `timeout` - 单次请求超时
    ///
    /// # 返回值
    ///
    /// * `Ok(RemoteSummarizer)` - 引擎实例
    /// * `Err(SummarizeError)` - HTTP客户端构建失败
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SummarizeError::Remote(err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Summarizer for RemoteSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let url = format!("{}/summarize", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    SummarizeError::Timeout
                } else {
                    SummarizeError::Remote(err.to_string())
                }
            })?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|err| SummarizeError::Remote(err.to_string()))?;

        if !status.is_success() {
            let detail = body["details"]
                .as_str()
                .or_else(|| body["error"].as_str())
                .unwrap_or("unknown error");
            return Err(SummarizeError::Remote(format!("{}: {}", status, detail)));
        }

        body["summary"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| SummarizeError::Remote("missing summary in response".to_string()))
    }
}
