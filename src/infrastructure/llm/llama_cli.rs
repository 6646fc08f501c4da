// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tokio::process::Command;

use crate::config::settings::SummarizerSettings;
use crate::domain::services::summarizer::SummarizeError;

/// 摘要提示词前缀
const PROMPT_PREFIX: &str = "Summarize this text in 2-3 sentences: ";

/// 模型进程无输出时的缺省摘要
const FALLBACK_SUMMARY: &str = "Summary not available";

/// 命令行模型引擎
///
/// 每次调用启动一个模型进程，成功退出时取标准输出的最后一个
/// 非空行作为摘要，非零退出时携带标准错误返回
pub struct LlamaCliEngine {
    /// 模型命令行程序
    command: String,
    /// 模型文件
    model_file: String,
}

impl LlamaCliEngine {
    /// 创建新的命令行模型引擎实例
    ///
    /// # 参数
    ///
    /// * `settings` - 摘要引擎配置
    pub fn new(settings: &SummarizerSettings) -> Self {
        Self {
            command: settings.command.clone(),
            model_file: settings.model_file.clone(),
        }
    }

    /// 运行一次摘要
    ///
    /// # 参数
    ///
    /// * `text` - 已归一化的输入文本
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 摘要文本
    /// * `Err(SummarizeError)` - 进程启动失败或非零退出
    pub async fn run(&self, text: &str) -> Result<String, SummarizeError> {
        let output = Command::new(&self.command)
            .arg("chat")
            .arg("--model")
            .arg(&self.model_file)
            .arg("--prompt")
            .arg(format!("{}{}", PROMPT_PREFIX, text))
            .output()
            .await
            .map_err(|err| SummarizeError::Spawn(err.to_string()))?;

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let summary = stdout
                .lines()
                .rev()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or(FALLBACK_SUMMARY)
                .to_string();
            Ok(summary)
        } else {
            Err(SummarizeError::ProcessFailed {
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }
}
