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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、摘要引擎和内容捕获等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 摘要引擎配置
    pub summarizer: SummarizerSettings,
    /// 内容捕获配置
    pub capture: CaptureSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 对外访问地址，用于识别本应用自身的页面
    pub public_url: String,
}

/// 摘要引擎配置设置
#[derive(Debug, Deserialize)]
pub struct SummarizerSettings {
    /// 引擎模式 (local, remote)
    pub mode: String,
    /// 本地模型命令行程序
    pub command: String,
    /// 本地模型文件
    pub model_file: String,
    /// 远程摘要服务地址 (当 mode=remote 时使用)
    pub remote_url: Option<String>,
    /// 本地工作器数量
    pub pool_size: usize,
    /// 待处理摘要任务队列容量
    pub queue_capacity: usize,
    /// 等待引擎就绪的上限（毫秒）
    pub ready_timeout_ms: u64,
    /// 单个摘要任务的运行上限（秒）
    pub job_timeout_secs: u64,
}

/// 内容捕获配置设置
#[derive(Debug, Deserialize)]
pub struct CaptureSettings {
    /// 不允许捕获的URL标记（子串匹配）
    pub excluded_url_markers: Vec<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.public_url", "http://localhost:3000")?
            // Default DB pool settings
            .set_default("database.url", "sqlite://watchlistrs.db?mode=rwc")?
            .set_default("database.max_connections", 20)?
            .set_default("database.min_connections", 2)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default Summarizer settings
            .set_default("summarizer.mode", "local")?
            .set_default("summarizer.command", "llama-cli")?
            .set_default("summarizer.model_file", "llama-2-7b-chat.gguf")?
            .set_default("summarizer.pool_size", 2)?
            .set_default("summarizer.queue_capacity", 32)?
            .set_default("summarizer.ready_timeout_ms", 5000)?
            .set_default("summarizer.job_timeout_secs", 120)?
            // Default Capture settings
            .set_default("capture.excluded_url_markers", vec!["google.com/search"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("WATCHLISTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
