// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;
use thiserror::Error;

/// 页面抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch page: {0}")]
    Request(#[from] reqwest::Error),
}

/// 页面抓取器
///
/// 捕获请求只携带URL时，用它取回页面HTML。提取本身保持纯函数，
/// 抓取是独立的获取步骤
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// 创建新的页面抓取器实例
    ///
    /// # 返回值
    ///
    /// * `Ok(PageFetcher)` - 抓取器实例
    /// * `Err(FetchError)` - HTTP客户端构建失败
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("watchlistrs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// 抓取页面HTML
    ///
    /// # 参数
    ///
    /// * `url` - 页面URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面HTML
    /// * `Err(FetchError)` - 请求失败或响应状态非2xx
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
