// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::content_record::ContentType;

/// 提取文本的最大字符数
///
/// 提取文本只作为摘要输入使用，不入库
pub const EXTRACT_MAX_CHARS: usize = 3000;

/// 页面捕获结果
///
/// 从一个已加载页面同步提取出的结构化数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedPage {
    /// 页面标题
    pub title: String,
    /// 内容类型，由URL推断
    pub content_type: ContentType,
    /// 页面URL
    pub url: String,
    /// 页面可见文本，最多 EXTRACT_MAX_CHARS 个字符
    pub text: String,
}

/// 跨上下文交接载荷
///
/// 捕获结果在仪表盘路由上以 `?data=<URL编码JSON>` 的形式交接，
/// 参数被消费一次后即从可见地址中去除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffPayload {
    /// 页面标题
    pub title: String,
    /// 内容类型
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// 页面URL
    pub url: String,
    /// 提取文本（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

impl From<CapturedPage> for HandoffPayload {
    fn from(page: CapturedPage) -> Self {
        let extract = if page.text.is_empty() {
            None
        } else {
            Some(page.text)
        };
        Self {
            title: page.title,
            content_type: page.content_type,
            url: page.url,
            extract,
        }
    }
}

impl HandoffPayload {
    /// 序列化为仪表盘交接URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 形如 `/dashboard?data=...` 的相对URL
    /// * `Err(serde_json::Error)` - 载荷序列化失败
    pub fn to_dashboard_url(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!("/dashboard?data={}", urlencoding::encode(&json)))
    }

    /// 摘要输入文本
    ///
    /// 有提取文本时使用提取文本，否则回退为"标题 URL"
    pub fn summary_input(&self) -> String {
        match &self.extract {
            Some(extract) if !extract.trim().is_empty() => extract.clone(),
            _ => format!("{} {}", self.title, self.url),
        }
    }
}
