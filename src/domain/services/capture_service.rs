// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};

use crate::domain::models::capture::{CapturedPage, EXTRACT_MAX_CHARS};
use crate::domain::models::content_record::ContentType;
use crate::utils::text_processing::{normalize_whitespace, truncate_chars};

/// 捕获服务
///
/// 负责从页面HTML中同步提取结构化捕获数据。提取是纯函数：
/// 不做网络访问，除读取文档外没有副作用
pub struct CaptureService {
    /// 不允许捕获的URL标记，子串匹配
    excluded_markers: Vec<String>,
}

impl CaptureService {
    /// 创建新的捕获服务实例
    ///
    /// # 参数
    ///
    /// * `excluded_markers` - 不允许捕获的URL标记列表
    pub fn new(excluded_markers: Vec<String>) -> Self {
        Self { excluded_markers }
    }

    /// 判断URL是否被排除
    ///
    /// 应用自身的仪表盘页面与搜索引擎结果页不做捕获，
    /// 避免递归或无意义的收录
    pub fn is_excluded(&self, url: &str) -> bool {
        self.excluded_markers
            .iter()
            .any(|marker| url.contains(marker.as_str()))
    }

    /// 提取页面捕获数据
    ///
    /// # 参数
    ///
    /// * `html` - 页面HTML
    /// * `url` - 页面URL
    ///
    /// # 返回值
    ///
    /// 返回 `{标题, 类型, URL, 文本}`，文本截断到 EXTRACT_MAX_CHARS 字符
    pub fn extract(&self, html: &str, url: &str) -> CapturedPage {
        let document = Html::parse_document(html);

        let title = Selector::parse("title")
            .ok()
            .and_then(|selector| {
                document
                    .select(&selector)
                    .next()
                    .map(|el| el.text().collect::<String>())
            })
            .map(|raw| normalize_whitespace(&raw))
            .unwrap_or_default();

        let body_text = Selector::parse("body")
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .map(|body| {
                let mut pieces = Vec::new();
                collect_visible_text(body, &mut pieces);
                normalize_whitespace(&pieces.join(" "))
            })
            .unwrap_or_default();

        CapturedPage {
            title,
            content_type: ContentType::from_url(url),
            url: url.to_string(),
            text: truncate_chars(&body_text, EXTRACT_MAX_CHARS),
        }
    }
}

/// 收集元素下的可见文本
///
/// script/style/noscript 的内容不属于页面可见文本，跳过
fn collect_visible_text(element: ElementRef, pieces: &mut Vec<String>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            let tag = child_element.value().name();
            if tag != "script" && tag != "style" && tag != "noscript" {
                collect_visible_text(child_element, pieces);
            }
        }
    }
}
