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

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::models::content_record::{ContentRecord, ContentType};

/// 内容记录响应数据传输对象
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordDto {
    /// 标题
    pub title: String,
    /// 内容类型
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// 来源URL
    pub url: String,
    /// 摘要
    pub summary: String,
    /// 展示用户名
    pub username: String,
    /// 创建时间
    pub timestamp: DateTime<FixedOffset>,
}

impl From<ContentRecord> for RecordDto {
    fn from(record: ContentRecord) -> Self {
        Self {
            title: record.title,
            content_type: record.content_type,
            url: record.url,
            summary: record.summary,
            username: record.username,
            timestamp: record.created_at,
        }
    }
}

/// 用户可见的操作通知
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NoticeDto {
    /// 级别 (success, info, error)
    pub level: String,
    /// 通知文案
    pub message: String,
}

impl NoticeDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: "info".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: "error".to_string(),
            message: message.into(),
        }
    }
}

/// 仪表盘响应数据传输对象
///
/// `location` 是消费完交接参数后客户端应展示的规范地址
#[derive(Debug, Deserialize, Serialize)]
pub struct DashboardResponseDto {
    /// 当前用户的展示用户名
    pub user: String,
    /// 当前用户的全部记录
    pub records: Vec<RecordDto>,
    /// 本次请求产生的通知（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeDto>,
    /// 规范地址
    pub location: String,
}

/// 单个用户主页响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileResponseDto {
    /// 展示用户名
    pub username: String,
    /// 记录总数
    pub total: usize,
    /// 文章数
    pub articles: usize,
    /// 视频数
    pub videos: usize,
    /// 记录列表，按创建时间倒序
    pub items: Vec<RecordDto>,
}

impl ProfileResponseDto {
    /// 从记录列表构建主页响应
    pub fn from_records(username: String, records: Vec<ContentRecord>) -> Self {
        let items: Vec<RecordDto> = records.into_iter().map(RecordDto::from).collect();
        let articles = items
            .iter()
            .filter(|item| item.content_type == ContentType::Article)
            .count();
        let videos = items
            .iter()
            .filter(|item| item.content_type == ContentType::Video)
            .count();
        Self {
            username,
            total: items.len(),
            articles,
            videos,
            items,
        }
    }
}

/// 用户活跃度摘要
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileSummaryDto {
    /// 展示用户名
    pub username: String,
    /// 记录数
    pub count: usize,
}

/// 全部用户总览响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfilesOverviewDto {
    /// 用户数
    pub readers: usize,
    /// 记录总数
    pub items: usize,
    /// 文章总数
    pub articles: usize,
    /// 视频总数
    pub videos: usize,
    /// 按活跃度倒序的用户列表
    pub profiles: Vec<ProfileSummaryDto>,
}

/// 会话响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct SessionResponseDto {
    /// 会话令牌
    pub token: uuid::Uuid,
    /// 用户邮箱
    pub email: String,
    /// 展示用户名
    pub username: String,
}
