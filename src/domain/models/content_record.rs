// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::models::session::Session;
use crate::utils::url_utils;

/// 内容记录实体
///
/// 表示一个用户收藏的一条已读文章或已看视频。记录在创建后不再
/// 更新，删除通过 (user_email, url) 定位。摘要在写入前必须已经
/// 存在：要么由用户手动填写，要么由摘要引擎生成。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 来源页面标题
    pub title: String,
    /// 内容类型，由来源URL推断或由用户指定
    pub content_type: ContentType,
    /// 来源URL，在单个用户的收藏内唯一
    pub url: String,
    /// 内容摘要，入库时始终非空
    pub summary: String,
    /// 所属用户的邮箱标识
    pub user_email: String,
    /// 展示用户名，缺省时回退为邮箱本地部分
    pub username: String,
    /// 创建时间，用于个人主页的展示排序
    pub created_at: DateTime<FixedOffset>,
}

/// 内容类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// 文章
    #[default]
    Article,
    /// 视频
    Video,
}

impl ContentType {
    /// 根据来源URL推断内容类型
    ///
    /// URL主机属于已知视频平台时为视频，否则为文章
    pub fn from_url(url: &str) -> Self {
        if url_utils::is_video_url(url) {
            ContentType::Video
        } else {
            ContentType::Article
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentType::Article => write!(f, "article"),
            ContentType::Video => write!(f, "video"),
        }
    }
}

impl FromStr for ContentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(ContentType::Article),
            "video" => Ok(ContentType::Video),
            _ => Err(()),
        }
    }
}

impl ContentRecord {
    /// 创建一条新的内容记录
    ///
    /// # 参数
    ///
    /// * `title` - 标题
    /// * `content_type` - 内容类型
    /// * `url` - 来源URL
    /// * `summary` - 摘要文本
    /// * `session` - 当前用户会话
    ///
    /// # 返回值
    ///
    /// 返回新创建的内容记录
    pub fn new(
        title: String,
        content_type: ContentType,
        url: String,
        summary: String,
        session: &Session,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content_type,
            url,
            summary,
            user_email: session.email.clone(),
            username: session.display_name().to_string(),
            created_at: Utc::now().into(),
        }
    }
}
