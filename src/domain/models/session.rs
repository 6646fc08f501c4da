// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::url_utils;

/// 会话实体
///
/// 表示当前"已登录"用户的身份。应用不做服务端口令校验，
/// 会话只是一份由令牌定位的 {email, username} 身份对象，
/// 被显式传入每个需要用户身份的流程。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// 会话令牌
    pub token: Uuid,
    /// 用户邮箱标识
    pub email: String,
    /// 展示用户名（可选）
    pub username: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl Session {
    /// 创建一个新的会话
    ///
    /// # 参数
    ///
    /// * `email` - 用户邮箱
    /// * `username` - 展示用户名（可选）
    ///
    /// # 返回值
    ///
    /// 返回带有新令牌的会话
    pub fn new(email: String, username: Option<String>) -> Self {
        Self {
            token: Uuid::new_v4(),
            email,
            username,
            created_at: Utc::now().into(),
        }
    }

    /// 展示用户名
    ///
    /// 未设置用户名时回退为邮箱本地部分
    pub fn display_name(&self) -> &str {
        match &self.username {
            Some(name) if !name.is_empty() => name,
            _ => url_utils::email_local_part(&self.email),
        }
    }
}
