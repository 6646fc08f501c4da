// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::session::Session;
use crate::domain::repositories::content_record_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 会话仓库特质
///
/// 定义会话数据访问接口
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 保存会话
    async fn create(&self, session: &Session) -> Result<(), RepositoryError>;
    /// 根据令牌查找会话
    async fn find_by_token(&self, token: Uuid) -> Result<Option<Session>, RepositoryError>;
    /// 删除会话，返回删除条数
    async fn delete(&self, token: Uuid) -> Result<u64, RepositoryError>;
}
