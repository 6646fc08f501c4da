// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::content_record::ContentRecord;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 记录已存在
    #[error("Record already exists")]
    AlreadyExists,
}

/// 内容记录仓库特质
///
/// 定义内容记录数据访问接口。insert 依赖 (user_email, url)
/// 唯一索引做无竞争写入，冲突以 AlreadyExists 返回
#[async_trait]
pub trait ContentRecordRepository: Send + Sync {
    /// 插入新记录，唯一键冲突时返回 AlreadyExists
    async fn insert(&self, record: &ContentRecord) -> Result<(), RepositoryError>;
    /// 检查用户是否已收藏该URL
    async fn exists(&self, user_email: &str, url: &str) -> Result<bool, RepositoryError>;
    /// 查找某个用户的全部记录
    async fn find_by_user(&self, user_email: &str) -> Result<Vec<ContentRecord>, RepositoryError>;
    /// 按展示用户名查找记录，按创建时间倒序
    async fn find_by_username(&self, username: &str)
        -> Result<Vec<ContentRecord>, RepositoryError>;
    /// 按邮箱本地部分查找记录，按创建时间倒序
    async fn find_by_email_local_part(
        &self,
        local_part: &str,
    ) -> Result<Vec<ContentRecord>, RepositoryError>;
    /// 列出全部记录
    async fn list_all(&self) -> Result<Vec<ContentRecord>, RepositoryError>;
    /// 按 (user_email, url) 删除记录，返回删除条数
    async fn delete(&self, user_email: &str, url: &str) -> Result<u64, RepositoryError>;
}
