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

use crate::domain::models::content_record::{ContentRecord, ContentType};
use crate::domain::repositories::content_record_repository::{
    ContentRecordRepository, RepositoryError,
};
use crate::infrastructure::database::entities::content_record as record_entity;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use std::str::FromStr;
use std::sync::Arc;

/// 内容记录仓库实现
#[derive(Clone)]
pub struct ContentRecordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ContentRecordRepositoryImpl {
    /// 创建新的内容记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: record_entity::Model) -> ContentRecord {
    ContentRecord {
        id: model.id,
        title: model.title,
        content_type: ContentType::from_str(&model.content_type).unwrap_or_default(),
        url: model.url,
        summary: model.summary,
        user_email: model.user_email,
        username: model.username,
        created_at: model.created_at,
    }
}

#[async_trait]
impl ContentRecordRepository for ContentRecordRepositoryImpl {
    async fn insert(&self, record: &ContentRecord) -> Result<(), RepositoryError> {
        let active_model = record_entity::ActiveModel {
            id: Set(record.id),
            title: Set(record.title.clone()),
            content_type: Set(record.content_type.to_string()),
            url: Set(record.url.clone()),
            summary: Set(record.summary.clone()),
            user_email: Set(record.user_email.clone()),
            username: Set(record.username.clone()),
            created_at: Set(record.created_at),
        };

        // 唯一索引 + DO NOTHING 保证同一 (user, url) 并发提交时只落一条
        let result = record_entity::Entity::insert(active_model)
            .on_conflict(
                OnConflict::columns([
                    record_entity::Column::UserEmail,
                    record_entity::Column::Url,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db.as_ref())
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotInserted) => Err(RepositoryError::AlreadyExists),
            Err(err) => Err(RepositoryError::Database(err)),
        }
    }

    async fn exists(&self, user_email: &str, url: &str) -> Result<bool, RepositoryError> {
        let count = record_entity::Entity::find()
            .filter(record_entity::Column::UserEmail.eq(user_email))
            .filter(record_entity::Column::Url.eq(url))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn find_by_user(&self, user_email: &str) -> Result<Vec<ContentRecord>, RepositoryError> {
        let models = record_entity::Entity::find()
            .filter(record_entity::Column::UserEmail.eq(user_email))
            .order_by_asc(record_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<ContentRecord>, RepositoryError> {
        let models = record_entity::Entity::find()
            .filter(record_entity::Column::Username.eq(username))
            .order_by_desc(record_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_email_local_part(
        &self,
        local_part: &str,
    ) -> Result<Vec<ContentRecord>, RepositoryError> {
        let models = record_entity::Entity::find()
            .filter(record_entity::Column::UserEmail.like(format!("{}@%", local_part)))
            .order_by_desc(record_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn list_all(&self) -> Result<Vec<ContentRecord>, RepositoryError> {
        let models = record_entity::Entity::find()
            .order_by_desc(record_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn delete(&self, user_email: &str, url: &str) -> Result<u64, RepositoryError> {
        let result = record_entity::Entity::delete_many()
            .filter(record_entity::Column::UserEmail.eq(user_email))
            .filter(record_entity::Column::Url.eq(url))
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}
