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

use crate::domain::models::session::Session;
use crate::domain::repositories::content_record_repository::RepositoryError;
use crate::domain::repositories::session_repository::SessionRepository;
use crate::infrastructure::database::entities::session as session_entity;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

/// 会话仓库实现
#[derive(Clone)]
pub struct SessionRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryImpl {
    /// 创建新的会话仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn create(&self, session: &Session) -> Result<(), RepositoryError> {
        let active_model = session_entity::ActiveModel {
            token: Set(session.token),
            email: Set(session.email.clone()),
            username: Set(session.username.clone()),
            created_at: Set(session.created_at),
        };

        session_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_token(&self, token: Uuid) -> Result<Option<Session>, RepositoryError> {
        let model = session_entity::Entity::find_by_id(token)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(|m| Session {
            token: m.token,
            email: m.email,
            username: m.username,
            created_at: m.created_at,
        }))
    }

    async fn delete(&self, token: Uuid) -> Result<u64, RepositoryError> {
        let result = session_entity::Entity::delete_by_id(token)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}
