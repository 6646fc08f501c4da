// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 内容记录索引迁移
///
/// (user_email, url) 唯一索引在存储层保证同一用户不会重复收藏同一链接
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("uq_content_records_user_url")
                    .table(ContentRecords::Table)
                    .col(ContentRecords::UserEmail)
                    .col(ContentRecords::Url)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_records_username")
                    .table(ContentRecords::Table)
                    .col(ContentRecords::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_records_user_email")
                    .table(ContentRecords::Table)
                    .col(ContentRecords::UserEmail)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_content_records_user_email")
                    .table(ContentRecords::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_content_records_username")
                    .table(ContentRecords::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_content_records_user_url")
                    .table(ContentRecords::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ContentRecords {
    Table,
    UserEmail,
    Url,
    Username,
}
