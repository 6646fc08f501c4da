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

use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::record_response::{
    ProfileResponseDto, ProfileSummaryDto, ProfilesOverviewDto,
};
use crate::domain::models::content_record::{ContentRecord, ContentType};
use crate::domain::repositories::content_record_repository::ContentRecordRepository;
use crate::infrastructure::repositories::content_record_repo_impl::ContentRecordRepositoryImpl;
use crate::presentation::errors::AppError;
use crate::utils::url_utils;

/// 单个用户的公开主页
///
/// 先按展示用户名精确匹配；没有命中时回退为按邮箱本地部分匹配
pub async fn get_profile(
    Path(username): Path<String>,
    Extension(records): Extension<Arc<ContentRecordRepositoryImpl>>,
) -> Result<Response, AppError> {
    let mut items = records.find_by_username(&username).await?;
    if items.is_empty() {
        items = records.find_by_email_local_part(&username).await?;
    }

    Ok(Json(ProfileResponseDto::from_records(username, items)).into_response())
}

/// 全部用户总览
///
/// 记录按展示用户名分组，最活跃的用户排在最前
pub async fn list_profiles(
    Extension(records): Extension<Arc<ContentRecordRepositoryImpl>>,
) -> Result<Response, AppError> {
    let all = records.list_all().await?;

    let items = all.len();
    let articles = all
        .iter()
        .filter(|record| record.content_type == ContentType::Article)
        .count();
    let videos = all
        .iter()
        .filter(|record| record.content_type == ContentType::Video)
        .count();

    let mut grouped: HashMap<String, usize> = HashMap::new();
    for record in &all {
        grouped
            .entry(group_name(record))
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    let mut profiles: Vec<ProfileSummaryDto> = grouped
        .into_iter()
        .map(|(username, count)| ProfileSummaryDto { username, count })
        .collect();
    profiles.sort_by(|a, b| b.count.cmp(&a.count).then(a.username.cmp(&b.username)));

    Ok(Json(ProfilesOverviewDto {
        readers: profiles.len(),
        items,
        articles,
        videos,
        profiles,
    })
    .into_response())
}

fn group_name(record: &ContentRecord) -> String {
    if record.username.is_empty() {
        url_utils::email_local_part(&record.user_email).to_string()
    } else {
        record.username.clone()
    }
}
