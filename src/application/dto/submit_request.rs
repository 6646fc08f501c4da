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

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::content_record::ContentType;

/// 手动提交内容的请求数据传输对象
///
/// 摘要留空时在写入前由摘要引擎生成
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SubmitRequestDto {
    /// 标题
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,
    /// 内容类型
    #[serde(rename = "type", default)]
    pub content_type: ContentType,
    /// 来源URL
    #[validate(url(message = "url is invalid"))]
    pub url: String,
    /// 摘要（可选）
    pub summary: Option<String>,
}
