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

/// 页面捕获请求数据传输对象
///
/// 携带HTML时直接提取；否则先抓取页面再提取
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CaptureRequestDto {
    /// 页面URL
    #[validate(url(message = "url is invalid"))]
    pub url: String,
    /// 页面HTML（可选）
    pub html: Option<String>,
}
