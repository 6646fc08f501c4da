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

/// 注册/登录请求数据传输对象
///
/// 不做服务端口令校验，password 字段被接受但不使用
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SessionRequestDto {
    /// 用户邮箱
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    /// 展示用户名（可选）
    pub username: Option<String>,
    /// 口令（被忽略）
    pub password: Option<String>,
}
