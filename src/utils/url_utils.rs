// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 已知视频平台域名
const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be", "vimeo.com"];

/// 判断URL是否指向已知视频平台
///
/// 按主机名匹配，子域名（如 www.youtube.com）同样命中
///
/// # 参数
///
/// * `url` - 待判断的URL
///
/// # 返回值
///
/// 主机属于已知视频平台时返回true
pub fn is_video_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    VIDEO_HOSTS
        .iter()
        .any(|candidate| host == *candidate || host.ends_with(&format!(".{}", candidate)))
}

/// 取邮箱地址的本地部分
///
/// 用作缺省展示用户名，例如 "alice@example.com" -> "alice"
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
