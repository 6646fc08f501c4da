// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 空白字符归一化
///
/// 去除首尾空白并将连续的空白字符（包括换行和制表符）折叠为单个空格，
/// 用于清理提取文本和摘要提示词
///
/// # 参数
///
/// * `text` - 原始文本
///
/// # 返回值
///
/// 归一化后的文本
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 按字符数截断文本
///
/// 截断以字符为单位，保证不会落在UTF-8编码的中间字节上
///
/// # 参数
///
/// * `text` - 原始文本
/// * `max_chars` - 最大字符数
///
/// # 返回值
///
/// 截断后的文本
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
