//! 字符串排序比较
//!
//! 近似 locale 感知的三级比较：
//! - 一级：NFKD 分解、去掉组合附加符号、忽略大小写；空白 < 标点 < 其他符号 < 数字 < 字母
//! - 二级：附加符号（无重音在前）
//! - 三级：大小写（小写在前）
//!
//! 三级都相同时按原字符串比较，保证全序。

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 生成排序键（一级比较的字符序列）
pub fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// 字符分组
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_punctuation() {
        1
    } else if c.is_numeric() {
        3
    } else if c.is_alphabetic() {
        4
    } else {
        2
    }
}

fn primary_weights(s: &str) -> Vec<(u8, char)> {
    collation_key(s).chars().map(|c| (char_class(c), c)).collect()
}

fn accent_key(s: &str) -> String {
    s.nfkd().flat_map(char::to_lowercase).collect()
}

fn case_weights(s: &str) -> Vec<bool> {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

/// 比较两个字符串
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_weights(a)
        .cmp(&primary_weights(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_weights(a).cmp(&case_weights(b)))
        .then_with(|| a.cmp(b))
}
