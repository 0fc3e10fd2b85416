//! 富文本标记 → 纯文本
//!
//! 与浏览器 `textContent` 的语义一致：去掉所有标签，只保留可见文本，并解码字符实体。

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

pub const EXCERPT_ELLIPSIS: &str = "...";

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern"))
}

fn entity_pattern() -> &'static Regex {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    ENTITY.get_or_init(|| {
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("entity pattern")
    })
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "laquo" => Some('«'),
        "raquo" => Some('»'),
        "mdash" => Some('—'),
        "ndash" => Some('–'),
        "hellip" => Some('…'),
        _ => None,
    }
}

/// 去掉标签并解码实体；不做首尾空白处理
pub fn plain_text(markup: &str) -> String {
    let stripped = tag_pattern().replace_all(markup, "");
    entity_pattern()
        .replace_all(&stripped, |caps: &Captures<'_>| match decode_entity(&caps[1]) {
            Some(ch) => ch.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// 按字素截断，超出 `max` 时追加省略号
pub fn excerpt(text: &str, max: usize) -> Cow<'_, str> {
    let mut graphemes = text.grapheme_indices(true);
    match graphemes.nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], EXCERPT_ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/markup.rs"]
mod tests;
