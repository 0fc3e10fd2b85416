use super::*;

#[test]
fn test_plain_text_strips_tags() {
    assert_eq!(plain_text("<p>Hello <strong>world</strong></p>"), "Hello world");
    assert_eq!(plain_text("<p>a</p><p>b</p>"), "ab");
    assert_eq!(plain_text("<p></p>"), "");
}

#[test]
fn test_plain_text_decodes_entities() {
    assert_eq!(plain_text("<p>a &amp; b &lt;c&gt;</p>"), "a & b <c>");
    assert_eq!(plain_text("&#1041;&#x43B;"), "Бл");
    assert_eq!(plain_text("x&nbsp;y"), "x\u{a0}y");
    assert_eq!(plain_text("&unknown;"), "&unknown;");
}

#[test]
fn test_plain_text_whitespace_only_trims_to_empty() {
    assert!(plain_text("<p>&nbsp; </p>").trim().is_empty());
}

#[test]
fn test_excerpt_keeps_short_text() {
    assert_eq!(excerpt("short", 120), "short");
    assert!(matches!(excerpt("short", 120), Cow::Borrowed(_)));
}

#[test]
fn test_excerpt_truncates_on_graphemes() {
    let text = "я".repeat(130);
    let out = excerpt(&text, 120);
    assert_eq!(out.chars().count(), 120 + EXCERPT_ELLIPSIS.len());
    assert!(out.ends_with(EXCERPT_ELLIPSIS));

    let exact = "a".repeat(120);
    assert_eq!(excerpt(&exact, 120), exact.as_str());
}
