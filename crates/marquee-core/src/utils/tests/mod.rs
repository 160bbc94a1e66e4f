#![cfg(test)]

use crate::utils::sanitize_html_class;

#[test]
fn test_sanitize_keeps_token_charset() {
    assert_eq!(sanitize_html_class("event-page_2"), "event-page_2");
    assert_eq!(sanitize_html_class("foo bar"), "foobar");
    assert_eq!(sanitize_html_class("foo.bar!baz"), "foobarbaz");
    assert_eq!(sanitize_html_class("<script>"), "script");
}

#[test]
fn test_sanitize_can_empty_a_label() {
    assert_eq!(sanitize_html_class(""), "");
    assert_eq!(sanitize_html_class("@#$%"), "");
    assert_eq!(sanitize_html_class("émoji"), "moji");
}
