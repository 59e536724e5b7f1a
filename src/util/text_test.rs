use super::*;

#[test]
fn short_text_is_returned_verbatim() {
    assert_eq!(truncate_ellipsis("hello", 25), "hello");
}

#[test]
fn text_at_exactly_the_budget_is_not_truncated() {
    let text = "x".repeat(20);
    assert_eq!(truncate_ellipsis(&text, 20), text);
}

#[test]
fn long_text_is_cut_with_trailing_ellipsis() {
    let text = "a".repeat(30);
    let shown = truncate_ellipsis(&text, 25);
    assert_eq!(shown.chars().count(), 26);
    assert!(shown.ends_with('…'));
    assert!(shown.starts_with(&"a".repeat(25)));
}

#[test]
fn budget_counts_characters_not_bytes() {
    let text = "电话号码登记处已搬迁至新楼";
    let shown = truncate_ellipsis(text, 5);
    assert_eq!(shown, "电话号码登…");
}

#[test]
fn empty_text_survives_any_budget() {
    assert_eq!(truncate_ellipsis("", 0), "");
    assert_eq!(truncate_ellipsis("", 25), "");
}

#[test]
fn or_missing_substitutes_for_none_and_blank() {
    assert_eq!(or_missing(None), MISSING_FIELD);
    assert_eq!(or_missing(Some("")), MISSING_FIELD);
    assert_eq!(or_missing(Some("   ")), MISSING_FIELD);
}

#[test]
fn or_missing_passes_real_values_through() {
    assert_eq!(or_missing(Some("Library")), "Library");
}
