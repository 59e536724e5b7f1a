use super::*;

#[test]
fn table_has_one_header_per_column() {
    assert_eq!(HEADERS.len(), 7);
    assert_eq!(HEADERS[1], "Type");
}

#[test]
fn content_cell_uses_a_twenty_char_budget() {
    let long = "b".repeat(40);
    let shown = content_cell(&long);
    assert_eq!(shown.chars().count(), CONTENT_BUDGET + 1);
    assert!(shown.ends_with('…'));
}

#[test]
fn content_cell_keeps_short_text_verbatim() {
    assert_eq!(content_cell("study room"), "study room");
}
