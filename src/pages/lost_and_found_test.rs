use super::*;

#[test]
fn table_has_one_header_per_column() {
    assert_eq!(HEADERS.len(), 7);
    assert_eq!(HEADERS[0], "ID");
    assert_eq!(HEADERS[6], "Actions");
}

#[test]
fn description_cell_truncates_past_the_budget() {
    let long = "a".repeat(DESCRIPTION_BUDGET + 10);
    let shown = description_cell(&long);
    assert_eq!(shown.chars().count(), DESCRIPTION_BUDGET + 1);
    assert!(shown.ends_with('…'));
}

#[test]
fn description_cell_keeps_short_text_verbatim() {
    assert_eq!(description_cell("black umbrella"), "black umbrella");
}
