use super::*;

#[test]
fn table_has_one_header_per_column() {
    assert_eq!(HEADERS.len(), 7);
    assert_eq!(HEADERS[4], "Submitted");
}

#[test]
fn submitted_cell_formats_known_timestamps() {
    assert_eq!(submitted_cell(Some("2024-03-05T08:30:00Z")), "2024-3-5");
}

#[test]
fn submitted_cell_is_blank_when_missing() {
    assert_eq!(submitted_cell(None), "");
}
