use super::*;

#[test]
fn table_has_one_header_per_column() {
    assert_eq!(HEADERS.len(), 4);
    assert_eq!(HEADERS[1], "Department");
}

#[test]
fn entry_requires_both_fields() {
    assert!(entry_is_valid("Registrar", "555-0100"));
    assert!(!entry_is_valid("", "555-0100"));
    assert!(!entry_is_valid("Registrar", ""));
    assert!(!entry_is_valid("   ", "555-0100"));
}
