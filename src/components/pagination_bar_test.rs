use super::*;

#[test]
fn range_label_shows_page_pages_and_total() {
    assert_eq!(range_label(2, 4, 37), "Page 2 / 4 (37 total)");
}

#[test]
fn range_label_handles_the_empty_collection() {
    assert_eq!(range_label(1, 1, 0), "Page 1 / 1 (0 total)");
}
