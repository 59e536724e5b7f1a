use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: i64,
    label: String,
}

impl PagedRecord for Row {
    fn record_id(&self) -> i64 {
        self.id
    }
}

fn row(id: i64) -> Row {
    Row {
        id,
        label: format!("row-{id}"),
    }
}

fn rows(ids: std::ops::Range<i64>) -> Vec<Row> {
    ids.map(row).collect()
}

// =============================================================
// Offset / limit math
// =============================================================

#[test]
fn first_page_has_zero_offset() {
    let state = PagedState::<Row>::new();
    assert_eq!(state.page, 1);
    assert_eq!(state.offset(), 0);
    assert_eq!(state.limit(), DEFAULT_PAGE_SIZE);
}

#[test]
fn page_two_of_ten_requests_offset_ten() {
    let mut state = PagedState::<Row>::new();
    state.set_page(2);
    assert_eq!(state.offset(), 10);
    assert_eq!(state.limit(), 10);
}

#[test]
fn offset_scales_with_page_and_size() {
    let mut state = PagedState::<Row>::new();
    state.page_size = 25;
    for page in 1..=40 {
        state.set_page(page);
        assert_eq!(state.offset(), (page - 1) * 25);
    }
}

#[test]
fn set_page_clamps_to_one() {
    let mut state = PagedState::<Row>::new();
    state.set_page(0);
    assert_eq!(state.page, 1);
    assert_eq!(state.offset(), 0);
}

#[test]
fn page_count_rounds_up_and_never_hits_zero() {
    let mut state = PagedState::<Row>::new();
    assert_eq!(state.page_count(), 1);
    state.total = 10;
    assert_eq!(state.page_count(), 1);
    state.total = 11;
    assert_eq!(state.page_count(), 2);
    state.total = 95;
    assert_eq!(state.page_count(), 10);
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_bumps_seq() {
    let mut state = PagedState::<Row>::new();
    let first = state.begin_fetch();
    assert!(state.loading);
    let second = state.begin_fetch();
    assert!(second > first);
}

#[test]
fn apply_page_replaces_items_and_total() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    assert!(state.apply_page(seq, rows(0..10), 37));
    assert_eq!(state.items.len(), 10);
    assert_eq!(state.total, 37);
    assert!(!state.loading);
}

#[test]
fn apply_page_clamps_items_to_page_size() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    assert!(state.apply_page(seq, rows(0..15), 15));
    assert_eq!(state.items.len(), 10);
}

#[test]
fn stale_page_result_is_discarded() {
    let mut state = PagedState::<Row>::new();
    let old = state.begin_fetch();
    let new = state.begin_fetch();
    assert!(state.apply_page(new, rows(0..3), 3));
    // The slow first response lands afterwards and must not win.
    assert!(!state.apply_page(old, rows(10..20), 99));
    assert_eq!(state.items, rows(0..3));
    assert_eq!(state.total, 3);
}

#[test]
fn failed_fetch_keeps_previous_records() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    assert!(state.apply_page(seq, rows(0..5), 5));

    let seq = state.begin_fetch();
    assert!(state.loading);
    assert!(state.fetch_failed(seq));
    assert!(!state.loading);
    assert_eq!(state.items, rows(0..5));
    assert_eq!(state.total, 5);
}

#[test]
fn stale_failure_does_not_clear_loading() {
    let mut state = PagedState::<Row>::new();
    let old = state.begin_fetch();
    let _new = state.begin_fetch();
    assert!(!state.fetch_failed(old));
    assert!(state.loading);
}

#[test]
fn refresh_changes_fetch_key_without_moving_page() {
    let mut state = PagedState::<Row>::new();
    state.set_page(3);
    let before = state.fetch_key();
    state.refresh();
    let after = state.fetch_key();
    assert_ne!(before, after);
    assert_eq!(state.page, 3);
}

// =============================================================
// Local mutations
// =============================================================

#[test]
fn remove_by_id_drops_exactly_one_record() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    state.apply_page(seq, rows(1..11), 30);

    assert!(state.remove_by_id(7));
    assert_eq!(state.items.len(), 9);
    assert!(state.items.iter().all(|r| r.id != 7));
    assert_eq!(state.total, 29);
}

#[test]
fn remove_by_id_preserves_order_of_the_rest() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    state.apply_page(seq, rows(1..11), 10);
    state.remove_by_id(4);

    let ids: Vec<i64> = state.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn remove_by_id_missing_record_changes_nothing() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    state.apply_page(seq, rows(1..4), 3);

    assert!(!state.remove_by_id(99));
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.total, 3);
}

#[test]
fn patch_replaces_the_matching_record_in_place() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    state.apply_page(seq, rows(1..4), 3);

    let updated = Row {
        id: 2,
        label: "fixed".to_owned(),
    };
    assert!(state.patch(updated.clone()));
    assert_eq!(state.items[1], updated);
    assert_eq!(state.items[0], row(1));
    assert_eq!(state.items[2], row(3));
}

#[test]
fn patch_of_unknown_id_is_a_noop() {
    let mut state = PagedState::<Row>::new();
    let seq = state.begin_fetch();
    state.apply_page(seq, rows(1..4), 3);

    assert!(!state.patch(row(42)));
    assert_eq!(state.items, rows(1..4));
}
