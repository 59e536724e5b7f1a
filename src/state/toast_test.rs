use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push_success("saved");
    let b = state.push_error("failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_records_kind_and_text() {
    let mut state = ToastState::default();
    state.push_error("Delete failed");
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].text, "Delete failed");
}

#[test]
fn dismiss_removes_exactly_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push_success("a");
    let b = state.push_success("b");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    // Dismissing again is harmless.
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn queue_is_bounded_and_evicts_oldest_first() {
    let mut state = ToastState::default();
    for i in 0..(TOAST_CAP + 3) {
        state.push_success(format!("t{i}"));
    }
    assert_eq!(state.toasts.len(), TOAST_CAP);
    assert_eq!(state.toasts[0].text, "t3");
}

#[test]
fn dismiss_oldest_pops_front_only() {
    let mut state = ToastState::default();
    state.push_success("first");
    state.push_success("second");
    state.dismiss_oldest();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].text, "second");
    state.dismiss_oldest();
    state.dismiss_oldest();
    assert!(state.toasts.is_empty());
}
