use super::*;

#[test]
fn ok_code_is_ten_thousand() {
    assert_eq!(OK, 10_000);
}

#[test]
fn known_codes_resolve_to_fixed_messages() {
    assert_eq!(message_for(OK), "OK");
    assert_eq!(message_for(40_000), "Bad request");
    assert_eq!(message_for(40_100), "Not authorized");
    assert_eq!(message_for(40_400), "Not found");
    assert_eq!(message_for(50_000), "Server error");
}

#[test]
fn unknown_codes_collapse_to_generic_failure() {
    assert_eq!(message_for(0), "Request failed");
    assert_eq!(message_for(-1), "Request failed");
    assert_eq!(message_for(99_999), "Request failed");
}
