use super::*;

#[test]
fn iso_datetime_formats_to_unpadded_ymd() {
    assert_eq!(format_ymd("2024-03-05T08:30:00Z"), "2024-3-5");
}

#[test]
fn space_separated_datetime_is_accepted() {
    assert_eq!(format_ymd("2023-11-20 14:00:00"), "2023-11-20");
}

#[test]
fn plain_date_passes_through_unpadded() {
    assert_eq!(format_ymd("2024-01-09"), "2024-1-9");
}

#[test]
fn non_date_input_is_returned_unchanged() {
    assert_eq!(format_ymd("yesterday"), "yesterday");
    assert_eq!(format_ymd(""), "");
    assert_eq!(format_ymd("2024-xx-01"), "2024-xx-01");
}

#[test]
fn optional_timestamps_render_empty_when_absent() {
    assert_eq!(format_ymd_opt(None), "");
    assert_eq!(format_ymd_opt(Some("2024-02-01T00:00:00Z")), "2024-2-1");
}
